//! Obozrenie game server tracker.
//!
//! Keeps a table of games and refreshes their server lists in the background
//! through pluggable proxies and adapters, served over an HTTP API.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
