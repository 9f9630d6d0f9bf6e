//! HTTP API server.

pub mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
