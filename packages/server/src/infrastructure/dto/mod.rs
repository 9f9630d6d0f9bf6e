//! Data Transfer Objects (DTOs) of the HTTP API.
//!
//! - `http`: request and response payloads
//! - `conversion`: DTO ↔ domain conversions

pub mod conversion;
pub mod http;
