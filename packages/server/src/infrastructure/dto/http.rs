//! HTTP API payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One game in a create/update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameEntryPost {
    pub id: Option<String>,
    pub name: Option<String>,
    pub proxy: Option<String>,
    pub adapter: Option<String>,
    pub settings: Option<BTreeMap<String, String>>,
}

/// Body of every authenticated endpoint. `/system/*` only reads the password.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameCollectionRequest {
    #[serde(default)]
    pub password: String,
    /// Used by create/update
    #[serde(default)]
    pub games: Vec<GameEntryPost>,
    /// Used by delete/refresh/servers
    pub ids: Option<Vec<String>>,
}

/// Envelope of every response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub message: String,
    pub content: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, message: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            status,
            message: message.into(),
            content,
        }
    }

    /// Response with an empty object as content.
    pub fn empty(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, message, serde_json::json!({}))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameDto {
    pub id: String,
    pub name: String,
    pub proxy: String,
    pub adapter: String,
    pub settings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerDto {
    pub name: String,
    pub info: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerDto {
    pub host: String,
    pub name: String,
    pub status: String,
    pub map: String,
    pub num_players: i32,
    pub max_players: i32,
    pub players: Vec<PlayerDto>,
    pub settings: BTreeMap<String, String>,
}

/// Server list of one game together with its query state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameServersDto {
    pub status: String,
    /// RFC 3339, absent if the list was never modified
    pub modified_at: Option<String>,
    pub servers: Vec<ServerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntryDto {
    pub timestamp: String,
    pub severity: String,
    pub status: u16,
    pub message: String,
}
