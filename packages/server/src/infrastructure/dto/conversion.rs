//! Conversion logic between DTOs and domain entities.

use obozrenie_shared::time::timestamp_to_rfc3339;

use crate::{
    domain::{AdapterId, GameEntry, GameId, PlayerRecord, ProxyId, ServerRecord},
    infrastructure::{
        activity_log::ActivityEntry,
        dto::http::{ActivityEntryDto, GameDto, GameEntryPost, GameServersDto, PlayerDto, ServerDto},
    },
    usecase::GameDraft,
};

// ========================================
// DTO → Domain
// ========================================

impl GameEntryPost {
    /// Draft for the upsert use case; `None` when the post carries no id.
    pub fn into_draft(self) -> Option<GameDraft> {
        Some(GameDraft {
            id: self.id?,
            name: self.name,
            proxy: self.proxy.map(ProxyId::new),
            adapter: self.adapter.map(AdapterId::new),
            settings: self.settings,
        })
    }
}

// ========================================
// Domain → DTO
// ========================================

impl GameDto {
    pub fn from_entry(id: &GameId, entry: &GameEntry) -> Self {
        Self {
            id: id.as_str().to_string(),
            name: entry.info.name.clone(),
            proxy: entry.info.proxy.as_str().to_string(),
            adapter: entry.info.adapter.as_str().to_string(),
            settings: entry.settings.all(),
        }
    }
}

impl From<&PlayerRecord> for PlayerDto {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            name: player.name.clone(),
            info: player.info.clone(),
        }
    }
}

impl From<&ServerRecord> for ServerDto {
    fn from(server: &ServerRecord) -> Self {
        Self {
            host: server.host.clone(),
            name: server.name.clone(),
            status: server.status.clone(),
            map: server.map.clone(),
            num_players: server.num_players,
            max_players: server.max_players,
            players: server.players.iter().map(PlayerDto::from).collect(),
            settings: server.settings.clone(),
        }
    }
}

impl From<&GameEntry> for GameServersDto {
    fn from(entry: &GameEntry) -> Self {
        Self {
            status: entry.status.as_str().to_string(),
            modified_at: entry
                .servers
                .mod_time()
                .map(|t| timestamp_to_rfc3339(t.value())),
            servers: entry.servers.all().iter().map(ServerDto::from).collect(),
        }
    }
}

impl From<&ActivityEntry> for ActivityEntryDto {
    fn from(entry: &ActivityEntry) -> Self {
        Self {
            timestamp: timestamp_to_rfc3339(entry.timestamp.value()),
            severity: entry.severity.as_str().to_string(),
            status: entry.status,
            message: entry.message.clone(),
        }
    }
}
