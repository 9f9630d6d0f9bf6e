//! Shared application state.

use std::sync::Arc;

use tokio::sync::Notify;

use crate::{
    infrastructure::activity_log::ActivityLog,
    usecase::{
        DeleteGamesUseCase, GetGameServersUseCase, ListGamesUseCase, RefreshGameUseCase,
        UpsertGamesUseCase,
    },
};

use super::error::ApiError;

/// Shared application state
pub struct AppState {
    pub upsert_games_usecase: Arc<UpsertGamesUseCase>,
    pub delete_games_usecase: Arc<DeleteGamesUseCase>,
    pub list_games_usecase: Arc<ListGamesUseCase>,
    pub get_game_servers_usecase: Arc<GetGameServersUseCase>,
    pub refresh_game_usecase: Arc<RefreshGameUseCase>,
    /// API アクティビティのログ（/system/logs で返す）
    pub activity_log: Arc<ActivityLog>,
    /// 空文字列なら認証なし
    pub password: String,
    /// /system/quit で通知される
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn authorize(&self, password: &str) -> Result<(), ApiError> {
        if self.password.is_empty() || self.password == password {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
