//! UseCase 層
//!
//! HTTP 層から呼ばれるアプリケーションの操作を定義します。
//! ゲームテーブルへのアクセスは `GameTable` trait 経由で行います。

mod delete_games;
mod error;
mod get_game_servers;
mod list_games;
mod refresh_game;
mod upsert_games;

pub use delete_games::DeleteGamesUseCase;
pub use error::BatchError;
pub use get_game_servers::GetGameServersUseCase;
pub use list_games::ListGamesUseCase;
pub use refresh_game::{BusyPolicy, RefreshCallback, RefreshGameUseCase, RefreshResult};
pub use upsert_games::{BatchOutcome, GameDraft, UpsertGamesUseCase, UpsertMode};
