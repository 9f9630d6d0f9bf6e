//! UseCase: ゲーム一覧の取得

use std::sync::Arc;

use crate::domain::{GameEntry, GameId, GameTable};

/// ゲーム一覧取得のユースケース
pub struct ListGamesUseCase {
    table: Arc<dyn GameTable>,
}

impl ListGamesUseCase {
    pub fn new(table: Arc<dyn GameTable>) -> Self {
        Self { table }
    }

    /// 全ゲームのスナップショット（サーバー一覧なし、ID 順）
    ///
    /// 一覧取得から読み出しまでの間に削除されたゲームは含めない
    pub async fn execute(&self) -> Vec<(GameId, GameEntry)> {
        let mut ids = self.table.all_ids().await;
        ids.sort();

        let mut games = Vec::with_capacity(ids.len());
        for id in ids {
            if let Ok(entry) = self.table.snapshot(&id, false).await {
                games.push((id, entry));
            }
        }
        games
    }
}
