//! UseCase: ゲームの削除
//!
//! 削除はリフレッシュ中のゲームに対しても即座に行われます。
//! 実行中のリフレッシュの書き戻しは NotFound で失敗し、エントリは復活しません。

use std::sync::Arc;

use crate::domain::{GameId, GameTable};

use super::{BatchOutcome, error::BatchError};

/// ゲーム削除のユースケース
pub struct DeleteGamesUseCase {
    table: Arc<dyn GameTable>,
}

impl DeleteGamesUseCase {
    pub fn new(table: Arc<dyn GameTable>) -> Self {
        Self { table }
    }

    /// 指定されたゲームをすべて削除し、ID ごとに結果を返す
    pub async fn execute(&self, ids: Vec<String>) -> Result<BatchOutcome, BatchError> {
        if ids.is_empty() {
            return Err(BatchError::NoIdsSpecified);
        }

        let mut outcome = BatchOutcome::new();
        for raw_id in ids {
            let result = match GameId::new(raw_id.as_str()) {
                Ok(id) => self.table.remove(&id).await,
                Err(e) => Err(e),
            };
            if result.is_ok() {
                tracing::info!("Removed game '{}'", raw_id);
            }
            outcome.insert(raw_id, result);
        }
        Ok(outcome)
    }
}
