//! UseCase: ゲームのサーバー一覧の取得

use std::{collections::BTreeMap, sync::Arc};

use crate::domain::{GameEntry, GameId, GameTable, GameTableError};

use super::error::BatchError;

/// ゲームのサーバー一覧取得のユースケース
pub struct GetGameServersUseCase {
    table: Arc<dyn GameTable>,
}

impl GetGameServersUseCase {
    pub fn new(table: Arc<dyn GameTable>) -> Self {
        Self { table }
    }

    /// 指定された各ゲームのスナップショット（サーバー一覧を含む）
    ///
    /// キーは送信された ID そのまま。
    pub async fn execute(
        &self,
        ids: Vec<String>,
    ) -> Result<BTreeMap<String, Result<GameEntry, GameTableError>>, BatchError> {
        if ids.is_empty() {
            return Err(BatchError::NoIdsSpecified);
        }

        let mut servers = BTreeMap::new();
        for raw_id in ids {
            let result = match GameId::new(raw_id.as_str()) {
                Ok(id) => self.table.snapshot(&id, true).await,
                Err(e) => Err(e),
            };
            servers.insert(raw_id, result);
        }
        Ok(servers)
    }
}
