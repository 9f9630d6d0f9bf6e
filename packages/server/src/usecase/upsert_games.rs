//! UseCase: ゲームの作成・更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpsertGamesUseCase::execute() メソッド
//! - ID ごとの結果（成功 / 失敗）の集計
//!
//! ### なぜこのテストが必要か
//! - Create は既存の ID を上書きしないことを保証
//! - Update は指定されたフィールドだけを書き換えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規作成、部分更新、設定の置き換え
//! - 異常系：重複作成、存在しない ID の更新、空の ID
//! - エッジケース：空のバッチ

use std::{collections::BTreeMap, sync::Arc};

use crate::domain::{
    AdapterId, GameId, GameInfo, GameInfoPatch, GameTable, GameTableError, ProxyId, SettingsMap,
};

use super::error::BatchError;

/// バッチ操作の ID ごとの結果（キーは送信された ID そのまま）
pub type BatchOutcome = BTreeMap<String, Result<(), GameTableError>>;

/// 作成・更新リクエストのゲーム一件分。`None` のフィールドは変更しない
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    pub id: String,
    pub name: Option<String>,
    pub proxy: Option<ProxyId>,
    pub adapter: Option<AdapterId>,
    /// 指定時はゲームの設定を丸ごと置き換える
    pub settings: Option<SettingsMap>,
}

/// 作成か更新か
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertMode {
    /// ID がまだ存在しないこと
    Create,
    /// ID が既に存在すること
    Update,
}

/// ゲームの作成・更新のユースケース
pub struct UpsertGamesUseCase {
    table: Arc<dyn GameTable>,
}

impl UpsertGamesUseCase {
    pub fn new(table: Arc<dyn GameTable>) -> Self {
        Self { table }
    }

    /// ゲームのバッチ作成・更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOutcome)` - ID ごとの結果
    /// * `Err(BatchError::NoGamesSpecified)` - バッチが空
    pub async fn execute(
        &self,
        mode: UpsertMode,
        drafts: Vec<GameDraft>,
    ) -> Result<BatchOutcome, BatchError> {
        if drafts.is_empty() {
            return Err(BatchError::NoGamesSpecified);
        }

        let mut outcome = BatchOutcome::new();
        for draft in drafts {
            let key = draft.id.clone();
            let result = self.upsert(mode, draft).await;
            if let Err(e) = &result {
                tracing::debug!("Could not upsert game '{}': {}", key, e);
            }
            outcome.insert(key, result);
        }
        Ok(outcome)
    }

    /// 一件分の作成・更新（テーブルへの書き込みは一回のアトミックな操作）
    async fn upsert(&self, mode: UpsertMode, draft: GameDraft) -> Result<(), GameTableError> {
        let GameDraft {
            id,
            name,
            proxy,
            adapter,
            settings,
        } = draft;
        let id = GameId::new(id)?;
        let patch = GameInfoPatch {
            name,
            proxy,
            adapter,
        };

        match mode {
            UpsertMode::Create => {
                let mut info = GameInfo::default();
                patch.apply(&mut info);
                self.table
                    .create_with(id, info, settings.unwrap_or_default())
                    .await
            }
            UpsertMode::Update => self.table.merge(&id, patch, settings).await,
        }
    }
}
