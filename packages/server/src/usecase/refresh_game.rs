//! UseCase: ゲームのサーバー一覧リフレッシュ
//!
//! ## 処理の流れ
//!
//! 1. `try_lock_query` でゲームを Working にする（既に Working なら何もしない）
//! 2. ゲームの情報と設定のスナップショットを取得
//! 3. Proxy を ID で解決し、問い合わせ先（生データ）を取得
//! 4. Adapter を ID で解決し、サーバー一覧にパース
//! 5. 結果をテーブルに書き戻し、ステータスを Ready / Error にする（ロック解放）
//! 6. コールバックに結果を通知
//!
//! Proxy / Adapter の呼び出し中はテーブルのロックを保持しません。
//! 両者の呼び出しは別タスクで行い、パニックした場合も Error として扱います。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 成功・各種失敗のいずれでも Working のまま残らないこと
//! - 同一ゲームのリフレッシュが同時に一つしか走らないこと
//! - リフレッシュ中に削除されたゲームが復活しないこと
//! - Proxy がパニックしてもステータスが Error になりコールバックが呼ばれること

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::{
    AdapterRegistry, GameId, GameTable, GameTableError, ProxyRegistry, QueryStatus, RefreshError,
    ServerRecord,
};

use super::{BatchError, BatchOutcome};

/// 完了コールバックに渡す結果
pub type RefreshResult = Result<Vec<ServerRecord>, RefreshError>;

/// リフレッシュ一回分の完了コールバック
///
/// テーブルが終端ステータスになった後、ロックの外で呼ばれる。
pub type RefreshCallback = Box<dyn FnOnce(RefreshResult) + Send + 'static>;

/// リフレッシュ中のゲームに再度リフレッシュを要求したときの振る舞い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BusyPolicy {
    /// Return without invoking the callback
    #[default]
    Silent,
    /// Invoke the callback with `RefreshError::AlreadyInProgress`
    Report,
}

/// ゲームのサーバー一覧をリフレッシュするユースケース
#[derive(Clone)]
pub struct RefreshGameUseCase {
    table: Arc<dyn GameTable>,
    proxies: Arc<ProxyRegistry>,
    adapters: Arc<AdapterRegistry>,
    busy_policy: BusyPolicy,
}

impl RefreshGameUseCase {
    pub fn new(
        table: Arc<dyn GameTable>,
        proxies: Arc<ProxyRegistry>,
        adapters: Arc<AdapterRegistry>,
    ) -> Self {
        Self {
            table,
            proxies,
            adapters,
            busy_policy: BusyPolicy::default(),
        }
    }

    pub fn with_busy_policy(mut self, busy_policy: BusyPolicy) -> Self {
        self.busy_policy = busy_policy;
        self
    }

    /// `id` のリフレッシュをバックグラウンドで開始し、すぐに戻る
    pub fn execute(&self, id: GameId, callback: Option<RefreshCallback>) -> JoinHandle<()> {
        let usecase = self.clone();
        tokio::spawn(async move { usecase.run(id, callback).await })
    }

    /// 複数の ID のリフレッシュをまとめて開始
    ///
    /// 不正な ID と存在しない ID は開始せず、結果に記録する。
    /// `on_complete` は開始した各リフレッシュのコールバックを作る。
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOutcome)` - ID ごとの開始結果
    /// * `Err(BatchError::NoIdsSpecified)` - `ids` が空
    pub async fn execute_batch<F>(
        &self,
        ids: Vec<String>,
        on_complete: F,
    ) -> Result<BatchOutcome, BatchError>
    where
        F: Fn(&GameId) -> RefreshCallback,
    {
        if ids.is_empty() {
            return Err(BatchError::NoIdsSpecified);
        }

        let mut outcome = BatchOutcome::new();
        for raw_id in ids {
            let result = match GameId::new(raw_id.as_str()) {
                Ok(id) if self.table.exists(&id).await => {
                    let callback = on_complete(&id);
                    self.execute(id, Some(callback));
                    Ok(())
                }
                Ok(id) => Err(GameTableError::NotFound(id)),
                Err(e) => Err(e),
            };
            outcome.insert(raw_id, result);
        }
        Ok(outcome)
    }

    /// 現在のタスク上でリフレッシュを一回最後まで実行
    pub async fn run(&self, id: GameId, callback: Option<RefreshCallback>) {
        match self.table.try_lock_query(&id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("Refresh of '{}' is already in progress", id);
                if self.busy_policy == BusyPolicy::Report {
                    notify(callback, Err(RefreshError::AlreadyInProgress(id)));
                }
                return;
            }
            Err(e) => {
                tracing::warn!("Refresh rejected: {}", e);
                notify(callback, Err(e.into()));
                return;
            }
        }

        let outcome = self.query_contained(&id).await;
        let outcome = self.store(&id, outcome).await;

        match &outcome {
            Ok(records) => tracing::info!("Refreshed '{}': {} servers", id, records.len()),
            Err(e) => tracing::warn!("Refresh of '{}' failed: {}", id, e),
        }

        notify(callback, outcome);
    }

    /// `query` を別タスクで実行し、パニックを `RefreshError::Panicked` に変換
    async fn query_contained(&self, id: &GameId) -> RefreshResult {
        let usecase = self.clone();
        let query_id = id.clone();
        match tokio::spawn(async move { usecase.query(&query_id).await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Refresh task of '{}' did not complete: {}", id, e);
                Err(RefreshError::Panicked(id.clone()))
            }
        }
    }

    /// 問い合わせ先を解決してパース（この間テーブルのロックは保持しない）
    async fn query(&self, id: &GameId) -> Result<Vec<ServerRecord>, RefreshError> {
        let entry = self.table.snapshot(id, false).await?;
        let settings = entry.settings.all();

        let proxy = self
            .proxies
            .resolve(&entry.info.proxy)
            .await
            .ok_or_else(|| RefreshError::NoProxy(entry.info.proxy.clone()))?;
        let targets = proxy.targets(&entry.info, &settings).await?;
        if targets.is_empty() {
            return Err(RefreshError::EmptyProxyData);
        }

        let adapter = self
            .adapters
            .resolve(&entry.info.adapter)
            .await
            .ok_or_else(|| RefreshError::NoAdapter(entry.info.adapter.clone()))?;
        Ok(adapter.parse(&targets, &entry.info, &settings).await?)
    }

    /// 結果を書き戻し、問い合わせロックを解放
    async fn store(&self, id: &GameId, outcome: RefreshResult) -> RefreshResult {
        let outcome = match outcome {
            Ok(records) => self
                .table
                .replace_servers(id, records.clone())
                .await
                .map(|()| records)
                .map_err(RefreshError::from),
            Err(e) => Err(e),
        };

        let status = if outcome.is_ok() {
            QueryStatus::Ready
        } else {
            QueryStatus::Error
        };
        if let Err(e) = self.table.set_status(id, status).await {
            tracing::warn!("Could not record refresh status of '{}': {}", id, e);
            return outcome.and(Err(e.into()));
        }

        outcome
    }
}

fn notify(callback: Option<RefreshCallback>, result: RefreshResult) {
    if let Some(callback) = callback {
        callback(result);
    }
}
