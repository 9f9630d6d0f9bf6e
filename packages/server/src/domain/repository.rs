//! GameTable trait 定義
//!
//! UseCase 層はこの trait のみに依存します。
//! インメモリ実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    GameEntry, GameId, GameInfo, GameInfoPatch, GameTableError, QueryStatus, ServerRecord,
    SettingsMap, Timestamp,
};

/// エントリに対する述語（テーブルのロック内で評価される）
pub type EntryPredicate<'a> = dyn Fn(&GameId, &GameEntry) -> bool + Send + Sync + 'a;

/// サーバー一覧に対する述語: (位置, レコード)
pub type ServerPredicate<'a> = dyn Fn(usize, &ServerRecord) -> bool + Send + Sync + 'a;

/// GameId をキーとするゲームエントリの並行ストア
///
/// すべてのメソッドは他のすべてのメソッドに対してアトミック。
/// エントリ自体は外に出さず、読み出しはコピーを返す（`snapshot`, `info`, `settings` など）。
/// ID を取るメソッドは、ID が存在しなければ `GameTableError::NotFound` を返す。
#[async_trait]
pub trait GameTable: Send + Sync {
    /// 空のエントリ（ステータス `Empty`）を追加
    async fn create(&self, id: GameId) -> Result<(), GameTableError>;

    /// 情報と設定を持つエントリを一度に追加
    ///
    /// 作成途中のエントリが他の呼び出しから見えることはない。
    async fn create_with(
        &self,
        id: GameId,
        info: GameInfo,
        settings: SettingsMap,
    ) -> Result<(), GameTableError>;

    /// エントリと、その所有するすべてを削除
    async fn remove(&self, id: &GameId) -> Result<(), GameTableError>;

    async fn exists(&self, id: &GameId) -> bool;

    /// 呼び出し時点の ID 一覧（順序は不定）
    async fn all_ids(&self) -> Vec<GameId>;

    /// 呼び出し時点で `predicate` を満たすエントリの ID
    async fn match_ids(&self, predicate: &EntryPredicate<'_>) -> Vec<GameId>;

    /// 情報・設定・ステータスのディープコピー（サーバー一覧は要求時のみ）
    async fn snapshot(&self, id: &GameId, include_servers: bool)
    -> Result<GameEntry, GameTableError>;

    async fn info(&self, id: &GameId) -> Result<GameInfo, GameTableError>;

    /// 情報を丸ごと置き換え
    async fn set_info(&self, id: &GameId, info: GameInfo) -> Result<(), GameTableError>;

    /// 情報の部分更新と（指定時の）設定の置き換えを一度に行う
    async fn merge(
        &self,
        id: &GameId,
        patch: GameInfoPatch,
        settings: Option<SettingsMap>,
    ) -> Result<(), GameTableError>;

    async fn settings(&self, id: &GameId) -> Result<SettingsMap, GameTableError>;

    async fn setting(&self, id: &GameId, key: &str) -> Result<Option<String>, GameTableError>;

    async fn set_setting(
        &self,
        id: &GameId,
        key: String,
        value: String,
    ) -> Result<(), GameTableError>;

    async fn remove_setting(&self, id: &GameId, key: &str) -> Result<(), GameTableError>;

    async fn clear_settings(&self, id: &GameId) -> Result<(), GameTableError>;

    /// 設定を丸ごと置き換え（空の設定が途中で見えることはない）
    async fn replace_settings(
        &self,
        id: &GameId,
        settings: SettingsMap,
    ) -> Result<(), GameTableError>;

    async fn status(&self, id: &GameId) -> Result<QueryStatus, GameTableError>;

    async fn set_status(&self, id: &GameId, status: QueryStatus) -> Result<(), GameTableError>;

    /// リフレッシュの single-flight ゲート（ブロックしない）
    ///
    /// 既にリフレッシュ中なら副作用なしで `Ok(false)`、そうでなければ
    /// ステータスを `Working` にして `Ok(true)` を返す。
    async fn try_lock_query(&self, id: &GameId) -> Result<bool, GameTableError>;

    async fn find_servers(
        &self,
        id: &GameId,
        predicate: &ServerPredicate<'_>,
    ) -> Result<Vec<ServerRecord>, GameTableError>;

    async fn all_servers(&self, id: &GameId) -> Result<Vec<ServerRecord>, GameTableError>;

    async fn insert_servers(
        &self,
        id: &GameId,
        records: Vec<ServerRecord>,
    ) -> Result<(), GameTableError>;

    async fn delete_servers(
        &self,
        id: &GameId,
        predicate: &ServerPredicate<'_>,
    ) -> Result<Vec<ServerRecord>, GameTableError>;

    async fn clear_servers(&self, id: &GameId) -> Result<(), GameTableError>;

    /// 全削除と追加を一度に行う（途中のサーバー一覧が見えることはない）
    async fn replace_servers(
        &self,
        id: &GameId,
        records: Vec<ServerRecord>,
    ) -> Result<(), GameTableError>;

    async fn servers_mod_time(&self, id: &GameId) -> Result<Option<Timestamp>, GameTableError>;
}
