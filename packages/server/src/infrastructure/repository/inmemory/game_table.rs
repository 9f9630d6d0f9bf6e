//! インメモリのゲームテーブル
//!
//! マップ全体を一つの `RwLock` で保護するため、どのゲームに対する操作も
//! 他のすべての操作に対して線形化可能です。エントリはロックの内側でのみ触り、
//! 呼び出し側にはコピーを返します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use obozrenie_shared::time::{Clock, SystemClock};
use tokio::sync::RwLock;

use crate::domain::{
    EntryPredicate, GameEntry, GameId, GameInfo, GameInfoPatch, GameTable, GameTableError, QueryStatus,
    ServerPredicate, ServerRecord, SettingsMap, Timestamp,
};

/// `HashMap` によるインメモリ実装
pub struct InMemoryGameTable {
    entries: RwLock<HashMap<GameId, GameEntry>>,
    /// サーバー一覧の更新時刻の取得元
    clock: Arc<dyn Clock>,
}

impl InMemoryGameTable {
    /// `clock` で更新時刻を記録する空のテーブルを作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    async fn read_entry<T>(
        &self,
        id: &GameId,
        f: impl FnOnce(&GameEntry) -> T,
    ) -> Result<T, GameTableError> {
        let entries = self.entries.read().await;
        entries
            .get(id)
            .map(f)
            .ok_or_else(|| GameTableError::NotFound(id.clone()))
    }

    async fn write_entry<T>(
        &self,
        id: &GameId,
        f: impl FnOnce(&mut GameEntry) -> T,
    ) -> Result<T, GameTableError> {
        let mut entries = self.entries.write().await;
        entries
            .get_mut(id)
            .map(f)
            .ok_or_else(|| GameTableError::NotFound(id.clone()))
    }
}

impl Default for InMemoryGameTable {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[async_trait]
impl GameTable for InMemoryGameTable {
    async fn create(&self, id: GameId) -> Result<(), GameTableError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&id) {
            return Err(GameTableError::AlreadyExists(id));
        }
        entries.insert(id, GameEntry::new());
        Ok(())
    }

    async fn create_with(
        &self,
        id: GameId,
        info: GameInfo,
        settings: SettingsMap,
    ) -> Result<(), GameTableError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&id) {
            return Err(GameTableError::AlreadyExists(id));
        }
        let mut entry = GameEntry::new();
        entry.info = info;
        entry.settings.replace(settings);
        entries.insert(id, entry);
        Ok(())
    }

    async fn remove(&self, id: &GameId) -> Result<(), GameTableError> {
        let mut entries = self.entries.write().await;
        entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GameTableError::NotFound(id.clone()))
    }

    async fn exists(&self, id: &GameId) -> bool {
        self.entries.read().await.contains_key(id)
    }

    async fn all_ids(&self) -> Vec<GameId> {
        self.entries.read().await.keys().cloned().collect()
    }

    async fn match_ids(&self, predicate: &EntryPredicate<'_>) -> Vec<GameId> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|(id, entry)| predicate(*id, *entry))
            .map(|(id, _)| id.clone())
            .collect()
    }

    async fn snapshot(
        &self,
        id: &GameId,
        include_servers: bool,
    ) -> Result<GameEntry, GameTableError> {
        self.read_entry(id, |entry| entry.snapshot(include_servers))
            .await
    }

    async fn info(&self, id: &GameId) -> Result<GameInfo, GameTableError> {
        self.read_entry(id, |entry| entry.info.clone()).await
    }

    async fn set_info(&self, id: &GameId, info: GameInfo) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.info = info).await
    }

    async fn merge(
        &self,
        id: &GameId,
        patch: GameInfoPatch,
        settings: Option<SettingsMap>,
    ) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| {
            patch.apply(&mut entry.info);
            if let Some(settings) = settings {
                entry.settings.replace(settings);
            }
        })
        .await
    }

    async fn settings(&self, id: &GameId) -> Result<SettingsMap, GameTableError> {
        self.read_entry(id, |entry| entry.settings.all()).await
    }

    async fn setting(&self, id: &GameId, key: &str) -> Result<Option<String>, GameTableError> {
        self.read_entry(id, |entry| entry.settings.get(key).map(str::to_string))
            .await
    }

    async fn set_setting(
        &self,
        id: &GameId,
        key: String,
        value: String,
    ) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.settings.set(key, value))
            .await
    }

    async fn remove_setting(&self, id: &GameId, key: &str) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.settings.remove(key))
            .await
    }

    async fn clear_settings(&self, id: &GameId) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.settings.clear()).await
    }

    async fn replace_settings(
        &self,
        id: &GameId,
        settings: SettingsMap,
    ) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.settings.replace(settings))
            .await
    }

    async fn status(&self, id: &GameId) -> Result<QueryStatus, GameTableError> {
        self.read_entry(id, |entry| entry.status).await
    }

    async fn set_status(&self, id: &GameId, status: QueryStatus) -> Result<(), GameTableError> {
        self.write_entry(id, |entry| entry.status = status).await
    }

    async fn try_lock_query(&self, id: &GameId) -> Result<bool, GameTableError> {
        self.write_entry(id, GameEntry::try_lock_query).await
    }

    async fn find_servers(
        &self,
        id: &GameId,
        predicate: &ServerPredicate<'_>,
    ) -> Result<Vec<ServerRecord>, GameTableError> {
        self.read_entry(id, |entry| entry.servers.find(predicate))
            .await
    }

    async fn all_servers(&self, id: &GameId) -> Result<Vec<ServerRecord>, GameTableError> {
        self.read_entry(id, |entry| entry.servers.all()).await
    }

    async fn insert_servers(
        &self,
        id: &GameId,
        records: Vec<ServerRecord>,
    ) -> Result<(), GameTableError> {
        let now = self.now();
        self.write_entry(id, |entry| entry.servers.insert(records, now))
            .await
    }

    async fn delete_servers(
        &self,
        id: &GameId,
        predicate: &ServerPredicate<'_>,
    ) -> Result<Vec<ServerRecord>, GameTableError> {
        let now = self.now();
        self.write_entry(id, |entry| entry.servers.delete(predicate, now))
            .await
    }

    async fn clear_servers(&self, id: &GameId) -> Result<(), GameTableError> {
        let now = self.now();
        self.write_entry(id, |entry| {
            entry.servers.delete(|_, _| true, now);
        })
        .await
    }

    async fn replace_servers(
        &self,
        id: &GameId,
        records: Vec<ServerRecord>,
    ) -> Result<(), GameTableError> {
        let now = self.now();
        self.write_entry(id, |entry| entry.servers.replace(records, now))
            .await
    }

    async fn servers_mod_time(&self, id: &GameId) -> Result<Option<Timestamp>, GameTableError> {
        self.read_entry(id, |entry| entry.servers.mod_time()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use obozrenie_shared::time::FixedClock;

    use super::*;
    use crate::domain::{AdapterId, ProxyId};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryGameTable の CRUD 操作と NotFound / AlreadyExists の扱い
    // - try_lock_query による単一実行（single-flight）の保証
    // - スナップショットがライブのエントリから独立していること
    // - サーバー一覧の更新時刻
    //
    // 【なぜこのテストが必要か】
    // - ゲームテーブルは HTTP ハンドラとリフレッシュ処理が共有する唯一の可変状態
    // - 同一ゲームのリフレッシュが同時に走らないことを保証する必要がある
    // ========================================

    fn game_id(value: &str) -> GameId {
        GameId::new(value).unwrap()
    }

    fn create_test_table() -> InMemoryGameTable {
        InMemoryGameTable::new(Arc::new(FixedClock::new(1_000)))
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        // テスト項目: 作成したゲームが存在し、ステータスは Empty
        // given (前提条件):
        let table = create_test_table();

        // when (操作):
        let result = table.create(game_id("q3a")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(table.exists(&game_id("q3a")).await);
        assert_eq!(table.status(&game_id("q3a")).await, Ok(QueryStatus::Empty));
    }

    #[tokio::test]
    async fn test_create_twice_fails_with_already_exists() {
        // テスト項目: 同じ ID の二重作成は AlreadyExists となり、エントリは一つのまま
        // given (前提条件):
        let table = create_test_table();
        table.create(game_id("q3a")).await.unwrap();
        table
            .set_setting(&game_id("q3a"), "k".to_string(), "v".to_string())
            .await
            .unwrap();

        // when (操作):
        let result = table.create(game_id("q3a")).await;

        // then (期待する結果):
        assert_eq!(result, Err(GameTableError::AlreadyExists(game_id("q3a"))));
        assert_eq!(table.all_ids().await, vec![game_id("q3a")]);
        // 既存のエントリは上書きされない
        assert_eq!(
            table.setting(&game_id("q3a"), "k").await,
            Ok(Some("v".to_string()))
        );
    }

    #[tokio::test]
    async fn test_remove_missing_fails_with_not_found() {
        // テスト項目: 存在しないゲームの削除は NotFound
        // given (前提条件):
        let table = create_test_table();

        // when (操作):
        let result = table.remove(&game_id("missing")).await;

        // then (期待する結果):
        assert_eq!(result, Err(GameTableError::NotFound(game_id("missing"))));
    }

    #[tokio::test]
    async fn test_remove_discards_owned_state() {
        // テスト項目: 削除後に同じ ID で作成すると新しい空のエントリになる
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        table
            .set_setting(&id, "master_type".to_string(), "q3m".to_string())
            .await
            .unwrap();
        table
            .insert_servers(&id, vec![ServerRecord::new("1.2.3.4:27960")])
            .await
            .unwrap();

        // when (操作):
        table.remove(&id).await.unwrap();
        table.create(id.clone()).await.unwrap();

        // then (期待する結果):
        assert_eq!(table.settings(&id).await, Ok(SettingsMap::new()));
        assert_eq!(table.all_servers(&id).await, Ok(Vec::new()));
        assert_eq!(table.servers_mod_time(&id).await, Ok(None));
    }

    #[tokio::test]
    async fn test_operations_on_missing_id_fail_with_not_found() {
        // テスト項目: 存在しない ID に対する全ての操作が NotFound を返す
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("ghost");
        let not_found = GameTableError::NotFound(id.clone());

        // then (期待する結果):
        assert_eq!(table.snapshot(&id, true).await, Err(not_found.clone()));
        assert_eq!(table.info(&id).await, Err(not_found.clone()));
        assert_eq!(
            table.set_info(&id, GameInfo::default()).await,
            Err(not_found.clone())
        );
        assert_eq!(table.settings(&id).await, Err(not_found.clone()));
        assert_eq!(table.setting(&id, "k").await, Err(not_found.clone()));
        assert_eq!(
            table
                .set_setting(&id, "k".to_string(), "v".to_string())
                .await,
            Err(not_found.clone())
        );
        assert_eq!(table.remove_setting(&id, "k").await, Err(not_found.clone()));
        assert_eq!(table.clear_settings(&id).await, Err(not_found.clone()));
        assert_eq!(
            table.replace_settings(&id, SettingsMap::new()).await,
            Err(not_found.clone())
        );
        assert_eq!(
            table
                .merge(&id, GameInfoPatch::default(), None)
                .await,
            Err(not_found.clone())
        );
        assert_eq!(table.status(&id).await, Err(not_found.clone()));
        assert_eq!(
            table.set_status(&id, QueryStatus::Ready).await,
            Err(not_found.clone())
        );
        assert_eq!(table.try_lock_query(&id).await, Err(not_found.clone()));
        assert_eq!(
            table.find_servers(&id, &|_, _| true).await,
            Err(not_found.clone())
        );
        assert_eq!(
            table.insert_servers(&id, Vec::new()).await,
            Err(not_found.clone())
        );
        assert_eq!(
            table.delete_servers(&id, &|_, _| true).await,
            Err(not_found.clone())
        );
        assert_eq!(table.clear_servers(&id).await, Err(not_found.clone()));
        assert_eq!(
            table.replace_servers(&id, Vec::new()).await,
            Err(not_found.clone())
        );
        assert_eq!(table.servers_mod_time(&id).await, Err(not_found));
        assert!(!table.exists(&id).await);
    }

    #[tokio::test]
    async fn test_set_info_replaces_whole_info() {
        // テスト項目: set_info は情報全体を置き換える
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        let info = GameInfo {
            name: "Quake III Arena".to_string(),
            proxy: ProxyId::from("qstat_output"),
            adapter: AdapterId::from("qstat_xml"),
        };

        // when (操作):
        table.set_info(&id, info.clone()).await.unwrap();

        // then (期待する結果):
        assert_eq!(table.info(&id).await, Ok(info));
    }

    #[tokio::test]
    async fn test_settings_mutations() {
        // テスト項目: 設定の追加・削除・全削除がエントリに反映される
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();

        // when (操作):
        table
            .set_setting(&id, "a".to_string(), "1".to_string())
            .await
            .unwrap();
        table
            .set_setting(&id, "b".to_string(), "2".to_string())
            .await
            .unwrap();
        table.remove_setting(&id, "a").await.unwrap();

        // then (期待する結果):
        let settings = table.settings(&id).await.unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("b").map(String::as_str), Some("2"));

        // when (操作):
        table.clear_settings(&id).await.unwrap();

        // then (期待する結果):
        assert!(table.settings(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_is_isolated_from_later_mutations() {
        // テスト項目: スナップショット取得後の設定変更はスナップショットに影響しない
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        table
            .set_setting(&id, "master_type".to_string(), "q3m".to_string())
            .await
            .unwrap();
        let snapshot = table.snapshot(&id, false).await.unwrap();

        // when (操作):
        table
            .set_setting(&id, "master_type".to_string(), "q2m".to_string())
            .await
            .unwrap();
        table.clear_settings(&id).await.unwrap();

        // then (期待する結果):
        assert_eq!(snapshot.settings.get("master_type"), Some("q3m"));
    }

    #[tokio::test]
    async fn test_snapshot_includes_servers_only_when_requested() {
        // テスト項目: サーバー一覧は要求した場合のみスナップショットに含まれる
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        table
            .insert_servers(&id, vec![ServerRecord::new("1.2.3.4:27960")])
            .await
            .unwrap();

        // when (操作):
        let without = table.snapshot(&id, false).await.unwrap();
        let with = table.snapshot(&id, true).await.unwrap();

        // then (期待する結果):
        assert!(without.servers.is_empty());
        assert_eq!(with.servers.len(), 1);
        assert_eq!(with.servers.mod_time(), Some(Timestamp::new(1_000)));
    }

    #[tokio::test]
    async fn test_match_ids_evaluates_predicate_on_entries() {
        // テスト項目: match_ids は条件に一致するゲームの ID を返す
        // given (前提条件):
        let table = create_test_table();
        for id in ["a", "b", "c"] {
            table.create(game_id(id)).await.unwrap();
        }
        table
            .set_status(&game_id("b"), QueryStatus::Error)
            .await
            .unwrap();

        // when (操作):
        let failed = table
            .match_ids(&|_, entry| entry.status == QueryStatus::Error)
            .await;
        let all: HashSet<GameId> = table.all_ids().await.into_iter().collect();

        // then (期待する結果):
        assert_eq!(failed, vec![game_id("b")]);
        assert_eq!(
            all,
            HashSet::from([game_id("a"), game_id("b"), game_id("c")])
        );
    }

    #[tokio::test]
    async fn test_try_lock_query_while_working_has_no_side_effect() {
        // テスト項目: Working 中の try_lock_query は false を返し、ステータスは変わらない
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        assert_eq!(table.try_lock_query(&id).await, Ok(true));

        // when (操作):
        let second = table.try_lock_query(&id).await;

        // then (期待する結果):
        assert_eq!(second, Ok(false));
        assert_eq!(table.status(&id).await, Ok(QueryStatus::Working));

        // when (操作): ステータスを終端状態にすると再びロックできる
        table.set_status(&id, QueryStatus::Ready).await.unwrap();

        // then (期待する結果):
        assert_eq!(table.try_lock_query(&id).await, Ok(true));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_try_lock_query_grants_exactly_one() {
        // テスト項目: 複数タスクが同時に try_lock_query しても成功は一つだけ
        // given (前提条件):
        let table = Arc::new(create_test_table());
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        let callers = 32;

        // when (操作):
        let handles: Vec<_> = (0..callers)
            .map(|_| {
                let table = Arc::clone(&table);
                let id = id.clone();
                tokio::spawn(async move { table.try_lock_query(&id).await })
            })
            .collect();
        let mut acquired = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap() {
                acquired += 1;
            }
        }

        // then (期待する結果):
        assert_eq!(acquired, 1);
        assert_eq!(table.status(&id).await, Ok(QueryStatus::Working));
    }

    #[tokio::test]
    async fn test_server_operations_bump_mod_time() {
        // テスト項目: サーバー一覧の追加・削除は時計の時刻で更新時刻を記録する
        // given (前提条件):
        let clock = Arc::new(FixedClock::new(1_000));
        let table = InMemoryGameTable::new(clock.clone());
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();

        // when (操作):
        table
            .insert_servers(
                &id,
                vec![ServerRecord::new("a:1"), ServerRecord::new("b:2")],
            )
            .await
            .unwrap();
        clock.set(2_000);
        let removed = table
            .delete_servers(&id, &|_, record| record.host == "a:1")
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(removed.len(), 1);
        assert_eq!(
            table.find_servers(&id, &|_, _| true).await.unwrap().len(),
            1
        );
        assert_eq!(
            table.servers_mod_time(&id).await,
            Ok(Some(Timestamp::new(2_000)))
        );

        // when (操作): 一致しない削除でも更新時刻は進む
        clock.set(3_000);
        let removed = table.delete_servers(&id, &|_, _| false).await.unwrap();

        // then (期待する結果):
        assert!(removed.is_empty());
        assert_eq!(
            table.servers_mod_time(&id).await,
            Ok(Some(Timestamp::new(3_000)))
        );
    }

    #[tokio::test]
    async fn test_replace_and_clear_servers() {
        // テスト項目: replace_servers は一覧を置き換え、clear_servers は空にする
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        table
            .insert_servers(&id, vec![ServerRecord::new("old:1")])
            .await
            .unwrap();

        // when (操作):
        table
            .replace_servers(&id, vec![ServerRecord::new("new:1")])
            .await
            .unwrap();

        // then (期待する結果):
        let hosts: Vec<String> = table
            .all_servers(&id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.host)
            .collect();
        assert_eq!(hosts, vec!["new:1".to_string()]);

        // when (操作):
        table.clear_servers(&id).await.unwrap();

        // then (期待する結果):
        assert!(table.all_servers(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_other_fields_stay_writable_while_working() {
        // テスト項目: Working 中でも情報や設定は読み書きできる
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        table.try_lock_query(&id).await.unwrap();

        // when (操作):
        let result = table
            .set_setting(&id, "master_type".to_string(), "q3m".to_string())
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(
            table.setting(&id, "master_type").await,
            Ok(Some("q3m".to_string()))
        );
        assert_eq!(table.status(&id).await, Ok(QueryStatus::Working));
    }

    #[tokio::test]
    async fn test_create_with_inserts_populated_entry() {
        // テスト項目: create_with は情報と設定を持つエントリを作成し、既存 ID には AlreadyExists
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        let info = GameInfo {
            name: "Quake III Arena".to_string(),
            proxy: ProxyId::from("qstat_output"),
            adapter: AdapterId::from("qstat_xml"),
        };
        let settings = SettingsMap::from([("master_type".to_string(), "q3m".to_string())]);

        // when (操作):
        let first = table
            .create_with(id.clone(), info.clone(), settings.clone())
            .await;
        let second = table
            .create_with(id.clone(), GameInfo::default(), SettingsMap::new())
            .await;

        // then (期待する結果):
        assert!(first.is_ok());
        assert_eq!(second, Err(GameTableError::AlreadyExists(id.clone())));
        assert_eq!(table.info(&id).await, Ok(info));
        assert_eq!(table.settings(&id).await, Ok(settings));
        assert_eq!(table.status(&id).await, Ok(QueryStatus::Empty));
    }

    #[tokio::test]
    async fn test_merge_patches_info_and_replaces_settings() {
        // テスト項目: merge は指定されたフィールドだけを上書きし、設定は指定時のみ置き換える
        // given (前提条件):
        let table = create_test_table();
        let id = game_id("q3a");
        table
            .create_with(
                id.clone(),
                GameInfo {
                    name: "Quake III Arena".to_string(),
                    proxy: ProxyId::from("qstat_output"),
                    adapter: AdapterId::from("qstat_xml"),
                },
                SettingsMap::from([("old".to_string(), "1".to_string())]),
            )
            .await
            .unwrap();
        let patch = GameInfoPatch {
            name: Some("Quake 3".to_string()),
            ..Default::default()
        };

        // when (操作):
        table.merge(&id, patch, None).await.unwrap();

        // then (期待する結果):
        let info = table.info(&id).await.unwrap();
        assert_eq!(info.name, "Quake 3");
        assert_eq!(info.adapter, AdapterId::from("qstat_xml"));
        assert_eq!(table.setting(&id, "old").await, Ok(Some("1".to_string())));

        // when (操作):
        let settings = SettingsMap::from([("new".to_string(), "2".to_string())]);
        table
            .merge(&id, GameInfoPatch::default(), Some(settings.clone()))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(table.settings(&id).await, Ok(settings));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_replace_settings_is_never_observed_half_done() {
        // テスト項目: 設定の置き換え中に、空や一部だけの設定が読み出されることはない
        // given (前提条件):
        let table = Arc::new(create_test_table());
        let id = game_id("q3a");
        table.create(id.clone()).await.unwrap();
        let settings_for = |i: usize| {
            SettingsMap::from([
                ("master_servers".to_string(), format!("m{i}")),
                ("master_type".to_string(), format!("t{i}")),
            ])
        };
        table.replace_settings(&id, settings_for(0)).await.unwrap();

        // when (操作):
        let writer = {
            let table = Arc::clone(&table);
            let id = id.clone();
            tokio::spawn(async move {
                for i in 1..200 {
                    table.replace_settings(&id, settings_for(i)).await.unwrap();
                }
            })
        };
        let reader = {
            let table = Arc::clone(&table);
            let id = id.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let settings = table.settings(&id).await.unwrap();
                    assert_eq!(settings.len(), 2);
                    let master = &settings["master_servers"][1..];
                    let kind = &settings["master_type"][1..];
                    assert_eq!(master, kind);
                }
            })
        };

        // then (期待する結果):
        writer.await.unwrap();
        reader.await.unwrap();
    }
}
