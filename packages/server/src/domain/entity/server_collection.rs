//! ゲームごとのサーバー一覧

use crate::domain::Timestamp;

use super::ServerRecord;

/// 発見したサーバーの順序付き一覧と、その更新時刻
///
/// `insert` と `delete` は必ず更新時刻を進める（何も削除しなかった場合も含む）。
/// 更新時刻が過去に戻ることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCollection {
    records: Vec<ServerRecord>,
    mod_time: Option<Timestamp>,
}

impl ServerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 条件に一致するレコード（一覧の順序のまま）
    pub fn find<F>(&self, predicate: F) -> Vec<ServerRecord>
    where
        F: Fn(usize, &ServerRecord) -> bool,
    {
        self.records
            .iter()
            .enumerate()
            .filter(|(index, record)| predicate(*index, *record))
            .map(|(_, record)| record.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<ServerRecord> {
        self.records.clone()
    }

    /// 一覧の末尾にレコードを追加
    pub fn insert(&mut self, records: impl IntoIterator<Item = ServerRecord>, now: Timestamp) {
        self.records.extend(records);
        self.bump(now);
    }

    /// 一致するレコードを削除して返す。残りの順序は保たれる
    pub fn delete<F>(&mut self, predicate: F, now: Timestamp) -> Vec<ServerRecord>
    where
        F: Fn(usize, &ServerRecord) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .enumerate()
            .partition(|(index, record)| predicate(*index, record));

        self.records = kept.into_iter().map(|(_, record)| record).collect();
        self.bump(now);

        removed.into_iter().map(|(_, record)| record).collect()
    }

    /// 一覧全体を `records` に置き換える
    pub fn replace(&mut self, records: Vec<ServerRecord>, now: Timestamp) {
        self.records = records;
        self.bump(now);
    }

    /// 最後の追加・削除の時刻（未更新なら `None`）
    pub fn mod_time(&self) -> Option<Timestamp> {
        self.mod_time
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn bump(&mut self, now: Timestamp) {
        self.mod_time = Some(self.mod_time.map_or(now, |previous| previous.max(now)));
    }
}
