//! ゲームエントリ: テーブルが一つのゲームについて持つ情報のすべて

use std::fmt;

use crate::domain::{AdapterId, ProxyId};

use super::{GameSettings, ServerCollection};

/// ゲームの静的な情報（表示名と選択された Proxy / Adapter）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub name: String,
    pub proxy: ProxyId,
    pub adapter: AdapterId,
}

/// GameInfo の部分更新（`None` のフィールドは変更しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfoPatch {
    pub name: Option<String>,
    pub proxy: Option<ProxyId>,
    pub adapter: Option<AdapterId>,
}

impl GameInfoPatch {
    pub fn apply(self, info: &mut GameInfo) {
        if let Some(name) = self.name {
            info.name = name;
        }
        if let Some(proxy) = self.proxy {
            info.proxy = proxy;
        }
        if let Some(adapter) = self.adapter {
            info.adapter = adapter;
        }
    }
}

/// サーバー一覧の問い合わせ状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    /// 一度も問い合わせていない
    #[default]
    Empty,
    Ready,
    /// リフレッシュ実行中
    Working,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Ready => "ready",
            Self::Working => "working",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// テーブル上の一つのゲーム
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEntry {
    pub info: GameInfo,
    pub settings: GameSettings,
    pub servers: ServerCollection,
    pub status: QueryStatus,
}

impl GameEntry {
    /// 情報・設定・サーバーなし、ステータス `Empty` のエントリ
    pub fn new() -> Self {
        Self::default()
    }

    /// リフレッシュの single-flight ゲート
    ///
    /// ステータスを `Working` にして `true` を返す。既に `Working` の場合は
    /// 何も変更せず `false` を返す。
    pub fn try_lock_query(&mut self) -> bool {
        if self.status == QueryStatus::Working {
            return false;
        }
        self.status = QueryStatus::Working;
        true
    }

    /// 時点コピー（サーバー一覧は要求された場合のみ含める）
    pub fn snapshot(&self, include_servers: bool) -> Self {
        Self {
            info: self.info.clone(),
            settings: self.settings.clone(),
            servers: if include_servers {
                self.servers.clone()
            } else {
                ServerCollection::new()
            },
            status: self.status,
        }
    }
}
