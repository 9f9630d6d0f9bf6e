//! ドメイン層: ゲームテーブルのモデルとリフレッシュパイプラインの境界
//!
//! - `value_object`: 識別子とタイムスタンプ
//! - `entity`: ゲームエントリとその所有物
//! - `repository`: Infrastructure 層が実装する `GameTable` trait
//! - `pipeline`: `Proxy` / `Adapter` trait
//! - `registry`: パイプライン実装の ID による解決

pub mod entity;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{
    GameEntry, GameInfo, GameInfoPatch, GameSettings, PlayerRecord, QueryStatus, ServerCollection,
    ServerRecord, SettingsMap,
};
pub use error::{AdapterError, GameTableError, ProxyError, RefreshError};
pub use pipeline::{Adapter, Proxy};
pub use registry::{AdapterRegistry, ProxyRegistry, Registry};
pub use repository::{EntryPredicate, GameTable, ServerPredicate};
pub use value_object::{AdapterId, GameId, ProxyId, Timestamp};
