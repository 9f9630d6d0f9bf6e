//! ドメイン層のエラー定義

use thiserror::Error;

use super::{AdapterId, GameId, ProxyId};

/// ゲームテーブルが返すエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameTableError {
    #[error("Specified game ID '{0}' is not found in the database")]
    NotFound(GameId),

    #[error("Specified game '{0}' already exists in the database")]
    AlreadyExists(GameId),

    #[error("Invalid game ID: '{0}'")]
    InvalidId(String),
}

/// Proxy が問い合わせ先の解決に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// 外部問い合わせツールを起動できなかった
    #[error("failed to launch '{program}': {reason}")]
    Launch { program: String, reason: String },

    /// 外部問い合わせツールが異常終了した
    #[error("'{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },

    /// その他の問い合わせ元固有の失敗
    #[error("{0}")]
    Source(String),
}

/// Adapter が問い合わせ結果のパースに失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("failed to parse query output: {0}")]
    Parse(String),

    #[error("Malformed server entry")]
    MalformedEntry,
}

/// サーバー一覧のリフレッシュ一回分の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Table(#[from] GameTableError),

    #[error("Specified proxy '{0}' does not exist")]
    NoProxy(ProxyId),

    #[error("Specified adapter '{0}' does not exist")]
    NoAdapter(AdapterId),

    #[error("Empty proxy data")]
    EmptyProxyData,

    #[error("Refresh of game '{0}' is already in progress")]
    AlreadyInProgress(GameId),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// Proxy または Adapter がパニックした
    #[error("Refresh of game '{0}' panicked")]
    Panicked(GameId),
}
