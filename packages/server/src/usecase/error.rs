//! UseCase 層のエラー定義

use thiserror::Error;

/// バッチ系ユースケースがリクエスト全体を拒否するときのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("No games specified")]
    NoGamesSpecified,

    #[error("Please specify a list of valid game IDs")]
    NoIdsSpecified,
}
