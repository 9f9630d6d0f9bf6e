//! リフレッシュパイプラインの trait 定義
//!
//! リフレッシュは二段階で行います。[`Proxy`] がゲームの問い合わせ先を解決し、
//! [`Adapter`] がその結果をサーバーレコードに変換します。どちらもリフレッシュ時に
//! ID で引かれるため、通常の関数もそのまま登録できます。

use async_trait::async_trait;

use super::{AdapterError, GameInfo, ProxyError, ServerRecord, SettingsMap};

/// ゲームの問い合わせ先を解決する
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Proxy: Send + Sync {
    /// 順序付きの問い合わせ先。空なら問い合わせるものがない
    async fn targets(
        &self,
        info: &GameInfo,
        settings: &SettingsMap,
    ) -> Result<Vec<String>, ProxyError>;
}

#[async_trait]
impl<F> Proxy for F
where
    F: Fn(&GameInfo, &SettingsMap) -> Result<Vec<String>, ProxyError> + Send + Sync,
{
    async fn targets(
        &self,
        info: &GameInfo,
        settings: &SettingsMap,
    ) -> Result<Vec<String>, ProxyError> {
        self(info, settings)
    }
}

/// 問い合わせ結果をサーバーレコードに変換する
///
/// 不正なエントリは、全体を失敗させずに個別に読み飛ばしてよい。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Adapter: Send + Sync {
    async fn parse(
        &self,
        raw: &[String],
        info: &GameInfo,
        settings: &SettingsMap,
    ) -> Result<Vec<ServerRecord>, AdapterError>;
}

#[async_trait]
impl<F> Adapter for F
where
    F: Fn(&[String], &GameInfo, &SettingsMap) -> Result<Vec<ServerRecord>, AdapterError>
        + Send
        + Sync,
{
    async fn parse(
        &self,
        raw: &[String],
        info: &GameInfo,
        settings: &SettingsMap,
    ) -> Result<Vec<ServerRecord>, AdapterError> {
        self(raw, info, settings)
    }
}
