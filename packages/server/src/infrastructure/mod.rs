//! Infrastructure 層: ドメイン層の trait の具体的な実装
//!
//! - `repository`: インメモリのゲームテーブル
//! - `proxy` / `adapter`: 登録して使うリフレッシュパイプラインの実装
//! - `activity_log`: API が返すインメモリのアクティビティログ
//! - `dto`: HTTP リクエスト・レスポンスのペイロード

pub mod activity_log;
pub mod adapter;
pub mod dto;
pub mod proxy;
pub mod repository;
