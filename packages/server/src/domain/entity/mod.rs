//! ゲームテーブルが所有するエンティティ

mod game_entry;
mod game_settings;
mod server_collection;
mod server_record;

pub use game_entry::{GameEntry, GameInfo, GameInfoPatch, QueryStatus};
pub use game_settings::{GameSettings, SettingsMap};
pub use server_collection::ServerCollection;
pub use server_record::{PlayerRecord, ServerRecord};
