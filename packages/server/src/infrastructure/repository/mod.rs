//! ゲームテーブルの実装

pub mod inmemory;

pub use inmemory::InMemoryGameTable;
