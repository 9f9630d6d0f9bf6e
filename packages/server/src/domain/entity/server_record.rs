//! Adapter が生成するサーバー・プレイヤーのレコード

use std::collections::BTreeMap;

/// ゲームサーバー上のプレイヤー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    /// プレイヤーについて報告された任意の属性（score, ping など）
    pub info: BTreeMap<String, String>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: BTreeMap::new(),
        }
    }
}

/// 発見されたゲームサーバー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRecord {
    pub host: String,
    pub name: String,
    pub status: String,
    pub map: String,
    /// 問い合わせ元によっては負の値（不明）を返す
    pub num_players: i32,
    pub max_players: i32,
    pub players: Vec<PlayerRecord>,
    /// サーバーが報告したルール
    pub settings: BTreeMap<String, String>,
}

impl ServerRecord {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}
