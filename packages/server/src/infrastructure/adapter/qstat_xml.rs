//! `qstat -xml -R -P` の XML 出力を読む Adapter
//!
//! ```text
//! <qstat>
//!   <server type="Q3S" address="1.2.3.4:27960" status="UP">
//!     <name>...</name> <map>...</map>
//!     <numplayers>3</numplayers> <maxplayers>16</maxplayers>
//!     <rules><rule name="g_gametype">0</rule></rules>
//!     <players><player><name>...</name><score>..</score><ping>..</ping></player></players>
//!   </server>
//! </qstat>
//! ```
//!
//! 整形式でない文書はバッチ全体を失敗させます。不完全なエントリ
//! （マスターサーバー、応答のないサーバー、名前のないプレイヤーやルール）は読み飛ばします。
//! 値が空のルールは空文字列として取り込みます。

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    Adapter, AdapterError, GameInfo, PlayerRecord, ServerRecord, SettingsMap,
};

/// [`QStatXmlAdapter`] の登録 ID
pub const QSTAT_XML_ADAPTER: &str = "qstat_xml";

#[derive(Debug, Default, Deserialize)]
struct QStatDocument {
    #[serde(rename = "server", default)]
    servers: Vec<QStatServer>,
}

#[derive(Debug, Default, Deserialize)]
struct QStatServer {
    #[serde(rename = "@type")]
    server_type: Option<String>,
    #[serde(rename = "@address")]
    address: Option<String>,
    #[serde(rename = "@status")]
    status: Option<String>,
    name: Option<String>,
    map: Option<String>,
    numplayers: Option<i32>,
    maxplayers: Option<i32>,
    rules: Option<QStatRules>,
    players: Option<QStatPlayers>,
}

#[derive(Debug, Default, Deserialize)]
struct QStatRules {
    #[serde(rename = "rule", default)]
    rules: Vec<QStatRule>,
}

#[derive(Debug, Default, Deserialize)]
struct QStatRule {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct QStatPlayers {
    #[serde(rename = "player", default)]
    players: Vec<QStatPlayer>,
}

#[derive(Debug, Default, Deserialize)]
struct QStatPlayer {
    name: Option<String>,
    score: Option<String>,
    ping: Option<String>,
}

impl QStatRule {
    fn into_pair(self) -> Option<(String, String)> {
        Some((self.name?, self.value))
    }
}

impl TryFrom<QStatPlayer> for PlayerRecord {
    type Error = AdapterError;

    fn try_from(player: QStatPlayer) -> Result<Self, Self::Error> {
        let mut record = PlayerRecord::new(player.name.ok_or(AdapterError::MalformedEntry)?);
        if let Some(score) = player.score {
            record.info.insert("score".to_string(), score);
        }
        if let Some(ping) = player.ping {
            record.info.insert("ping".to_string(), ping);
        }
        Ok(record)
    }
}

impl TryFrom<QStatServer> for ServerRecord {
    type Error = AdapterError;

    fn try_from(server: QStatServer) -> Result<Self, Self::Error> {
        let (Some(host), Some(status), Some(name), Some(map), Some(num_players), Some(max_players)) = (
            server.address,
            server.status,
            server.name,
            server.map,
            server.numplayers,
            server.maxplayers,
        ) else {
            return Err(AdapterError::MalformedEntry);
        };

        let settings = server
            .rules
            .map(|rules| rules.rules)
            .unwrap_or_default()
            .into_iter()
            .filter_map(QStatRule::into_pair)
            .collect();
        let players = server
            .players
            .map(|players| players.players)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|player| PlayerRecord::try_from(player).ok())
            .collect();

        Ok(ServerRecord {
            host,
            name,
            status,
            map,
            num_players,
            max_players,
            players,
            settings,
        })
    }
}

fn load_document(xml: &str) -> Result<QStatDocument, AdapterError> {
    quick_xml::de::from_str(xml.trim()).map_err(|e| AdapterError::Parse(e.to_string()))
}

/// qstat の XML 文書をサーバーレコードに変換する
#[derive(Debug, Clone, Copy, Default)]
pub struct QStatXmlAdapter;

impl QStatXmlAdapter {
    pub fn new() -> Self {
        Self
    }

    /// すべての文書をパース（不正な文書が一つでもあればバッチ全体が失敗）
    pub fn parse_documents(&self, raw: &[String]) -> Result<Vec<ServerRecord>, AdapterError> {
        let mut records = Vec::new();
        for xml in raw {
            for server in load_document(xml)?.servers {
                let server_type = server.server_type.clone().unwrap_or_default();
                match ServerRecord::try_from(server) {
                    Ok(record) => records.push(record),
                    Err(_) => tracing::trace!("Skipping incomplete {} entry", server_type),
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl Adapter for QStatXmlAdapter {
    async fn parse(
        &self,
        raw: &[String],
        _info: &GameInfo,
        _settings: &SettingsMap,
    ) -> Result<Vec<ServerRecord>, AdapterError> {
        self.parse_documents(raw)
    }
}
