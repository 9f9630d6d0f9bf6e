//! 外部ツール `qstat` でマスターサーバーに問い合わせる Proxy
//!
//! 参照するゲーム設定:
//!
//! - `master_type`: マスターの qstat サーバー種別フラグ（例: `q3m`）
//! - `master_servers`: マスターのアドレス（カンマまたは空白区切り）
//!
//! 全マスターを一回の qstat 呼び出しで問い合わせ、その XML 出力を
//! 一つの問い合わせ結果として返します。

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::{GameInfo, Proxy, ProxyError, SettingsMap};

/// [`QStatProxy`] の登録 ID
pub const QSTAT_OUTPUT_PROXY: &str = "qstat_output";

pub const MASTER_TYPE_SETTING: &str = "master_type";
pub const MASTER_SERVERS_SETTING: &str = "master_servers";

/// `qstat` を実行し、XML 出力を Adapter に渡す
#[derive(Debug, Clone)]
pub struct QStatProxy {
    program: String,
}

impl QStatProxy {
    /// `program` は qstat の実行ファイル（相対パスなら `PATH` から探す）
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `masters` をまとめて問い合わせる qstat の引数
    pub fn command_args(master_type: &str, masters: &[String]) -> Vec<String> {
        let mut args: Vec<String> = ["-xml", "-utf8", "-R", "-P"]
            .into_iter()
            .map(String::from)
            .collect();
        for master in masters {
            args.push(format!("-{}", master_type));
            args.push(master.clone());
        }
        args
    }
}

fn master_servers(settings: &SettingsMap) -> Vec<String> {
    settings
        .get(MASTER_SERVERS_SETTING)
        .map(|value| {
            value
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|master| !master.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Proxy for QStatProxy {
    async fn targets(
        &self,
        info: &GameInfo,
        settings: &SettingsMap,
    ) -> Result<Vec<String>, ProxyError> {
        let masters = master_servers(settings);
        if masters.is_empty() {
            tracing::debug!("No master servers configured for '{}'", info.name);
            return Ok(Vec::new());
        }

        let master_type = settings
            .get(MASTER_TYPE_SETTING)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ProxyError::Source(format!("setting '{}' is not set", MASTER_TYPE_SETTING))
            })?;

        let args = Self::command_args(master_type, &masters);
        tracing::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ProxyError::Launch {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProxyError::Exit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(vec![String::from_utf8_lossy(&output.stdout).into_owned()])
    }
}
