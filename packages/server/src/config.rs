//! Command line and environment configuration.

use clap::Parser;

use crate::usecase::BusyPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "obozrenie-server")]
#[command(about = "Game server tracker with an HTTP API", long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "OBOZRENIE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "OBOZRENIE_PORT", default_value_t = 16987)]
    pub port: u16,

    /// API password; empty disables authentication
    #[arg(long, env = "OBOZRENIE_PASSWORD", default_value = "")]
    pub password: String,

    /// Path of the qstat executable
    #[arg(long, env = "OBOZRENIE_QSTAT_PATH", default_value = "qstat")]
    pub qstat_path: String,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, env = "OBOZRENIE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// What a refresh request does while the game is already refreshing
    #[arg(long, env = "OBOZRENIE_BUSY_POLICY", value_enum, default_value_t = BusyPolicy::Silent)]
    pub busy_policy: BusyPolicy,

    /// Number of entries kept by the activity log
    #[arg(long, env = "OBOZRENIE_LOG_CAPACITY", default_value_t = 1000)]
    pub log_capacity: usize,
}
