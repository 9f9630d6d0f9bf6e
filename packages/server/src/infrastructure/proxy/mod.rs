//! Proxy の実装（ゲームの問い合わせ先をどこから得るか）

pub mod qstat;

pub use qstat::{QSTAT_OUTPUT_PROXY, QStatProxy};
