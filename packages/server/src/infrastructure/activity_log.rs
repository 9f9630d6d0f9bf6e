//! API のアクティビティを保持する上限付きインメモリログ（`/system/logs` で返す）

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use obozrenie_shared::time::Clock;

use crate::domain::Timestamp;

/// エントリの重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Minor,
    Major,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub timestamp: Timestamp,
    pub severity: Severity,
    /// 結果を表す HTTP 風のステータスコード
    pub status: u16,
    pub message: String,
}

/// 直近のエントリを保持するリングバッファ
///
/// 同期的なリフレッシュのコールバックからも記録できるよう std の Mutex を使う。
pub struct ActivityLog {
    entries: Mutex<VecDeque<ActivityEntry>>,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl ActivityLog {
    pub fn new(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
            clock,
        }
    }

    /// エントリを追加（満杯なら最も古いものを捨てる）。tracing のイベントとしても出力する
    pub fn record(&self, status: u16, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match severity {
            Severity::Major => tracing::info!("{}: {}", status, message),
            Severity::Minor => tracing::debug!("{}: {}", status, message),
        }

        if self.capacity == 0 {
            return;
        }

        let entry = ActivityEntry {
            timestamp: Timestamp::new(self.clock.now_millis()),
            severity,
            status,
            message,
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// 古い順のエントリ
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}
