//! 日志记录

use std::fmt;

/// 日志级别，由详细到严重排序
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub(crate) const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// 一条日志
///
/// `seq` 由产生它的 `Logger` 递增分配，同一 logger 内可用来排序。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub seq: u64,
    pub level: Level,
    /// 产生日志的模块路径
    pub target: &'static str,
    pub message: String,
}

impl Record {
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            level,
            target,
            message: message.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:<5} {}: {}",
            self.seq, self.level, self.target, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_sorted_by_severity() {
        assert!(Level::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Level::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new(Level::Info, "runekit_core::kit::tokenizer", "3 tokens");
        record.seq = 7;

        assert_eq!(
            record.to_string(),
            "#7 INFO  runekit_core::kit::tokenizer: 3 tokens"
        );
    }
}
