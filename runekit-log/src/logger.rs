//! 日志器

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// 日志输出目标
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// 按级别过滤后分发给各个 sink
pub struct Logger {
    level: AtomicU8,
    next_seq: AtomicU64,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            next_seq: AtomicU64::new(0),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// 不输出任何内容的日志器，组件未指定 logger 时使用
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    /// 追加 sink，可链式调用
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.sinks().push(Box::new(sink));
    }

    pub fn sink_count(&self) -> usize {
        self.sinks().len()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        let raw = self.level.load(Ordering::Relaxed);
        Level::ALL
            .into_iter()
            .find(|level| *level as u8 == raw)
            .unwrap_or(Level::Info)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// 宏的落点；调用方已检查过级别，这里再查一次供直接调用
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut record = Record::new(level, target, message);
        record.seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &Record) {
        for sink in self.sinks().iter() {
            sink.write(record);
        }
    }

    // 某个 sink panic 后锁会中毒，之后的日志仍照常分发
    fn sinks(&self) -> MutexGuard<'_, Vec<Box<dyn LogSink>>> {
        self.sinks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// 作为另一个日志器的 sink：保留原记录，按自身级别再过滤一次
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        if self.is_enabled(record.level) {
            self.dispatch(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRingBuffer;

    #[test]
    fn test_records_below_level_dropped() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Info).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "hidden");
        logger.log(Level::Info, "test", "shown");
        logger.log(Level::Error, "test", "also shown");

        assert_eq!(ring.messages(), vec!["shown", "also shown"]);
    }

    #[test]
    fn test_sequence_numbers() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        logger.log(Level::Info, "test", "a");
        logger.log(Level::Trace, "test", "b");

        let seqs: Vec<u64> = ring.dump_records().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_set_level_at_runtime() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Error).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "before");
        logger.set_level(Level::Debug);
        logger.log(Level::Debug, "test", "after");

        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(ring.messages(), vec!["after"]);
    }

    #[test]
    fn test_noop_logger() {
        let logger = Logger::noop();

        assert_eq!(logger.sink_count(), 0);
        assert!(!logger.is_enabled(Level::Warn));
        assert!(logger.is_enabled(Level::Error));
    }

    #[test]
    fn test_nested_logger_keeps_origin() {
        let ring = LogRingBuffer::new(10);
        let inner = Logger::new(Level::Info).with_sink(ring.clone());
        let outer = Logger::new(Level::Trace).with_sink(inner);

        outer.log(Level::Debug, "matcher", "filtered by inner");
        outer.log(Level::Warn, "matcher", "kept");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "matcher");
        assert_eq!(records[0].seq, 1);
    }

    #[test]
    fn test_fan_out_to_every_sink() {
        let first = LogRingBuffer::new(10);
        let second = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Info)
            .with_sink(first.clone())
            .with_sink(second.clone());

        logger.log(Level::Warn, "test", "both");

        assert_eq!(logger.sink_count(), 2);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
