//! 保留最近 N 条记录的缓冲区

use crate::logger::LogSink;
use crate::record::{Level, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// 容量固定的记录缓冲区，满了丢弃最旧的一条
pub struct LogRingBuffer {
    records: Mutex<VecDeque<Record>>,
    capacity: usize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        })
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            return;
        }

        let mut records = self.records();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// 按写入顺序复制当前记录
    pub fn dump_records(&self) -> Vec<Record> {
        self.records().iter().cloned().collect()
    }

    /// 当前记录的消息文本
    pub fn messages(&self) -> Vec<String> {
        self.records().iter().map(|r| r.message.clone()).collect()
    }

    /// 是否有消息包含 `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|r| r.message.contains(needle))
    }

    /// 某一级别的记录数
    pub fn count_at(&self, level: Level) -> usize {
        self.records().iter().filter(|r| r.level == level).count()
    }

    pub fn clear(&self) {
        self.records().clear();
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn records(&self) -> MutexGuard<'_, VecDeque<Record>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl std::fmt::Display for LogRingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in self.records().iter() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(message: &str) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_keeps_newest_records() {
        let buffer = LogRingBuffer::new(3);
        for i in 0..5 {
            buffer.push(info(&format!("msg{i}")));
        }

        assert_eq!(buffer.messages(), vec!["msg2", "msg3", "msg4"]);
        assert_eq!(buffer.capacity(), 3);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let buffer = LogRingBuffer::new(0);
        buffer.push(info("gone"));

        assert!(buffer.is_empty());
    }

    #[test]
    fn test_queries() {
        let buffer = LogRingBuffer::new(10);
        buffer.push(info("matched \"foo\""));
        buffer.push(Record::new(Level::Warn, "test", "refuse failed"));

        assert!(buffer.contains("refuse"));
        assert!(!buffer.contains("bar"));
        assert_eq!(buffer.count_at(Level::Warn), 1);

        buffer.clear();
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_display_one_line_per_record() {
        let buffer = LogRingBuffer::new(10);
        buffer.push(info("first"));
        buffer.push(info("second"));

        let text = buffer.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("test: second\n"));
    }

    #[test]
    fn test_shared_between_threads() {
        let buffer = LogRingBuffer::new(100);
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&buffer);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        sink.write(&info(&format!("{t}-{i}")));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(buffer.len(), 40);
    }
}
