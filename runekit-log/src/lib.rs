//! runekit-log - 显式传递的日志器
//!
//! 字符流、匹配器和分词器都通过 `with_logger` 接收一个 `Arc<Logger>`，没有全局 logger。
//! 宏在格式化之前先检查级别；`LogRingBuffer` 保留最近的记录，测试里直接对它断言。
//!
//! ```
//! use runekit_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(16);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//!
//! debug!(logger, "registered {} words", 3);
//! assert!(ring.contains("registered 3 words"));
//! ```

mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::LogRingBuffer;
