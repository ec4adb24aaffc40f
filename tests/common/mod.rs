//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

use std::sync::Arc;

use runekit::runekit_log::{Level, LogRingBuffer, Logger};
use runekit::{MatchError, RuneStream, WordMatcher};

/// 注册一组单词，全部应成功
pub fn matcher_with(words: &[&str]) -> WordMatcher {
    let mut matcher = WordMatcher::new();
    for word in words {
        matcher
            .add_word(word)
            .unwrap_or_else(|e| panic!("cannot register {word:?}: {e}"));
    }
    matcher
}

/// 在新的流上匹配一次，返回结果与匹配后的游标
pub fn match_once(matcher: &WordMatcher, input: &str) -> (Result<String, MatchError>, usize) {
    use runekit::CharStream;

    let mut stream = RuneStream::from(input);
    let result = matcher.match_word(&mut stream);
    (result, stream.position())
}

/// 记录到环形缓冲区的 logger
pub fn ring_logger(level: Level) -> (Arc<Logger>, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(256);
    let logger = Logger::new(level).with_sink(ring.clone());
    (logger, ring)
}
