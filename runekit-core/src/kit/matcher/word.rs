//! 单词匹配器
//!
//! 注册一组单词，从字符流中读出最长的已注册前缀。匹配结束后，
//! 多读的字符通过 `refuse` 退回，流停在匹配单词的末尾。
//!
//! `WordMatcher` 没有内部锁：`add_word` 需要 `&mut self`，
//! 跨线程共享时由调用方负责同步。

use std::sync::Arc;

use super::narrowing::Narrowing;
use crate::kit::decode::{decode_bytes, decode_str};
use crate::kit::error::MatchError;
use crate::kit::stream::CharStream;
use runekit_log::{debug, trace, warn, Logger};

/// 单词匹配器
pub struct WordMatcher {
    /// 已注册的单词（非空、互不重复）
    words: Vec<Vec<char>>,
    logger: Arc<Logger>,
}

impl WordMatcher {
    /// 创建空的匹配器
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    /// 创建带 logger 的匹配器
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            words: Vec::new(),
            logger,
        }
    }

    /// 注册单词
    ///
    /// 空单词忽略；无法解码时返回 `MatchError::Decode`；
    /// 已注册的单词不会重复加入，返回 `MatchError::DuplicateWord`。
    pub fn add_word(&mut self, word: &str) -> Result<(), MatchError> {
        let chars = decode_str(word)?;
        self.insert(chars)
    }

    /// 注册原始字节形式的单词
    pub fn add_word_bytes(&mut self, word: &[u8]) -> Result<(), MatchError> {
        let chars = decode_bytes(word)?;
        self.insert(chars)
    }

    fn insert(&mut self, chars: Vec<char>) -> Result<(), MatchError> {
        let Some(&first) = chars.first() else {
            return Ok(());
        };

        // 同长度、同首字符的单词作为候选，再逐位收窄
        let mut survivors: Vec<usize> = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.len() == chars.len() && w[0] == first)
            .map(|(idx, _)| idx)
            .collect();

        for (i, &c) in chars.iter().enumerate().skip(1) {
            if survivors.is_empty() {
                break;
            }
            survivors.retain(|&idx| self.words[idx][i] == c);
        }

        let word: String = chars.iter().collect();
        if !survivors.is_empty() {
            debug!(self.logger, "Word {:?} already registered, skipped", word);
            return Err(MatchError::DuplicateWord { word });
        }

        trace!(self.logger, "Registered word {:?} ({} chars)", word, chars.len());
        self.words.push(chars);
        Ok(())
    }

    /// 已注册单词数
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 按注册顺序遍历单词
    pub fn words(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.words.iter().map(Vec::as_slice)
    }

    /// 是否已注册该单词
    pub fn contains(&self, word: &str) -> bool {
        let target: Vec<char> = word.chars().collect();
        self.words.iter().any(|w| *w == target)
    }

    /// 从流中匹配最长的已注册单词
    ///
    /// 成功时流停在单词之后；失败时流回到调用前的位置。
    pub fn match_word<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<String, MatchError> {
        let mut narrowing = Narrowing::new(&self.words);

        while let Some(c) = stream.peek() {
            if narrowing.is_settled() || !narrowing.narrow(c) {
                break;
            }
            stream.advance();
        }

        let consumed = narrowing.pos();
        let result = narrowing.resolve();
        let keep = result.as_ref().map_or(0, |word| word.len());

        for _ in keep..consumed {
            if !stream.refuse() {
                warn!(self.logger, "Stream refused to rewind after {} chars", consumed);
                break;
            }
        }

        match result {
            Ok(word) => {
                let word: String = word.iter().collect();
                trace!(self.logger, "Matched {:?}, gave back {} chars", word, consumed - keep);
                Ok(word)
            }
            Err(e) => {
                debug!(self.logger, "Match failed after {} chars: {}", consumed, e);
                Err(e)
            }
        }
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordMatcher")
            .field("words", &self.words.len())
            .finish()
    }
}
