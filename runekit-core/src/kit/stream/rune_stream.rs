//! 内存码点流
//!
//! 持有完整的码点序列，游标与检查点都是码点下标。

use std::sync::Arc;

use super::position::SourcePosition;
use super::CharStream;
use crate::kit::decode::decode_bytes;
use crate::kit::error::DecodeError;
use runekit_log::{trace, warn, Logger};

/// 基于 `Vec<char>` 的字符流
pub struct RuneStream {
    /// 底层码点序列
    chars: Vec<char>,
    /// 当前游标
    pos: usize,
    /// 最近一次 accept 的位置
    last_accept: usize,
    logger: Arc<Logger>,
}

impl RuneStream {
    /// 创建新的字符流
    pub fn new(chars: Vec<char>) -> Self {
        Self::with_logger(chars, Logger::noop())
    }

    /// 创建带 logger 的字符流
    pub fn with_logger(chars: Vec<char>, logger: Arc<Logger>) -> Self {
        Self {
            chars,
            pos: 0,
            last_accept: 0,
            logger,
        }
    }

    /// 从原始字节创建（解码并归一化 `"\r\n"`）
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_logger(data, Logger::noop())
    }

    /// 从原始字节创建（带 logger）
    pub fn decode_with_logger(data: &[u8], logger: Arc<Logger>) -> Result<Self, DecodeError> {
        match decode_bytes(data) {
            Ok(chars) => Ok(Self::with_logger(chars, logger)),
            Err(e) => {
                warn!(logger, "Cannot decode {} input bytes: {}", data.len(), e);
                Err(e)
            }
        }
    }

    /// 码点总数
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 最近一次 accept 的位置
    pub fn checkpoint(&self) -> usize {
        self.last_accept
    }

    /// 游标之后尚未读取的字符
    pub fn remaining(&self) -> &[char] {
        &self.chars[self.pos..]
    }

    /// 游标之前已读取的字符
    pub fn consumed(&self) -> &[char] {
        &self.chars[..self.pos]
    }

    /// 游标所在的行列位置
    pub fn source_position(&self) -> SourcePosition {
        SourcePosition::after(self.consumed())
    }

    /// 任意码点偏移对应的行列位置（超出末尾时取末尾）
    pub fn source_position_at(&self, offset: usize) -> SourcePosition {
        SourcePosition::after(&self.chars[..offset.min(self.chars.len())])
    }
}

impl CharStream for RuneStream {
    fn is_done(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    fn refuse(&mut self) -> bool {
        if self.pos == 0 {
            trace!(self.logger, "Refuse at start of stream ignored");
            return false;
        }

        self.pos -= 1;
        // 回退越过检查点时同步下移，保持 checkpoint <= cursor
        if self.last_accept > self.pos {
            self.last_accept = self.pos;
        }
        true
    }

    fn refuse_many(&mut self) {
        if self.pos != self.last_accept {
            trace!(
                self.logger,
                "Rewinding {} chars to checkpoint {}",
                self.pos - self.last_accept,
                self.last_accept
            );
        }
        self.pos = self.last_accept;
    }

    fn accept(&mut self) {
        self.last_accept = self.pos;
    }

    fn position(&self) -> usize {
        self.pos
    }
}

impl From<&str> for RuneStream {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

impl From<Vec<char>> for RuneStream {
    fn from(chars: Vec<char>) -> Self {
        Self::new(chars)
    }
}

impl std::fmt::Debug for RuneStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuneStream")
            .field("len", &self.chars.len())
            .field("pos", &self.pos)
            .field("last_accept", &self.last_accept)
            .finish()
    }
}
