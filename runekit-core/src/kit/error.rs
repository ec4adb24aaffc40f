//! 匹配错误类型
//!
//! 提供结构化的错误信息：错误类型（`ErrorKind`）加上各自的上下文字段。

/// 解码错误，携带首个非法序列的字节偏移
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 encoding at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("carriage return not followed by line feed at byte offset {offset}")]
    LoneCarriageReturn { offset: usize },
}

impl DecodeError {
    /// 出错位置（字节偏移，0-based）
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::InvalidUtf8 { offset } | DecodeError::LoneCarriageReturn { offset } => {
                *offset
            }
        }
    }
}

/// 错误类型（无字段），供调用方分支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    Decoding,
    NoMatch,
    AmbiguousMatch,
    StreamMismatch,
    DuplicateWord,
    NoClosestWord,
}

/// 匹配器错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// 必填参数为空
    #[error("parameter '{name}' is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// 输入文本无法解码
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// 批量构建时第 `index` 个单词（1-based）无法解码
    #[error("word #{index} ({word:?}) is invalid: {source}")]
    InvalidWord {
        index: usize,
        word: String,
        #[source]
        source: DecodeError,
    },

    /// 没有任何完整匹配的单词；`consumed` 为匹配过程中读过的前缀
    #[error("{}", no_match_message(.consumed))]
    NoMatch { consumed: String },

    /// 多个等长的最长单词同时匹配
    #[error("multiple matches found for {consumed:?}: {}", .candidates.join(", "))]
    Ambiguous {
        consumed: String,
        candidates: Vec<String>,
    },

    /// 流中的字符与期望不符，`position` 为期望序列中的下标
    #[error("{}", mismatch_message(.expected, .found))]
    StreamMismatch {
        expected: char,
        found: Option<char>,
        position: usize,
    },

    /// 单词已注册
    #[error("word {word:?} is already registered")]
    DuplicateWord { word: String },

    #[error("no closest word was found")]
    NoClosestWord,
}

impl MatchError {
    /// 获取错误类型
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            MatchError::Decode(_) | MatchError::InvalidWord { .. } => ErrorKind::Decoding,
            MatchError::NoMatch { .. } => ErrorKind::NoMatch,
            MatchError::Ambiguous { .. } => ErrorKind::AmbiguousMatch,
            MatchError::StreamMismatch { .. } => ErrorKind::StreamMismatch,
            MatchError::DuplicateWord { .. } => ErrorKind::DuplicateWord,
            MatchError::NoClosestWord => ErrorKind::NoClosestWord,
        }
    }

    pub(crate) fn empty_parameter(name: &'static str) -> Self {
        MatchError::InvalidParameter {
            name,
            reason: "must not be empty",
        }
    }
}

fn no_match_message(consumed: &str) -> String {
    if consumed.is_empty() {
        "no matches found".to_string()
    } else {
        format!("no matches found for {consumed:?}")
    }
}

fn mismatch_message(expected: &char, found: &Option<char>) -> String {
    match found {
        Some(found) => format!("expected '{expected}', got '{found}' instead"),
        None => format!("expected '{expected}', got nothing instead"),
    }
}
