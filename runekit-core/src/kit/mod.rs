//! runekit kit
//!
//! 匹配工具集，设计目标：
//! - 可回溯：字符流支持单步回退与回到检查点
//! - 最长匹配：候选集逐字符收窄，耗尽时取最长的完整单词
//! - 错误结构化：每种失败都有独立的 `ErrorKind`，调用方可据此分支

pub mod decode;
pub mod error;
pub mod levenshtein;
pub mod matcher;
pub mod stream;
pub mod tokenizer;

pub use decode::{decode_bytes, decode_str};
pub use error::{DecodeError, ErrorKind, MatchError};
pub use levenshtein::LevenshteinTable;
pub use matcher::{multi_matcher, WordMatcher};
pub use stream::{CharStream, RuneStream, SourcePosition};
pub use tokenizer::{Token, TokenizeError, Tokenizer};
