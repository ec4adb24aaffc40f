//! 单词匹配
//!
//! - `WordMatcher`：在已注册单词中匹配最长前缀
//! - `multi_matcher`：要求流中紧跟一段固定字符序列

mod multi;
mod narrowing;
mod word;

pub use multi::multi_matcher;
pub use word::WordMatcher;
