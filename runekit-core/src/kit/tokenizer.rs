//! 分词器
//!
//! 在同一个流上反复调用 `WordMatcher::match_word`，每次成功后 `accept`，
//! 失败时跳过出错的非空白片段并给出建议。

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kit::error::MatchError;
use crate::kit::levenshtein::LevenshteinTable;
use crate::kit::matcher::WordMatcher;
use crate::kit::stream::CharStream;
use runekit_config::MatcherConfig;
use runekit_log::{debug, trace, Logger};

/// 匹配到的单词及其码点区间 `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// 分词失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{source} at offset {position}{}", suggestion_hint(.suggestion))]
pub struct TokenizeError {
    /// 失败处的码点偏移
    pub position: usize,
    pub source: MatchError,
    /// 与出错文本最接近的已注册单词
    pub suggestion: Option<String>,
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(word) => format!(" (did you mean {word:?}?)"),
        None => String::new(),
    }
}

pub struct Tokenizer<'m> {
    matcher: &'m WordMatcher,
    config: MatcherConfig,
    suggestions: Option<LevenshteinTable>,
    logger: Arc<Logger>,
}

impl<'m> Tokenizer<'m> {
    pub fn new(matcher: &'m WordMatcher, config: MatcherConfig) -> Self {
        Self::with_logger(matcher, config, Logger::noop())
    }

    pub fn with_logger(matcher: &'m WordMatcher, config: MatcherConfig, logger: Arc<Logger>) -> Self {
        let suggestions = config
            .suggestions
            .then(|| matcher.words().map(<[char]>::to_vec).collect());

        Self {
            matcher,
            config,
            suggestions,
            logger,
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// 读取下一个单词，流结束时返回 `None`
    ///
    /// 失败时流越过出错的非空白片段（至少一个字符）并 `accept`，
    /// 因此可以在 `while let` 中持续调用直到流结束。
    pub fn next_token<S: CharStream + ?Sized>(
        &self,
        stream: &mut S,
    ) -> Option<Result<Token, TokenizeError>> {
        if self.config.skip_whitespace {
            while stream.peek().is_some_and(char::is_whitespace) {
                stream.advance();
            }
        }
        stream.accept();

        if stream.is_done() {
            return None;
        }

        let start = stream.position();
        match self.matcher.match_word(stream) {
            Ok(text) => {
                stream.accept();
                let end = stream.position();
                trace!(self.logger, "Token {:?} at {}..{}", text, start, end);
                Some(Ok(Token { text, start, end }))
            }
            Err(source) => {
                let run = skip_run(stream);
                let suggestion = self.suggest(&run);
                debug!(
                    self.logger,
                    "Tokenize failed at {}: {}, skipped {} chars",
                    start,
                    source,
                    run.len()
                );
                Some(Err(TokenizeError {
                    position: start,
                    source,
                    suggestion,
                }))
            }
        }
    }

    /// 读完整个流
    pub fn tokenize<S: CharStream + ?Sized>(&self, stream: &mut S) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token(stream) {
            tokens.push(token?);
        }
        debug!(self.logger, "Tokenized {} words", tokens.len());
        Ok(tokens)
    }

    /// 查找与出错片段最接近的单词
    fn suggest(&self, run: &[char]) -> Option<String> {
        self.suggestions
            .as_ref()?
            .closest_within(run, self.config.max_suggestion_distance)
    }
}

/// 越过当前位置起的非空白片段并 `accept`，返回被跳过的字符
///
/// 起始字符是空白时只跳过它本身。
fn skip_run<S: CharStream + ?Sized>(stream: &mut S) -> Vec<char> {
    let mut run: Vec<char> = stream.advance().into_iter().collect();
    if run.first().is_some_and(|c| !c.is_whitespace()) {
        while let Some(c) = stream.peek().filter(|c| !c.is_whitespace()) {
            run.push(c);
            stream.advance();
        }
    }
    stream.accept();
    run
}

impl std::fmt::Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("matcher", &self.matcher)
            .field("config", &self.config)
            .finish()
    }
}
