//! runekit Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all runekit crates.

use serde::{Deserialize, Serialize};

/// Configuration for the tokenizer built on top of the word matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Whether whitespace between words is skipped instead of matched
    pub skip_whitespace: bool,
    /// Whether failed matches carry a "did you mean" suggestion
    pub suggestions: bool,
    /// Largest edit distance still reported as a suggestion
    pub max_suggestion_distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            skip_whitespace: true,
            suggestions: true,
            max_suggestion_distance: 2,
        }
    }
}

/// Log verbosity, ordered from quietest to noisiest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; "silent" is treated as "error"
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Component enum for component-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Stream,
    Decoder,
    Matcher,
    Tokenizer,
    Cli,
}

impl Component {
    /// Every component, in pipeline order
    pub const ALL: [Component; 5] = [
        Component::Stream,
        Component::Decoder,
        Component::Matcher,
        Component::Tokenizer,
        Component::Cli,
    ];

    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Stream => "stream",
            Component::Decoder => "decoder",
            Component::Matcher => "matcher",
            Component::Tokenizer => "tokenizer",
            Component::Cli => "cli",
        }
    }

    /// Look up a component by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// Get the log target name for this component
    pub fn target(&self) -> String {
        format!("runekit::{}", self.as_str())
    }
}
