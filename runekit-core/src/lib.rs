//! runekit Core - incremental word matching (pure logic, no IO)
//!
//! Contains the rewindable character stream, the UTF-8 decoder, the
//! longest-prefix word matcher, the Levenshtein suggestion table and a small
//! tokenizer that drives the matcher over a whole stream.
//!
//! Configuration and loggers are passed explicitly, never via global state.

pub mod kit;

pub use kit::{
    decode_bytes, decode_str, multi_matcher, CharStream, DecodeError, ErrorKind,
    LevenshteinTable, MatchError, RuneStream, SourcePosition, Token, TokenizeError, Tokenizer,
    WordMatcher,
};

// Re-export config types from runekit-config
pub use runekit_config::MatcherConfig;
