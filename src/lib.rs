//! runekit - incremental longest-match word matching
//!
//! Reads Unicode text one code point at a time and recognises the longest
//! registered word at the cursor, rewinding whatever it over-read.
//!
//! # Architecture
//!
//! ```text
//! runekit-config/  - Pure configuration data (no logic)
//! runekit-log/     - Explicitly passed logger, sinks, ring buffer
//! runekit-core/    - Streams, decoder, matchers, tokenizer (no IO)
//! runekit-cli/     - `runekit` binary (project file, tracing output)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use runekit::{RuneStream, WordMatcher};
//!
//! let mut matcher = WordMatcher::new();
//! matcher.add_word("foo").unwrap();
//! matcher.add_word("foobar").unwrap();
//!
//! let mut stream = RuneStream::from("fooba");
//! assert_eq!(matcher.match_word(&mut stream).unwrap(), "foo");
//! ```

pub use runekit_core::*;

pub use runekit_config;
pub use runekit_log;
