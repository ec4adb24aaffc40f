//! CLI 配置
//!
//! 日志级别：全局级别加上按组件覆盖的级别

use runekit_config::{Component, LogLevel};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: LogLevel,
    pub stream: Option<LogLevel>,
    pub decoder: Option<LogLevel>,
    pub matcher: Option<LogLevel>,
    pub tokenizer: Option<LogLevel>,
    pub cli: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogConfig {
    pub fn new(global: LogLevel) -> Self {
        Self {
            global,
            stream: None,
            decoder: None,
            matcher: None,
            tokenizer: None,
            cli: None,
        }
    }

    /// 设置某个组件的级别，不影响其他组件
    pub fn set(&mut self, component: Component, level: LogLevel) {
        let slot = match component {
            Component::Stream => &mut self.stream,
            Component::Decoder => &mut self.decoder,
            Component::Matcher => &mut self.matcher,
            Component::Tokenizer => &mut self.tokenizer,
            Component::Cli => &mut self.cli,
        };
        *slot = Some(level);
    }

    /// Get log level for a specific component
    pub fn level_for(&self, component: Component) -> LogLevel {
        let level = match component {
            Component::Stream => self.stream,
            Component::Decoder => self.decoder,
            Component::Matcher => self.matcher,
            Component::Tokenizer => self.tokenizer,
            Component::Cli => self.cli,
        };
        level.unwrap_or(self.global)
    }

    /// 所有组件中最详细的级别，core logger 以此过滤
    pub fn most_verbose(&self) -> LogLevel {
        Component::ALL
            .into_iter()
            .map(|c| self.level_for(c))
            .max()
            .unwrap_or(self.global)
    }
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

pub fn core_level(level: LogLevel) -> runekit_log::Level {
    match level {
        LogLevel::Error => runekit_log::Level::Error,
        LogLevel::Warn => runekit_log::Level::Warn,
        LogLevel::Info => runekit_log::Level::Info,
        LogLevel::Debug => runekit_log::Level::Debug,
        LogLevel::Trace => runekit_log::Level::Trace,
    }
}
