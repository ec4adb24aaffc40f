//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 按组件过滤日志；core 的 `runekit_log` 记录
//! 通过 `TracingSink` 转发为 tracing 事件。

use std::io;
use std::path::Path;

use runekit_config::Component;
use runekit_log::{Level, LogSink, Record};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::{tracing_level, LogConfig};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按组件构建过滤规则
pub fn targets(log_config: &LogConfig) -> Targets {
    Component::ALL.into_iter().fold(
        Targets::new().with_default(tracing_level(log_config.global)),
        |targets, component| {
            targets.with_target(
                component.target(),
                tracing_level(log_config.level_for(component)),
            )
        },
    )
}

/// 初始化日志系统；指定 `file` 时同时写入文件
///
/// 日志写到 stderr，stdout 留给分词结果。
pub fn init<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = targets(log_config);
    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(console_layer).init();
    }

    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 由 `module_path!()` 推断记录所属组件
pub fn component_of(module: &str) -> Component {
    if module.contains("::tokenizer") {
        Component::Tokenizer
    } else if module.contains("::matcher") || module.contains("::levenshtein") {
        Component::Matcher
    } else if module.contains("::decode") {
        Component::Decoder
    } else if module.contains("::stream") {
        Component::Stream
    } else {
        Component::Cli
    }
}

/// 将 `runekit_log` 记录转发到 tracing
pub struct TracingSink;

macro_rules! forward {
    ($target:literal, $record:expr) => {
        match $record.level {
            Level::Trace => tracing::trace!(target: $target, module = $record.target, "{}", $record.message),
            Level::Debug => tracing::debug!(target: $target, module = $record.target, "{}", $record.message),
            Level::Info => tracing::info!(target: $target, module = $record.target, "{}", $record.message),
            Level::Warn => tracing::warn!(target: $target, module = $record.target, "{}", $record.message),
            Level::Error => tracing::error!(target: $target, module = $record.target, "{}", $record.message),
        }
    };
}

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        // tracing 的 target 必须是常量
        match component_of(record.target) {
            Component::Stream => forward!("runekit::stream", record),
            Component::Decoder => forward!("runekit::decoder", record),
            Component::Matcher => forward!("runekit::matcher", record),
            Component::Tokenizer => forward!("runekit::tokenizer", record),
            Component::Cli => forward!("runekit::cli", record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runekit_config::LogLevel;

    #[test]
    fn test_component_of_module_path() {
        assert_eq!(
            component_of("runekit_core::kit::stream::rune_stream"),
            Component::Stream
        );
        assert_eq!(component_of("runekit_core::kit::matcher::word"), Component::Matcher);
        assert_eq!(component_of("runekit_core::kit::tokenizer"), Component::Tokenizer);
        assert_eq!(component_of("runekit_core::kit::decode"), Component::Decoder);
        assert_eq!(component_of("runekit"), Component::Cli);
    }

    #[test]
    fn test_targets_per_component() {
        let mut config = LogConfig::new(LogLevel::Warn);
        config.set(Component::Matcher, LogLevel::Trace);
        let targets = targets(&config);

        assert!(targets.would_enable("runekit::matcher", &tracing::Level::TRACE));
        assert!(!targets.would_enable("runekit::stream", &tracing::Level::INFO));
        assert!(targets.would_enable("runekit::stream", &tracing::Level::WARN));
    }

    #[test]
    fn test_targets_cli_override() {
        let mut config = LogConfig::new(LogLevel::Warn);
        config.set(Component::Cli, LogLevel::Trace);
        let targets = targets(&config);

        assert!(targets.would_enable("runekit::cli", &tracing::Level::TRACE));
        assert!(!targets.would_enable("runekit::matcher", &tracing::Level::INFO));
        assert!(!targets.would_enable("runekit::tokenizer", &tracing::Level::DEBUG));
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // 未安装 subscriber 时转发不应 panic
        let sink = TracingSink;
        sink.write(&Record::new(Level::Info, "runekit_core::kit::tokenizer", "hello"));
    }
}
