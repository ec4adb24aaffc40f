//! runekit CLI - Command line interface
//!
//! Project-based execution - word list, input file and matcher options all
//! come from a JSON project file (default: ./runekit.json)

use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

mod config;
mod logging;
mod platform;

use crate::config::{core_level, LogConfig};
use crate::logging::{LogFormat, TracingSink};
use crate::platform::print_error_with_source;
use runekit_config::{Component, LogLevel, MatcherConfig};
use runekit_core::{MatchError, RuneStream, SourcePosition, Token, Tokenizer, WordMatcher};
use runekit_log::Logger;

/// runekit.json 结构
#[derive(Debug, serde::Deserialize)]
struct ProjectFile {
    /// 直接列出的单词
    #[serde(default)]
    words: Vec<String>,
    /// 单词文件，每行一个
    words_file: Option<String>,
    /// 待分词的输入文件
    input: String,
    /// 分词器配置
    #[serde(default)]
    matcher: MatcherConfig,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
    /// 按组件覆盖日志级别，如 { "matcher": "trace" }
    #[serde(default)]
    log_components: BTreeMap<String, String>,
}

#[derive(Parser)]
#[command(
    name = "runekit",
    about = "Longest-match word tokenizer - Project-based execution",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (default: ./runekit.json)
    #[arg(value_name = "CONFIG", default_value = "runekit.json")]
    config: PathBuf,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let project = match read_project(&cli.config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let log_config = match build_log_config(&project) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&log_config, cli.log_format, cli.log_file.as_ref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        process::exit(1);
    }

    let logger = Logger::new(core_level(log_config.most_verbose())).with_sink(TracingSink);

    let matcher = match load_words(&cli.config, &project, logger.clone()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let input_path = resolve_path(&cli.config, &project.input);
    let bytes = match std::fs::read(&input_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!(
                "Error: Cannot read input file '{}': {}",
                input_path.display(),
                e
            );
            process::exit(1);
        }
    };

    tracing::info!(
        target: "runekit::cli",
        "Tokenizing {} ({} bytes, {} words)",
        input_path.display(),
        bytes.len(),
        matcher.len()
    );

    let mut stream = match RuneStream::decode_with_logger(&bytes, logger.clone()) {
        Ok(s) => s,
        Err(e) => {
            let source = String::from_utf8_lossy(&bytes);
            let prefix = String::from_utf8_lossy(&bytes[..e.offset().min(bytes.len())]);
            let chars: Vec<char> = prefix.chars().collect();
            print_error_with_source(&e, &source, SourcePosition::after(&chars));
            process::exit(1);
        }
    };

    let tokenizer = Tokenizer::with_logger(&matcher, project.matcher.clone(), logger);
    let tokens = match tokenizer.tokenize(&mut stream) {
        Ok(t) => t,
        Err(e) => {
            let source: String = stream.consumed().iter().chain(stream.remaining()).collect();
            print_error_with_source(&e, &source, stream.source_position_at(e.position));
            process::exit(1);
        }
    };

    match render_tokens(&tokens, cli.json) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Read and parse runekit.json
fn read_project(path: &Path) -> Result<ProjectFile, String> {
    if !path.exists() {
        return Err(format!(
            "'{}' not found\n\nhint: create '{}' with an 'input' field and a 'words' list",
            path.display(),
            path.display()
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

    parse_project(&content).map_err(|e| format!("Invalid '{}': {}", path.display(), e))
}

fn parse_project(content: &str) -> Result<ProjectFile, String> {
    let project: ProjectFile = serde_json::from_str(content).map_err(|e| e.to_string())?;

    if project.input.is_empty() {
        return Err("the 'input' field must not be empty".to_string());
    }

    Ok(project)
}

/// Resolve a path relative to the project file's directory
fn resolve_path(project_path: &Path, relative: &str) -> PathBuf {
    let base_dir = project_path.parent().unwrap_or(Path::new("."));
    base_dir.join(relative)
}

fn build_log_config(project: &ProjectFile) -> Result<LogConfig, String> {
    let global = match &project.log_level {
        Some(name) => parse_level(name)?,
        None => LogLevel::default(),
    };

    let mut log_config = LogConfig::new(global);
    for (name, level) in &project.log_components {
        let component = Component::from_name(name)
            .ok_or_else(|| format!("unknown log component '{}'", name))?;
        log_config.set(component, parse_level(level)?);
    }

    Ok(log_config)
}

fn parse_level(name: &str) -> Result<LogLevel, String> {
    LogLevel::parse(name).ok_or_else(|| format!("unknown log level '{}'", name))
}

/// 注册 `words` 与 `words_file` 中的单词，重复单词记录警告后跳过
fn load_words(
    project_path: &Path,
    project: &ProjectFile,
    logger: Arc<Logger>,
) -> Result<WordMatcher, String> {
    let mut matcher = WordMatcher::with_logger(logger);

    let file_words = match &project.words_file {
        Some(file) => {
            let path = resolve_path(project_path, file);
            std::fs::read_to_string(&path)
                .map_err(|e| format!("Cannot read words file '{}': {}", path.display(), e))?
        }
        None => String::new(),
    };

    let all_words = project
        .words
        .iter()
        .map(String::as_str)
        .chain(file_words.lines().filter(|line| !line.trim().is_empty()));

    for word in all_words {
        match matcher.add_word(word) {
            Ok(()) => {}
            Err(MatchError::DuplicateWord { word }) => {
                tracing::warn!(target: "runekit::cli", "Duplicate word {:?} skipped", word);
            }
            Err(e) => return Err(format!("Cannot register word {:?}: {}", word, e)),
        }
    }

    if matcher.is_empty() {
        return Err("no words configured ('words' and 'words_file' are both empty)".to_string());
    }

    Ok(matcher)
}

fn render_tokens(tokens: &[Token], json: bool) -> Result<String, String> {
    if json {
        let mut out = serde_json::to_string_pretty(tokens).map_err(|e| e.to_string())?;
        out.push('\n');
        return Ok(out);
    }

    Ok(tokens
        .iter()
        .map(|t| format!("{}..{}  {}\n", t.start, t.end, t.text))
        .collect())
}
