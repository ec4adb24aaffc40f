//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use runekit_core::SourcePosition;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &dyn std::error::Error, source: &str, position: SourcePosition) {
    eprintln!("error: {e}");
    eprintln!("  --> {position}");
    eprint!("{}", source_context(source, position.line, position.column));
}

/// 生成源代码上下文（显示错误行前后几行，并在错误列下方标出 `^`）
pub fn source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号对齐宽度
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{separator}|--\n");
    for line_idx in start_line..=end_line {
        let content = lines[line_idx - 1].trim_end_matches('\r');
        out.push_str(&format!("{line_idx:>width$} | {content}\n"));

        if line_idx == error_line {
            // 列按码点计数，制表符原样保留以便对齐
            let marker: String = content
                .chars()
                .take(error_col.saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            out.push_str(&format!("{:width$} | {marker}^\n", ""));
        }
    }
    out.push_str(&format!("{separator}|--\n"));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_caret() {
        let source = "foo bar\nbaz qux\nend";
        let out = source_context(source, 2, 5);

        assert_eq!(
            out,
            "--|--\n1 | foo bar\n2 | baz qux\n  |     ^\n3 | end\n--|--\n"
        );
    }

    #[test]
    fn test_source_context_cjk_column() {
        let out = source_context("中文 x", 1, 4);
        assert!(out.contains("1 | 中文 x\n  |    ^\n"), "got: {out}");
    }

    #[test]
    fn test_source_context_out_of_range() {
        assert_eq!(source_context("one line", 3, 1), "");
        assert_eq!(source_context("one line", 0, 1), "");
    }

    #[test]
    fn test_source_context_window() {
        let source = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let out = source_context(&source, 6, 1);

        assert!(out.starts_with("--|--\n4 | l4\n"));
        assert!(out.contains("8 | l8\n--|--\n"));
        assert!(!out.contains("l9"));
    }
}
