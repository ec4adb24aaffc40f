//! 源文本位置追踪
//!
//! - line/column: 人类可读的错误显示（1-based，列按码点计数）
//! - byte_offset: UTF-8 字节偏移（0-based），用于定位原始输入

/// 源文本位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文本起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.byte_offset += c.len_utf8();
    }

    /// 读完 `chars` 之后所在的位置
    pub fn after(chars: &[char]) -> Self {
        chars.iter().fold(Self::start(), |mut pos, &c| {
            pos.advance(c);
            pos
        })
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
