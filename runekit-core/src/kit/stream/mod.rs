//! 可回溯字符流
//!
//! `CharStream` 是匹配器唯一依赖的输入抽象；`RuneStream` 是基于内存码点序列的实现。

mod position;
mod rune_stream;

pub use position::SourcePosition;
pub use rune_stream::RuneStream;

/// 字符流 trait
///
/// 游标 `cursor` 与检查点 `checkpoint` 满足 `0 <= checkpoint <= cursor <= len`。
pub trait CharStream {
    /// 游标是否已到达末尾
    fn is_done(&self) -> bool;

    /// 预读当前字符（不前进），流结束时返回 `None`
    fn peek(&self) -> Option<char>;

    /// 读取当前字符并前进一位，流结束时返回 `None` 且不前进
    fn advance(&mut self) -> Option<char>;

    /// 回退一位；游标已在起点时返回 `false`
    fn refuse(&mut self) -> bool;

    /// 回到最近一次 `accept` 的位置
    fn refuse_many(&mut self);

    /// 将检查点设为当前游标
    fn accept(&mut self);

    /// 当前游标（码点偏移）
    fn position(&self) -> usize;
}
