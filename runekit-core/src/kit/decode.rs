//! 文本解码
//!
//! 将文本转换为 Unicode 码点序列：
//! - `"\r\n"` 归一化为 `'\n'`
//! - 单独的 `'\r'` 视为编码错误
//! - 非法 UTF-8 报告首个非法序列的字节偏移

use super::error::DecodeError;

/// 解码字符串
///
/// 空字符串返回空序列。单独的 `'\r'` 按它自身的字节偏移报告；
/// 文本中本来就有的 U+FFFD 视为合法字符。
pub fn decode_str(text: &str) -> Result<Vec<char>, DecodeError> {
    let mut chars = Vec::with_capacity(text.len());
    let mut iter = text.char_indices();

    while let Some((offset, c)) = iter.next() {
        if c != '\r' {
            chars.push(c);
            continue;
        }

        match iter.next() {
            Some((_, '\n')) => chars.push('\n'),
            _ => return Err(DecodeError::LoneCarriageReturn { offset }),
        }
    }

    Ok(chars)
}

/// 解码字节序列
///
/// 错误按出现顺序报告：合法前缀中的 `'\r'` 错误先于其后的 UTF-8 错误。
pub fn decode_bytes(data: &[u8]) -> Result<Vec<char>, DecodeError> {
    match std::str::from_utf8(data) {
        Ok(text) => decode_str(text),
        Err(e) => {
            let offset = e.valid_up_to();
            // valid_up_to 之前的字节保证是合法 UTF-8
            let prefix = std::str::from_utf8(&data[..offset])
                .map_err(|_| DecodeError::InvalidUtf8 { offset })?;
            decode_str(prefix)?;
            Err(DecodeError::InvalidUtf8 { offset })
        }
    }
}
