//! 固定序列匹配

use crate::kit::error::MatchError;
use crate::kit::stream::CharStream;

/// 逐字符比对 `expected` 与流中内容
///
/// 全部相同时返回该序列，流停在序列之后；
/// 第一个不同（或流提前结束）时退回已读的字符，流回到调用前的位置。
pub fn multi_matcher<S: CharStream + ?Sized>(
    expected: &[char],
    stream: &mut S,
) -> Result<String, MatchError> {
    if expected.is_empty() {
        return Err(MatchError::empty_parameter("expected"));
    }

    for (position, &want) in expected.iter().enumerate() {
        let found = stream.peek();
        if found != Some(want) {
            for _ in 0..position {
                stream.refuse();
            }
            return Err(MatchError::StreamMismatch {
                expected: want,
                found,
                position,
            });
        }
        stream.advance();
    }

    Ok(expected.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::error::ErrorKind;
    use crate::kit::stream::RuneStream;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_multi_matcher_full_match() {
        let mut stream = RuneStream::from("hello world");

        assert_eq!(multi_matcher(&chars("hello"), &mut stream), Ok("hello".to_string()));
        assert_eq!(stream.position(), 5);
        assert_eq!(stream.peek(), Some(' '));
    }

    #[test]
    fn test_multi_matcher_mismatch() {
        let mut stream = RuneStream::from("abd");

        let err = multi_matcher(&chars("abc"), &mut stream).unwrap_err();
        assert_eq!(
            err,
            MatchError::StreamMismatch {
                expected: 'c',
                found: Some('d'),
                position: 2
            }
        );
        assert_eq!(err.to_string(), "expected 'c', got 'd' instead");
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_multi_matcher_stream_too_short() {
        let mut stream = RuneStream::from("ab");

        let err = multi_matcher(&chars("abc"), &mut stream).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StreamMismatch);
        assert_eq!(err.to_string(), "expected 'c', got nothing instead");
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_multi_matcher_first_char_mismatch() {
        let mut stream = RuneStream::from("xyz");
        stream.advance();

        let err = multi_matcher(&chars("a"), &mut stream).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StreamMismatch);
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_multi_matcher_empty_expected() {
        let mut stream = RuneStream::from("abc");

        let err = multi_matcher(&[], &mut stream).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_multi_matcher_keeps_checkpoint() {
        let mut stream = RuneStream::from("key=value");
        multi_matcher(&chars("key"), &mut stream).unwrap();
        stream.accept();

        assert!(multi_matcher(&chars("=v!"), &mut stream).is_err());
        assert_eq!(stream.position(), 3);
        assert_eq!(stream.checkpoint(), 3);
    }
}
