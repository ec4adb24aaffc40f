//! 候选集收窄与结果判定
//!
//! 一次匹配内的状态：仍与已读前缀一致的单词下标、已读字符数、已读前缀文本。
//! 候选集只会缩小，不会增长。

use crate::kit::error::MatchError;

pub(crate) struct Narrowing<'w> {
    words: &'w [Vec<char>],
    indices: Vec<usize>,
    pos: usize,
    consumed: String,
}

impl<'w> Narrowing<'w> {
    /// 以全部单词为初始候选集
    pub(crate) fn new(words: &'w [Vec<char>]) -> Self {
        Self {
            words,
            indices: (0..words.len()).collect(),
            pos: 0,
            consumed: String::new(),
        }
    }

    /// 已读字符数
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// 剩余候选都已完整匹配，继续读取不会改变结果
    pub(crate) fn is_settled(&self) -> bool {
        self.indices.iter().all(|&idx| self.words[idx].len() <= self.pos)
    }

    /// 用下一个字符收窄候选集
    ///
    /// 保留已完整匹配（`pos >= len`）或该位置字符相同的单词。
    /// 收窄后为空时返回 `false`，候选集与位置保持不变；否则前进一位。
    pub(crate) fn narrow(&mut self, c: char) -> bool {
        let (words, pos) = (self.words, self.pos);
        let keeps = |idx: &usize| {
            let word = &words[*idx];
            pos >= word.len() || word[pos] == c
        };

        if !self.indices.iter().any(keeps) {
            return false;
        }

        self.indices.retain(keeps);
        self.pos += 1;
        self.consumed.push(c);
        true
    }

    /// 从当前候选集中选出结果
    ///
    /// 只考虑长度不超过 `pos` 的完整单词，取其中最长者；最长者不唯一时报告歧义。
    pub(crate) fn resolve(&self) -> Result<&'w [char], MatchError> {
        let complete: Vec<&'w [char]> = self
            .indices
            .iter()
            .map(|&idx| self.words[idx].as_slice())
            .filter(|word| word.len() <= self.pos)
            .collect();

        let Some(longest) = complete.iter().map(|word| word.len()).max() else {
            return Err(MatchError::NoMatch {
                consumed: self.consumed.clone(),
            });
        };

        let best: Vec<&'w [char]> = complete
            .into_iter()
            .filter(|word| word.len() == longest)
            .collect();

        match best.as_slice() {
            [only] => Ok(*only),
            _ => Err(MatchError::Ambiguous {
                consumed: self.consumed.clone(),
                candidates: best.iter().map(|word| word.iter().collect()).collect(),
            }),
        }
    }
}
