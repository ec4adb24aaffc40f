//! 编辑距离表
//!
//! 为匹配失败的输入给出 "did you mean" 建议。

use crate::kit::decode::decode_str;
use crate::kit::error::MatchError;

/// 候选单词表
#[derive(Debug, Clone, Default)]
pub struct LevenshteinTable {
    words: Vec<Vec<char>>,
}

impl LevenshteinTable {
    /// 从单词列表构建
    ///
    /// 任一单词无法解码时返回 `MatchError::InvalidWord`（下标从 1 开始）。
    pub fn new<I, S>(words: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();

        for (idx, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            let chars = decode_str(word).map_err(|source| MatchError::InvalidWord {
                index: idx + 1,
                word: word.to_string(),
                source,
            })?;
            table.words.push(chars);
        }

        Ok(table)
    }

    /// 追加单词（不检查重复）
    pub fn add_word(&mut self, word: &str) -> Result<(), MatchError> {
        let chars = decode_str(word)?;
        self.words.push(chars);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 编辑距离最小的单词，距离相同时取先加入者
    pub fn closest(&self, target: &[char]) -> Result<String, MatchError> {
        if target.is_empty() {
            return Err(MatchError::empty_parameter("target"));
        }

        self.best(target)
            .map(|(word, _)| word.iter().collect())
            .ok_or(MatchError::NoClosestWord)
    }

    /// 同 [`closest`](Self::closest)，但最小距离超过 `max` 时返回 `None`
    pub fn closest_within(&self, target: &[char], max: usize) -> Option<String> {
        if target.is_empty() {
            return None;
        }

        self.best(target)
            .filter(|&(_, dist)| dist <= max)
            .map(|(word, _)| word.iter().collect())
    }

    fn best(&self, target: &[char]) -> Option<(&[char], usize)> {
        let mut best: Option<(&[char], usize)> = None;

        for word in &self.words {
            let dist = distance(target, word);
            match best {
                Some((_, min)) if dist >= min => {}
                _ => best = Some((word, dist)),
            }
        }

        best
    }
}

impl FromIterator<Vec<char>> for LevenshteinTable {
    fn from_iter<T: IntoIterator<Item = Vec<char>>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Levenshtein 编辑距离（插入、删除、替换各计 1）
pub fn distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}
