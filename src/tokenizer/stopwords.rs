use std::collections::HashSet;

use serde::Deserialize;

const DEFAULT_STOPWORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也",
    "到", "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这", "那", "他",
    "她", "它", "我们", "你们", "他们", "她们", "它们", "这个", "那个", "什么", "怎么",
    "为什么", "但是", "然后", "所以", "因为", "如果", "虽然", "可是", "不过", "the", "a",
    "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
];

/// Tokens excluded from counting. Owned by the tokenizer, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StopwordSet(HashSet<String>);

impl StopwordSet {
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        DEFAULT_STOPWORDS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for StopwordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
