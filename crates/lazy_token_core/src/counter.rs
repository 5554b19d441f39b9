use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Segmenting estimator: whitespace, `. , ! ?` and 7-char word chunks.
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyTokenCounter;

impl TokenCounter for LazyTokenCounter {
    fn count(&self, text: &str) -> usize {
        crate::tokenize::count(text)
    }
}

/// Whitespace-separated words. Undercounts punctuation-heavy text.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// One token per four characters, rounded up.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharRatioTokenCounter;

impl TokenCounter for CharRatioTokenCounter {
    fn count(&self, text: &str) -> usize {
        text.chars().count().div_ceil(4)
    }
}

/// Selectable estimator, by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    #[default]
    Lazy,
    Whitespace,
    Chars,
}

impl Estimator {
    pub const ALL: [Estimator; 3] = [Estimator::Lazy, Estimator::Whitespace, Estimator::Chars];

    pub fn name(self) -> &'static str {
        match self {
            Estimator::Lazy => "lazy",
            Estimator::Whitespace => "whitespace",
            Estimator::Chars => "chars",
        }
    }
}

impl TokenCounter for Estimator {
    fn count(&self, text: &str) -> usize {
        match self {
            Estimator::Lazy => LazyTokenCounter.count(text),
            Estimator::Whitespace => WhitespaceTokenCounter.count(text),
            Estimator::Chars => CharRatioTokenCounter.count(text),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown estimator '{0}' (expected lazy, whitespace or chars)")]
pub struct UnknownEstimator(pub String);

impl FromStr for Estimator {
    type Err = UnknownEstimator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Estimator::ALL
            .into_iter()
            .find(|estimator| estimator.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEstimator(s.to_string()))
    }
}
