//! Keyword extraction for both sides of the comparison: resume labels are
//! normalized as-is, job descriptions go through the full tokenize, filter,
//! count, rank pipeline.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWordList;
use crate::analysis::tokenizer::Tokenizer;

/// Tokens shorter than this (in chars) are discarded during JD extraction.
/// A single CJK ideograph or a lone Latin letter carries no signal.
const MIN_TOKEN_CHARS: usize = 2;

/// An ordered vocabulary of distinct lowercase tokens.
///
/// Resume-side sets keep first-seen order; JD-side sets are ordered by
/// descending frequency with a first-occurrence tie-break. Serializes as a
/// plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Builds a set from candidate tokens, dropping duplicates while
    /// preserving first-seen order.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for token in tokens {
            if seen.insert(token.clone()) {
                ordered.push(token);
            }
        }
        Self(ordered)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A JD keyword with its occurrence count, ordered most-frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub keyword: String,
    pub frequency: u32,
}

/// Derives comparable keyword vocabularies from the two text sources.
///
/// Every knob is injected at construction: the tokenizer (with its kept
/// ideograph range), the stop-word list, and the ranking cap. The default
/// wiring in `main` uses `Tokenizer::default()`, the built-in stop words,
/// and a cap of 50.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    stop_words: StopWordList,
    cap: usize,
}

impl KeywordExtractor {
    pub fn new(tokenizer: Tokenizer, stop_words: StopWordList, cap: usize) -> Self {
        Self {
            tokenizer,
            stop_words,
            cap,
        }
    }

    /// Resume-side extraction. The inputs are already short labels (skill
    /// names plus the title line), so they are lowercased and de-duplicated
    /// without further splitting.
    pub fn extract_own(&self, sources: &[String]) -> KeywordSet {
        KeywordSet::from_tokens(sources.iter().map(|s| s.to_lowercase()))
    }

    /// JD-side extraction: tokenize, drop short and stop-listed tokens,
    /// count occurrences, rank by descending frequency, and cut at the cap.
    /// The sort is stable, so equal counts keep first-occurrence order and
    /// repeated calls on the same input produce identical output.
    pub fn rank_target(&self, text: &str) -> Vec<RankedKeyword> {
        let mut ranked: Vec<RankedKeyword> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for token in self.tokenizer.tokenize(text) {
            if token.chars().count() < MIN_TOKEN_CHARS || self.stop_words.contains(&token) {
                continue;
            }
            match index.get(&token) {
                Some(&i) => ranked[i].frequency += 1,
                None => {
                    index.insert(token.clone(), ranked.len());
                    ranked.push(RankedKeyword {
                        keyword: token,
                        frequency: 1,
                    });
                }
            }
        }

        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(self.cap);
        ranked
    }

    /// The keyword-only view of `rank_target`.
    pub fn extract_target(&self, text: &str) -> KeywordSet {
        KeywordSet(self.rank_target(text).into_iter().map(|k| k.keyword).collect())
    }
}
