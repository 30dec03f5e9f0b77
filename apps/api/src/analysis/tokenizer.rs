//! Job-description tokenization: lowercase, strip symbols, split on
//! whitespace runs.
//!
//! The character filter keeps ASCII letters, ASCII digits, and CJK
//! ideographs, so Chinese postings survive tokenization alongside Latin
//! text. Contiguous ideograph runs come out as single tokens since Chinese
//! carries no space delimiters.

use std::ops::RangeInclusive;

/// CJK Unified Ideographs, the block Chinese postings draw from.
pub const CJK_UNIFIED: RangeInclusive<u32> = 0x4E00..=0x9FA5;

/// Splits free text into lowercase candidate tokens. The kept ideograph
/// range is a constructor parameter rather than a constant baked into the
/// filter.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    kept_ideographs: RangeInclusive<u32>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(CJK_UNIFIED)
    }
}

impl Tokenizer {
    pub fn new(kept_ideographs: RangeInclusive<u32>) -> Self {
        Self { kept_ideographs }
    }

    /// Lowercases the text, replaces every character outside the kept
    /// alphabet with a space, and splits on whitespace runs. Total over all
    /// inputs; empty input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if self.keeps(c) { c } else { ' ' })
            .collect();

        cleaned.split_whitespace().map(str::to_string).collect()
    }

    fn keeps(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.kept_ideographs.contains(&(c as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_splits_tokens() {
        let tokens = Tokenizer::default().tokenize("react, vue/angular!");
        assert_eq!(tokens, vec!["react", "vue", "angular"]);
    }

    #[test]
    fn test_latin_is_lowercased() {
        let tokens = Tokenizer::default().tokenize("Python AND React");
        assert_eq!(tokens, vec!["python", "and", "react"]);
    }

    #[test]
    fn test_digits_are_kept() {
        let tokens = Tokenizer::default().tokenize("html5 / css3");
        assert_eq!(tokens, vec!["html5", "css3"]);
    }

    #[test]
    fn test_cjk_runs_stay_contiguous() {
        // Fullwidth punctuation is outside the kept range and becomes a split.
        let tokens = Tokenizer::default().tokenize("前端开发，熟悉React");
        assert_eq!(tokens, vec!["前端开发", "熟悉react"]);
    }

    #[test]
    fn test_empty_and_whitespace_yield_no_tokens() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_custom_range_drops_ideographs() {
        let tokenizer = Tokenizer::new(0..=0);
        assert_eq!(tokenizer.tokenize("前端 dev"), vec!["dev"]);
    }
}
