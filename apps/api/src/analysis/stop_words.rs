//! Stop-word filtering for job-description keyword extraction.
//!
//! The list is configuration, not logic: the default covers the
//! high-frequency Chinese function words the sample resume targets, and a
//! deployment can swap in its own newline-delimited file via
//! `STOP_WORDS_PATH`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// High-frequency Chinese function words excluded from keyword extraction.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "的", "了", "是", "在", "我", "有", "和", "就", "不", "人", "都", "一", "一个", "上", "也",
    "很", "到", "说", "要", "去", "你", "会", "着", "没有", "看", "好", "自己", "这",
];

/// Membership set consulted once per token during extraction.
#[derive(Debug, Clone)]
pub struct StopWordList {
    words: HashSet<String>,
}

impl Default for StopWordList {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl StopWordList {
    /// Builds a list from arbitrary words. Entries are lowercased so the
    /// list matches the tokenizer's normalized output.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// Loads a newline-delimited word list. Surrounding whitespace is
    /// trimmed and blank lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop-word list '{}'", path.display()))?;
        Ok(Self::from_words(
            raw.lines().map(str::trim).filter(|line| !line.is_empty()),
        ))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_list_contains_function_words() {
        let list = StopWordList::default();
        assert!(!list.is_empty());
        assert!(list.contains("的"));
        assert!(list.contains("没有"));
        assert!(list.contains("一个"));
    }

    #[test]
    fn test_default_list_passes_content_words() {
        let list = StopWordList::default();
        assert!(!list.contains("python"));
        assert!(!list.contains("前端"));
    }

    #[test]
    fn test_from_words_lowercases_entries() {
        let list = StopWordList::from_words(["The", "WITH"]);
        assert!(list.contains("the"));
        assert!(list.contains("with"));
    }

    #[test]
    fn test_from_file_trims_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "experience\n\n  with  \n").unwrap();

        let list = StopWordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("experience"));
        assert!(list.contains("with"));
    }

    #[test]
    fn test_from_file_missing_path_is_error() {
        let result = StopWordList::from_file(Path::new("/nonexistent/stop_words.txt"));
        assert!(result.is_err());
    }
}
