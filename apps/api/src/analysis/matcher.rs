//! Substring-containment matching between the resume vocabulary and a JD
//! vocabulary, plus the summary line rendered with the report.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::KeywordSet;

/// Outcome of comparing the resume keywords against a JD's keywords.
/// Recomputed per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Resume tokens that matched at least one JD token, in resume order.
    pub matched_keywords: KeywordSet,
    pub total_jd_keywords: usize,
    /// Integer percentage of JD keywords covered. 0 when the JD set is
    /// empty, so an absent job description never divides by zero.
    pub match_rate: u32,
}

/// Pairs every resume token against every JD token. A pair matches when
/// either string contains the other, so "go" and "golang" match in both
/// directions. Short common tokens over-match under this policy; the
/// length floor in extraction keeps the worst single-character cases out.
/// Both sets are capped at extraction, so the quadratic scan is bounded.
pub fn match_keywords(own: &KeywordSet, target: &KeywordSet) -> MatchResult {
    let matched = own.iter().filter(|own_token| {
        target
            .iter()
            .any(|t| own_token.contains(t.as_str()) || t.contains(own_token.as_str()))
    });
    let matched_keywords = KeywordSet::from_tokens(matched.cloned());

    let total_jd_keywords = target.len();
    let match_rate = if total_jd_keywords == 0 {
        0
    } else {
        ((matched_keywords.len() as f64 / total_jd_keywords as f64) * 100.0).round() as u32
    };

    MatchResult {
        matched_keywords,
        total_jd_keywords,
        match_rate,
    }
}

/// Builds the human-readable summary line shown alongside the match report.
pub fn build_summary(result: &MatchResult) -> String {
    if result.total_jd_keywords == 0 {
        return "Paste a job description to analyze keyword match.".to_string();
    }

    let matched = result.matched_keywords.len();
    let total = result.total_jd_keywords;
    let rate = result.match_rate;

    if rate >= 80 {
        format!("Strong match ({rate}%): {matched} of {total} posting keywords covered.")
    } else if rate >= 60 {
        format!(
            "Moderate match ({rate}%): {matched} of {total} posting keywords covered. Consider surfacing the uncovered keywords."
        )
    } else {
        format!(
            "Low match ({rate}%): {matched} of {total} posting keywords covered. Tailor the resume toward the posting's most frequent keywords."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> KeywordSet {
        KeywordSet::from_tokens(tokens.iter().map(|t| t.to_string()))
    }

    #[test]
    fn test_containment_is_symmetric() {
        let forward = match_keywords(&set(&["go"]), &set(&["golang"]));
        let backward = match_keywords(&set(&["golang"]), &set(&["go"]));
        assert_eq!(forward.matched_keywords.tokens(), ["go"]);
        assert_eq!(backward.matched_keywords.tokens(), ["golang"]);
        assert_eq!(forward.match_rate, backward.match_rate);
    }

    #[test]
    fn test_golang_against_go_and_kubernetes_is_half() {
        let result = match_keywords(&set(&["golang"]), &set(&["go", "kubernetes"]));
        assert_eq!(result.matched_keywords.tokens(), ["golang"]);
        assert_eq!(result.total_jd_keywords, 2);
        assert_eq!(result.match_rate, 50);
    }

    #[test]
    fn test_empty_target_rate_is_zero() {
        let result = match_keywords(&set(&["python", "react"]), &set(&[]));
        assert_eq!(result.match_rate, 0);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_empty_own_matches_nothing() {
        let result = match_keywords(&set(&[]), &set(&["python", "react"]));
        assert_eq!(result.match_rate, 0);
        assert_eq!(result.total_jd_keywords, 2);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_matched_tokens_are_resume_side_in_resume_order() {
        let own = set(&["css", "react", "python"]);
        let target = set(&["python", "reactjs"]);
        let result = match_keywords(&own, &target);
        assert_eq!(result.matched_keywords.tokens(), ["react", "python"]);
    }

    #[test]
    fn test_exact_matches_count_toward_rate() {
        // own = [python, react], JD keywords from "We need a Python
        // developer with React experience": 7 tokens, 2 covered.
        let own = set(&["python", "react"]);
        let target = set(&[
            "we",
            "need",
            "python",
            "developer",
            "with",
            "react",
            "experience",
        ]);
        let result = match_keywords(&own, &target);
        assert_eq!(result.matched_keywords.tokens(), ["python", "react"]);
        assert_eq!(result.match_rate, 29); // round(2/7 * 100)
    }

    #[test]
    fn test_summary_prompts_when_no_jd() {
        let result = match_keywords(&set(&["python"]), &set(&[]));
        assert!(build_summary(&result).contains("Paste a job description"));
    }

    #[test]
    fn test_summary_tiers_carry_rate_and_counts() {
        let strong = match_keywords(&set(&["go", "rust"]), &set(&["go", "rust"]));
        assert!(build_summary(&strong).contains("Strong match (100%)"));

        let low = match_keywords(&set(&["go"]), &set(&["go", "java", "c", "sql"]));
        let summary = build_summary(&low);
        assert!(summary.contains("Low match (25%)"));
        assert!(summary.contains("1 of 4"));
    }
}
