//! Axum route handlers for the keyword analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::extractor::{KeywordSet, RankedKeyword};
use crate::analysis::matcher::{build_summary, match_keywords};
use crate::errors::AppError;
use crate::state::AppState;

/// Acknowledgment returned by the apply endpoint. Advisory only: the
/// loaded resume profile is never mutated.
const APPLY_ACK: &str = "ATS optimization applied. Adjust the resume content around the match \
                         results and feature the matched keywords with the highest posting frequency.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct JdKeywordsResponse {
    pub keywords: Vec<RankedKeyword>,
}

#[derive(Debug, Serialize)]
pub struct MatchReportResponse {
    pub match_rate: u32,
    pub matched_count: usize,
    pub total_jd_keywords: usize,
    pub matched_keywords: KeywordSet,
    pub jd_keywords: KeywordSet,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/keywords
///
/// Extraction preview: returns the ranked JD keywords without matching.
/// Useful for inspecting what the tokenizer and stop-word list keep.
pub async fn handle_jd_keywords(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJdRequest>,
) -> Result<Json<JdKeywordsResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let keywords = state.extractor.rank_target(&request.jd_text);

    Ok(Json(JdKeywordsResponse { keywords }))
}

/// POST /api/v1/analysis/match
///
/// Full analysis: resume keywords vs JD keywords with containment matching.
/// An empty `jd_text` is not an error; it yields the zero report with a
/// prompt to paste a posting, mirroring the blank input field.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJdRequest>,
) -> Json<MatchReportResponse> {
    let own = state.extractor.extract_own(&state.profile.keyword_sources());
    let jd_keywords = state.extractor.extract_target(&request.jd_text);

    let result = match_keywords(&own, &jd_keywords);
    let summary = build_summary(&result);

    Json(MatchReportResponse {
        match_rate: result.match_rate,
        matched_count: result.matched_keywords.len(),
        total_jd_keywords: result.total_jd_keywords,
        matched_keywords: result.matched_keywords,
        jd_keywords,
        summary,
    })
}

/// POST /api/v1/analysis/apply
///
/// Acknowledges the "apply optimization" action with advice derived from
/// the analysis contract. No state changes.
pub async fn handle_apply() -> Json<ApplyResponse> {
    Json(ApplyResponse {
        message: APPLY_ACK.to_string(),
    })
}
