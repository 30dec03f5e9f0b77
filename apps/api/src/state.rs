use std::sync::Arc;

use crate::analysis::extractor::KeywordExtractor;
use crate::profile::models::ResumeProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The resume under analysis. Loaded once at startup; never mutated.
    pub profile: Arc<ResumeProfile>,
    /// Configured keyword extractor: tokenizer range, stop words, ranking cap.
    pub extractor: Arc<KeywordExtractor>,
}
