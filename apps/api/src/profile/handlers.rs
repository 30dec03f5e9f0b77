//! Axum route handlers for the resume profile API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::analysis::extractor::KeywordSet;
use crate::errors::AppError;
use crate::profile::models::{ResumeProfile, Skill};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileKeywordsResponse {
    pub keywords: KeywordSet,
}

/// GET /api/v1/profile
///
/// Returns the full loaded resume document.
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ResumeProfile> {
    Json(state.profile.as_ref().clone())
}

/// GET /api/v1/profile/keywords
///
/// Returns the resume-side keyword vocabulary used for matching.
pub async fn handle_profile_keywords(State(state): State<AppState>) -> Json<ProfileKeywordsResponse> {
    let keywords = state.extractor.extract_own(&state.profile.keyword_sources());
    Json(ProfileKeywordsResponse { keywords })
}

/// GET /api/v1/profile/skills/:name
///
/// Returns one skill with its proficiency, or 404 for an unknown name.
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Skill>, AppError> {
    let skill = state
        .profile
        .find_skill(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Skill '{name}' not found")))?;

    Ok(Json(skill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analysis::extractor::KeywordExtractor;
    use crate::analysis::stop_words::StopWordList;
    use crate::analysis::tokenizer::Tokenizer;

    fn test_state() -> AppState {
        let profile = ResumeProfile {
            name: "张伟".to_string(),
            title: "前端开发工程师".to_string(),
            skills: vec![
                Skill {
                    name: "React".to_string(),
                    proficiency: 85,
                },
                Skill {
                    name: "react".to_string(),
                    proficiency: 85,
                },
                Skill {
                    name: "Vue".to_string(),
                    proficiency: 88,
                },
            ],
            sections: vec![],
        };

        AppState {
            profile: Arc::new(profile),
            extractor: Arc::new(KeywordExtractor::new(
                Tokenizer::default(),
                StopWordList::default(),
                50,
            )),
        }
    }

    #[tokio::test]
    async fn test_profile_keywords_lowercased_and_deduped() {
        let Json(response) = handle_profile_keywords(State(test_state())).await;
        assert_eq!(response.keywords.tokens(), ["react", "vue", "前端开发工程师"]);
    }

    #[tokio::test]
    async fn test_get_skill_by_name() {
        let result = handle_get_skill(State(test_state()), Path("vue".to_string())).await;
        assert_eq!(result.unwrap().0.proficiency, 88);
    }

    #[tokio::test]
    async fn test_get_skill_unknown_is_not_found() {
        let result = handle_get_skill(State(test_state()), Path("cobol".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
