pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route(
            "/api/v1/profile/keywords",
            get(profile::handle_profile_keywords),
        )
        .route(
            "/api/v1/profile/skills/:name",
            get(profile::handle_get_skill),
        )
        // Analysis API
        .route(
            "/api/v1/analysis/keywords",
            post(analysis::handle_jd_keywords),
        )
        .route("/api/v1/analysis/match", post(analysis::handle_match))
        .route("/api/v1/analysis/apply", post(analysis::handle_apply))
        .with_state(state)
}
