mod analysis;
mod config;
mod errors;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::stop_words::StopWordList;
use crate::analysis::tokenizer::Tokenizer;
use crate::config::Config;
use crate::profile::models::ResumeProfile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (everything falls back to defaults)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Load the resume under analysis
    let resume_profile = ResumeProfile::load(Path::new(&config.resume_profile_path))?;
    info!(
        "Resume profile loaded: {} ({} skills)",
        resume_profile.title,
        resume_profile.skills.len()
    );

    // Stop words: built-in Chinese list unless a replacement file is configured
    let stop_words = match &config.stop_words_path {
        Some(path) => StopWordList::from_file(Path::new(path))?,
        None => StopWordList::default(),
    };
    info!("Stop-word list: {} entries", stop_words.len());

    let extractor = KeywordExtractor::new(Tokenizer::default(), stop_words, config.keyword_cap);

    // Build app state
    let app_state = AppState {
        profile: Arc::new(resume_profile),
        extractor: Arc::new(extractor),
    };

    // Build router
    let app = build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
