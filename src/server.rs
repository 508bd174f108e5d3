//! HTTP surface: serves the rendered page and a few JSON endpoints.
//!
//! Every request carries its own language (`?lang=pt|en`), so handlers build
//! a fresh `Page` per request and requests share only the static tables.

use crate::config::Config;
use crate::i18n::{Language, LanguageStrings};
use crate::page::{LinkStyle, Page};
use crate::skills::{skill_table, SkillGroup};
use anyhow::{Context, Result};
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use maud::Markup;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported language '{0}'. Available: pt, en")]
    UnknownLanguage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

/// `?lang=` query parameter shared by the page and content endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    /// Missing parameter means first load, i.e. the primary language.
    pub fn resolve(&self) -> Result<Language, AppError> {
        match self.lang.as_deref() {
            None => Ok(Language::primary()),
            Some(code) => Language::from_code(code).map_err(|e| {
                warn!("Rejected request: {}", e);
                AppError::UnknownLanguage(code.to_string())
            }),
        }
    }
}

/// Body of `GET /api/content`.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub language: Language,
    pub toggle_label: String,
    pub strings: &'static LanguageStrings,
    pub skills: Vec<SkillGroup>,
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(page))
        .route("/api/content", get(content))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve_on(listener).await
}

/// Serve on an already-bound listener.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Portfolio listening on http://{}", addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// `GET /` — the page in the requested (or primary) language.
async fn page(Query(query): Query<LanguageQuery>) -> Result<Markup, AppError> {
    let language = query.resolve()?;
    Ok(Page::with_language(language).view(LinkStyle::Query))
}

/// `GET /api/content` — the resolved bundle plus the skills table.
async fn content(Query(query): Query<LanguageQuery>) -> Result<Json<ContentResponse>, AppError> {
    let page = Page::with_language(query.resolve()?);
    Ok(Json(ContentResponse {
        language: page.language(),
        toggle_label: page.toggle_label(),
        strings: page.content(),
        skills: skill_table(),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
