//! Cookbook HTTP endpoints
//!
//! ## Endpoints
//!
//! - `POST /parse` - Normalize a hand-written recipe name
//! - `POST /entry` - Register an ingredient or recipe
//! - `GET /summary?name=<recipe>` - Resolve a recipe into cook time and ingredients

use super::AppState;
use super::error::ApiError;
use crate::error::{ResolveError, ValidationError};
use crate::handwriting::parse_handwriting;
use crate::recipe::{RawEntry, RecipeSummary};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /parse
pub(super) async fn parse(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(request) = payload.map_err(malformed)?;
    let msg = parse_handwriting(&request.input)?;
    Ok(Json(ParseResponse { msg }))
}

/// POST /entry
///
/// Validation and insertion happen under one write lock, so two concurrent
/// requests for the same name cannot both succeed.
pub(super) async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<RawEntry>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(raw) = payload.map_err(malformed)?;
    let name = raw.name.clone().unwrap_or_default();

    let mut cookbook = state.cookbook.write().await;
    cookbook.add_raw(raw).map_err(|err| {
        warn!(name = %name, error = %err, "rejected cookbook entry");
        err
    })?;

    info!(name = %name, entries = cookbook.len(), "cookbook entry created");
    Ok(Json(serde_json::json!({})))
}

/// GET /summary
pub(super) async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<RecipeSummary>, ApiError> {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ResolveError::NotFound(String::new()))?;

    let cookbook = state.cookbook.read().await;
    let summary = cookbook.resolver().resolve(&name).map_err(|err| {
        warn!(recipe = %name, error = %err, "recipe summary failed");
        err
    })?;
    Ok(Json(summary))
}

fn malformed(rejection: JsonRejection) -> ValidationError {
    ValidationError::MalformedBody(rejection.body_text())
}
