use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use tm_common::api::{MatchRequestBody, MatchResponse};

use crate::error::{current_request_id, ApiError};
use crate::SharedState;

pub async fn find_matches(
    State(state): State<SharedState>,
    payload: Result<Json<MatchRequestBody>, JsonRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Json(body) = payload?;

    let run = state
        .engine
        .run_matching(&body.request, &body.candidates, &body.options())?;

    info!(
        run_id = %run.run_id,
        request = %body.request.id,
        candidates = body.candidates.len(),
        returned = run.results.len(),
        cached = run.cached,
        "matches served"
    );

    Ok(Json(MatchResponse::from_run(run, current_request_id(), Utc::now())))
}

/// Active defaults, so callers can see what unspecified weights resolve to.
pub async fn config(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let config = state.engine.config();
    let cache = state.engine.cache_stats();

    Json(json!({
        "weights": config.weights,
        "missing_factor_policy": config.missing_factor_policy,
        "cache": {
            "capacity": config.cache_capacity,
            "entries": cache.map(|s| s.entries).unwrap_or(0),
            "hits": cache.map(|s| s.hits).unwrap_or(0),
            "misses": cache.map(|s| s.misses).unwrap_or(0),
        },
    }))
}
