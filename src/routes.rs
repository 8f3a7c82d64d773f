use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{daily::daily_index, error::AppError, state::AppState, store::Question};

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "👋 Welcome to the Poker Trivia API!",
        "docs": "/docs",
        "endpoints": {
            "daily": "/trivia/daily",
            "random": "/trivia/random",
            "search": "/trivia/search?q=...",
        },
    }))
}

/// Today's question. The date goes into the selector explicitly, so within
/// one server-local calendar day every call lands on the same record.
pub async fn daily_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Question>, AppError> {
    let today = Local::now().date_naive();
    let index = daily_index(today, state.store.len())?;

    // daily_index guarantees the index is in range for a non-empty store
    state
        .store
        .get(index)
        .cloned()
        .map(Json)
        .ok_or(AppError::EmptyStore)
}

pub async fn random_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Question>, AppError> {
    state
        .store
        .pick_random()
        .cloned()
        .map(Json)
        .ok_or(AppError::EmptyStore)
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params.q.ok_or(AppError::MissingParameter("q"))?;
    let results = state.store.search(&query);

    Ok(Json(json!({
        "query": query,
        "results": results,
    })))
}
