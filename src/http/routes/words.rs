//! Word endpoints - list, filter by day, create, delete

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::VocabularyRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Word;

/// Word filter query params
#[derive(Deserialize, Default)]
pub struct WordFilterParams {
    pub day: Option<String>,
}

impl WordFilterParams {
    /// An empty `?day=` counts as no filter, matching the original contract.
    fn filter(&self) -> Option<&str> {
        self.day.as_deref().filter(|s| !s.is_empty())
    }
}

/// GET /api/words - full list, or the words of one day
///
/// Filtering is exact string equality on the word's `day` field.
async fn list_words(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WordFilterParams>,
) -> Result<Json<Value>, ApiError> {
    let doc = VocabularyRepo::new(&state.pool)
        .load()
        .await
        .map_err(|e| ApiError::db("Error fetching words", e))?;

    let words = doc.and_then(|d| d.words).ok_or(ApiError::NotFound {
        message: "No words found",
    })?;

    let body = match params.filter() {
        Some(day) => {
            let filtered = Word::filter_by_day(&words, day);
            if filtered.is_empty() {
                // Empty filter result is an empty object with 200, never 404.
                json!({})
            } else {
                json!(filtered)
            }
        }
        None => json!(words),
    };

    Ok(Json(body))
}

/// POST /api/words - append a word
///
/// Requires non-empty string fields `id`, `day`, `word`, `meaning`; the
/// presence check runs before any store access. The stored entry always
/// starts with `isDone: false`, but the response echoes the raw request
/// body, so `isDone` is absent from the echo.
async fn create_word(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    let word = Word::from_request(&body)?;

    let modified = VocabularyRepo::new(&state.pool)
        .push_word(&word)
        .await
        .map_err(|e| ApiError::db("Error creating word", e))?;

    if !modified {
        return Err(ApiError::NoModification {
            key: "error",
            message: "Failed to add word",
        });
    }

    Ok(Json(
        json!({ "message": "Word added successfully", "word": body }),
    ))
}

/// DELETE /api/words/{id} - remove every word entry with the id
///
/// Existence check first, then an unconditional removal. A concurrent
/// delete that wins the race between the two steps surfaces as a
/// no-modification error, not idempotent success.
async fn delete_word(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let repo = VocabularyRepo::new(&state.pool);

    let exists = repo
        .contains_word(&id)
        .await
        .map_err(|e| ApiError::db("Error deleting word", e))?;
    if !exists {
        return Err(ApiError::NotFound {
            message: "Word not found",
        });
    }

    let modified = repo
        .pull_word(&id)
        .await
        .map_err(|e| ApiError::db("Error deleting word", e))?;
    if !modified {
        return Err(ApiError::NoModification {
            key: "message",
            message: "Failed to delete word",
        });
    }

    Ok(Json(json!({ "message": "Word deleted successfully" })))
}

/// Word routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/words", get(list_words).post(create_word))
        .route("/api/words/{id}", delete(delete_word))
}
