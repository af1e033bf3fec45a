//! Day endpoints - list, filter by number, create

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::VocabularyRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Day;

/// Day filter query params
#[derive(Deserialize, Default)]
pub struct DayFilterParams {
    pub day: Option<String>,
}

impl DayFilterParams {
    /// An empty `?day=` counts as no filter, matching the original contract.
    fn filter(&self) -> Option<&str> {
        self.day.as_deref().filter(|s| !s.is_empty())
    }
}

/// GET /api/days - full list, or a single day selected by number
async fn list_days(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DayFilterParams>,
) -> Result<Json<Value>, ApiError> {
    let doc = VocabularyRepo::new(&state.pool)
        .load()
        .await
        .map_err(|e| ApiError::db("Error fetching days", e))?;

    let days = doc.and_then(|d| d.days).ok_or(ApiError::NotFound {
        message: "No days found",
    })?;

    let body = match params.filter() {
        // A missing match returns an empty object with 200, never 404.
        // An unparsable number matches nothing.
        Some(raw) => match raw.parse::<i64>() {
            Ok(number) => Day::find_by_number(&days, number)
                .map(|d| json!(d))
                .unwrap_or_else(|| json!({})),
            Err(_) => json!({}),
        },
        None => json!(days),
    };

    Ok(Json(body))
}

/// POST /api/days - append the next numbered day
///
/// The request body never populates the new day; it is only echoed back.
async fn create_day(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, ApiError> {
    let echo = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    let repo = VocabularyRepo::new(&state.pool);

    let existing = repo
        .load()
        .await
        .map_err(|e| ApiError::db("Error creating day", e))?
        .and_then(|d| d.days)
        .unwrap_or_default();

    // Read-then-append: two concurrent creates can assign the same number.
    let next = Day::next(&existing);
    let modified = repo
        .push_day(&next)
        .await
        .map_err(|e| ApiError::db("Error creating day", e))?;

    if !modified {
        // Same failure body as the word add; clients were built against it.
        return Err(ApiError::NoModification {
            key: "error",
            message: "Failed to add word",
        });
    }

    Ok(Json(json!({ "message": "Day added successfully", "day": echo })))
}

/// Day routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/days", get(list_days).post(create_day))
}
