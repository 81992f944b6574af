use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::ErrorResponse;
use crate::state::ApiState;
use fitlog_core::{format_log_date, LogQuery};

#[derive(Debug, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: i32,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Fetch a user's exercise log, optionally bounded by date range and limit.
///
/// The user lookup and the filtered exercise query are awaited together and
/// the response is composed exactly once.
pub async fn fetch_log(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = match LogQuery::from_params(
        user_id.clone(),
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    ) {
        Ok(query) => query,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    };

    let (user, entries) = match tokio::try_join!(
        state.db.get_user(&user_id),
        state.db.fetch_log(&query),
    ) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Failed to fetch exercise log for {}: {}", user_id, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    let user = match user {
        Some(user) => user,
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("User not found: {}", user_id),
                }),
            ))
        }
    };

    let log = entries
        .into_iter()
        .map(|entry| LogEntry {
            description: entry.description,
            duration: entry.duration,
            date: format_log_date(entry.date),
        })
        .collect();

    Ok(Json(LogResponse {
        username: user.username,
        count: user.exercise_count,
        id: user.id,
        log,
    }))
}
