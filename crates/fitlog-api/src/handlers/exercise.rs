use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::ErrorResponse;
use crate::state::ApiState;
use fitlog_core::{format_log_date, parse_date, parse_duration, Exercise};

#[derive(Debug, Serialize, Deserialize)]
pub struct LogExerciseRequest {
    pub description: String,
    pub duration: String,
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Log an exercise for a user.
///
/// Three dependent store operations: insert the exercise, look up the user,
/// increment the user's count. The insert is not rolled back when a later
/// step fails, so an exercise referencing an unknown user stays persisted.
pub async fn log_exercise(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    Form(payload): Form<LogExerciseRequest>,
) -> Result<Json<ExerciseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let duration = match parse_duration(&payload.duration) {
        Ok(duration) => duration,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    };

    let date = match payload.date.as_deref().filter(|raw| !raw.is_empty()) {
        Some(raw) => match parse_date(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                ))
            }
        },
        None => None,
    };

    let exercise = Exercise::new(user_id.clone(), payload.description, duration, date);

    // Step 1: persist the exercise (the user reference is not checked)
    if let Err(e) = state.db.insert_exercise(&exercise).await {
        tracing::error!("Failed to insert exercise: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    // Step 2: resolve the user; the exercise row stays even if this fails
    let user = match state.db.get_user(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::error!("Exercise logged for unknown user {}", user_id);
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("User not found: {}", user_id),
                }),
            ));
        }
        Err(e) => {
            tracing::error!("Failed to look up user {}: {}", user_id, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    // Step 3: bump the stored count
    if let Err(e) = state.db.increment_exercise_count(&user.id).await {
        tracing::error!("Failed to update exercise count for {}: {}", user.id, e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: format_log_date(exercise.date),
        id: user.id,
    }))
}
