use axum::{
    extract::{Form, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::ErrorResponse;
use crate::state::ApiState;
use fitlog_core::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// Create a user
pub async fn create_user(
    State(state): State<ApiState>,
    Form(payload): Form<CreateUserRequest>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = User::new(payload.username);

    match state.db.create_user(&user).await {
        Ok(()) => Ok(Json(UserResponse {
            id: user.id,
            username: user.username,
        })),
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// List all users, projected to id and username
pub async fn list_users(
    State(state): State<ApiState>,
) -> Result<Json<Vec<UserResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state.db.list_users().await {
        Ok(records) => {
            let users = records
                .into_iter()
                .map(|record| UserResponse {
                    id: record.id,
                    username: record.username,
                })
                .collect();

            Ok(Json(users))
        }
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
