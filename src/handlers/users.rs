use crate::dtos::{document_to_json, InsertAck};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .users()
        .find(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    let mut users = Vec::new();
    while let Some(user) = cursor.try_next().await.map_err(AppError::from)? {
        users.push(document_to_json(user));
    }

    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<Document>,
) -> Result<Response, AppError> {
    let Ok(email) = user.get_str("email") else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "user body must include an email"
        )));
    };

    let existing = state
        .db
        .users()
        .find_one(doc! { "email": email }, None)
        .await
        .map_err(AppError::from)?;

    if existing.is_some() {
        tracing::info!(email = %email, "Rejected duplicate user registration");
        // Observed wire behavior: 200 with a plain-text notice, not a 409.
        return Ok("user already exists".into_response());
    }

    let result = state
        .db
        .users()
        .insert_one(&user, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(InsertAck::from(result)).into_response())
}
