use crate::dtos::{document_to_json, DeleteCount, InsertAck, TaskDeleted, TaskUpdated};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

fn parse_task_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(AppError::from)
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .tasks()
        .find(doc! {}, None)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching tasks: {}", e);
            AppError::from(e)
        })?;

    let mut tasks = Vec::new();
    while let Some(task) = cursor.try_next().await.map_err(AppError::from)? {
        tasks.push(document_to_json(task));
    }

    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(task): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .db
        .tasks()
        .insert_one(&task, None)
        .await
        .map_err(|e| {
            tracing::error!("Error creating task: {}", e);
            AppError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(InsertAck::from(result))))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_task_id(&id)?;

    let task = state
        .db
        .tasks()
        .find_one(doc! { "_id": task_id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Task not found")))?;

    Ok(Json(document_to_json(task)))
}

/// DELETE /task/:id replies with the raw delete count; a miss is still a 200.
pub async fn delete_task_counted(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_task_id(&id)?;

    let result = state
        .db
        .tasks()
        .delete_one(doc! { "_id": task_id }, None)
        .await
        .map_err(AppError::from)?;

    Ok(Json(DeleteCount {
        delete_count: result.deleted_count,
    }))
}

/// DELETE /tasks/:id replies with a message envelope and 404s on a miss.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_task_id(&id)?;

    let result = state
        .db
        .tasks()
        .delete_one(doc! { "_id": task_id }, None)
        .await
        .map_err(|e| {
            tracing::error!("Error deleting task: {}", e);
            AppError::from(e)
        })?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Task not found")));
    }

    Ok(Json(TaskDeleted {
        message: "Task deleted successfully".to_string(),
    }))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_task_id(&id)?;

    // Merge semantics: provided fields replace same-named ones, the rest stay.
    let result = state
        .db
        .tasks()
        .update_one(doc! { "_id": task_id }, doc! { "$set": changes }, None)
        .await
        .map_err(|e| {
            tracing::error!("Error updating task: {}", e);
            AppError::from(e)
        })?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Task not found")));
    }

    Ok(Json(TaskUpdated {
        message: "Task updated successfully".to_string(),
        task_id: id,
    }))
}

pub async fn list_my_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .tasks()
        .find(doc! { "assignedTo": user_id }, None)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching assigned tasks: {}", e);
            AppError::from(e)
        })?;

    let mut tasks = Vec::new();
    while let Some(task) = cursor.try_next().await.map_err(AppError::from)? {
        tasks.push(document_to_json(task));
    }

    Ok(Json(tasks))
}

pub async fn create_my_task(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(mut task): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = ObjectId::parse_str(&user_id).map_err(AppError::from)?;

    let user = state
        .db
        .users()
        .find_one(doc! { "_id": owner_id }, None)
        .await
        .map_err(AppError::from)?;

    if user.is_none() {
        return Err(AppError::NotFound(anyhow::anyhow!("User not found")));
    }

    // Assignment is stamped server-side; the body cannot claim another user.
    task.insert("assignedTo", user_id);

    let result = state
        .db
        .tasks()
        .insert_one(&task, None)
        .await
        .map_err(|e| {
            tracing::error!("Error creating assigned task: {}", e);
            AppError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(InsertAck::from(result))))
}
