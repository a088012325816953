use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::ContactRequestRepository;
use crate::db::{
    ContactRequest, NewContactRequest, UpdateContactRequestStatus, CONTACT_REQUEST_STATUSES,
};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;

pub async fn list_contact_requests(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ContactRequest>>>> {
    let requests = ContactRequestRepository::list(&state.db).await?;
    Ok(Json(ApiResponse::list(requests)))
}

pub async fn get_contact_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ContactRequest>>> {
    let request = ContactRequestRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))?;
    Ok(Json(ApiResponse::single(request)))
}

/// Public submission endpoint; every new request starts out pending.
pub async fn create_contact_request(
    State(state): State<AppState>,
    Json(payload): Json<NewContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContactRequest>>)> {
    payload.validate()?;
    let request = ContactRequestRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(request))))
}

/// Status is the only mutable attribute; the submission itself is immutable.
pub async fn update_contact_request_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContactRequestStatus>,
) -> AppResult<Json<ApiResponse<ContactRequest>>> {
    ContactRequestRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))?;

    let status = payload
        .status
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Status is required".to_string()))?;
    if !CONTACT_REQUEST_STATUSES.contains(&status) {
        return Err(AppError::BadRequest(format!(
            "Invalid status. Allowed: {}",
            CONTACT_REQUEST_STATUSES.join(", ")
        )));
    }

    let request = ContactRequestRepository::update_status(&state.db, id, status).await?;
    Ok(Json(ApiResponse::single(request)))
}

pub async fn delete_contact_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<ContactRequest>>> {
    let request = ContactRequestRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact request {} not found", id)))?;
    ContactRequestRepository::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::single(request)))
}
