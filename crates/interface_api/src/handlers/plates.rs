//! Plate handlers

use axum::{extract::State, Form, Json};
use tracing::instrument;

use core_kernel::PlateId;

use crate::dto::plate::{PlateResponse, UpsertPlateForm};
use crate::dto::{IdRequest, SuccessResponse};
use crate::{error::ApiError, AppState};

/// Creates or updates a plate, resolving the owner by name
#[instrument(skip(state, form))]
pub async fn upsert_plate(
    State(state): State<AppState>,
    Form(form): Form<UpsertPlateForm>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.upsert_plate(form.into_request()?).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[instrument(skip(state))]
pub async fn delete_plate(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.delete_plate(PlateId::new(request.id)).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Lists plates ordered by number
pub async fn list_plates(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlateResponse>>, ApiError> {
    let plates = state.service.list_plates().await?;
    Ok(Json(plates.into_iter().map(Into::into).collect()))
}
