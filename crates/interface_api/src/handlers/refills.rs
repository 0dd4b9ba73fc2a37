//! Refill handlers

use axum::{extract::State, Form, Json};
use tracing::instrument;

use core_kernel::RefillId;

use crate::dto::refill::{CreateRefillForm, RefillResponse};
use crate::dto::{IdRequest, SuccessResponse};
use crate::{error::ApiError, AppState};

/// Records a refill after resolving its client and plate
#[instrument(skip(state, form))]
pub async fn create_refill(
    State(state): State<AppState>,
    Form(form): Form<CreateRefillForm>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.create_refill(form.into_request()?).await?;
    Ok(Json(SuccessResponse::ok()))
}

#[instrument(skip(state))]
pub async fn delete_refill(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.delete_refill(RefillId::new(request.id)).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Lists refills, most recent first
pub async fn list_refills(
    State(state): State<AppState>,
) -> Result<Json<Vec<RefillResponse>>, ApiError> {
    let refills = state.service.list_refills().await?;
    Ok(Json(refills.into_iter().map(Into::into).collect()))
}
