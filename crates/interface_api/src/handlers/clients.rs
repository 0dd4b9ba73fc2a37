//! Client handlers

use axum::{extract::State, Form, Json};
use tracing::instrument;

use core_kernel::ClientId;

use crate::dto::client::{ClientResponse, ClientStatsResponse, UpsertClientForm};
use crate::dto::{IdRequest, SuccessResponse};
use crate::{error::ApiError, AppState};

/// Statistics for the client information modal
#[instrument(skip(state))]
pub async fn get_client_stats(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Result<Json<ClientStatsResponse>, ApiError> {
    let stats = state.service.client_stats(ClientId::new(request.id)).await?;
    Ok(Json(stats.into()))
}

/// Creates a client, or updates it when the form carries an id
#[instrument(skip(state, form))]
pub async fn upsert_client(
    State(state): State<AppState>,
    Form(form): Form<UpsertClientForm>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.upsert_client(form.into_request()?).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Deletes a client; its plates and refills stay
#[instrument(skip(state))]
pub async fn delete_client(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.service.delete_client(ClientId::new(request.id)).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Lists clients ordered by name
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.service.list_clients().await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}
