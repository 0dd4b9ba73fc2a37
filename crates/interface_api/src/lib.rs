//! HTTP API Layer
//!
//! The fleet admin HTTP surface, built on Axum.
//!
//! # Architecture
//!
//! - **Actions**: `POST /_actions/<name>` endpoints called by the admin front end
//! - **Listings**: read-only `GET /api/v1/...` endpoints for the admin tables
//! - **Health**: liveness and readiness probes
//! - **Middleware**: request ids, tracing, audit logging, CORS
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use interface_api::create_router;
//! use infra_db::SqliteFleetAdapter;
//!
//! let app = create_router(Arc::new(SqliteFleetAdapter::new(pool)));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_fleet::{FleetPort, FleetService};

use crate::handlers::{clients, health, plates, refills};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: FleetService,
}

impl AppState {
    pub fn new(port: Arc<dyn FleetPort>) -> Self {
        Self {
            service: FleetService::new(port),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `port` - Fleet data-access port (the SQLite adapter in production)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(port: Arc<dyn FleetPort>) -> Router {
    let state = AppState::new(port);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Names match the front end's action calls
    let action_routes = Router::new()
        .route("/getClientStats", post(clients::get_client_stats))
        .route("/upsertClient", post(clients::upsert_client))
        .route("/deleteClient", post(clients::delete_client))
        .route("/upsertMatricula", post(plates::upsert_plate))
        .route("/deleteMatricula", post(plates::delete_plate))
        .route("/createRepostaje", post(refills::create_refill))
        .route("/deleteRepostaje", post(refills::delete_refill));

    let api_routes = Router::new()
        .route("/clients", get(clients::list_clients))
        .route("/plates", get(plates::list_plates))
        .route("/refills", get(refills::list_refills));

    Router::new()
        .merge(public_routes)
        .nest("/_actions", action_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
