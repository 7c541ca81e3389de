//! HTTP surface: one canonical route table for companies and jobs.
//!
//! Handlers are thin: decode the path/body, make exactly one storage call,
//! encode the result. The database handle travels in [`AppState`].
use crate::entities::{company, job};
use crate::errors::AppError;
use crate::settings::Settings;
use crate::storage::{self, JobPatch, NewCompany, NewJob};
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderName, HeaderValue, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: DatabaseConnection,
}

type ApiError = (StatusCode, Json<Value>);

/// Not-found is the only error a caller can provoke; everything else is a 500.
fn error_response(e: AppError) -> ApiError {
    match e {
        AppError::NotFound(detail) => {
            tracing::debug!(%detail, "record not found");
            (StatusCode::NOT_FOUND, Json(json!({ "detail": detail })))
        }
        e => {
            tracing::error!(error = %e, "storage operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": e.to_string() })),
            )
        }
    }
}

fn not_found(detail: &str) -> ApiError {
    error_response(AppError::NotFound(detail.to_string()))
}

async fn default_headers(request: Request<Body>, next: Next) -> impl IntoResponse {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );

    response
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/companies/", get(list_companies).post(create_company))
        .route("/companies/{id}", delete(delete_company))
        .route("/jobs/", get(list_jobs).post(create_job))
        .route(
            "/jobs/{id}",
            get(read_job).patch(update_job).delete(delete_job),
        )
        .layer(middleware::from_fn(default_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, db: DatabaseConnection) -> Result<(), AppError> {
    let addr: SocketAddr = settings
        .listen_addr()
        .parse()
        .map_err(|e| AppError::Other(format!("bad listen addr: {e}")))?;

    let state = AppState {
        settings: Arc::new(settings),
        db,
    };

    tracing::info!(%addr, "API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn service_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "title": state.settings.server.title,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ========================================
// Companies
// ========================================

/// GET /companies/
async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<company::Model>>, ApiError> {
    let companies = storage::list_companies(&state.db)
        .await
        .map_err(error_response)?;
    Ok(Json(companies))
}

/// POST /companies/
async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<NewCompany>,
) -> Result<Json<company::Model>, ApiError> {
    let company = storage::create_company(&state.db, req)
        .await
        .map_err(error_response)?;
    tracing::info!(id = company.id, "company created");
    Ok(Json(company))
}

/// DELETE /companies/{id}
async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted = storage::delete_company(&state.db, id)
        .await
        .map_err(error_response)?;
    if !deleted {
        return Err(not_found("Company not found"));
    }
    tracing::info!(id, "company deleted");
    Ok(Json(json!({ "ok": "Company record deleted" })))
}

// ========================================
// Jobs
// ========================================

/// GET /jobs/
async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<job::Model>>, ApiError> {
    let jobs = storage::list_jobs(&state.db).await.map_err(error_response)?;
    Ok(Json(jobs))
}

/// POST /jobs/
async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<NewJob>,
) -> Result<Json<job::Model>, ApiError> {
    let job = storage::create_job(&state.db, req)
        .await
        .map_err(error_response)?;
    tracing::info!(id = job.id, internal_code = job.internal_code, "job created");
    Ok(Json(job))
}

/// GET /jobs/{id}
async fn read_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<job::Model>, ApiError> {
    storage::get_job(&state.db, id)
        .await
        .map_err(error_response)?
        .map(Json)
        .ok_or_else(|| not_found("Job record not found"))
}

/// PATCH /jobs/{id}
async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<JobPatch>,
) -> Result<Json<job::Model>, ApiError> {
    let job = storage::update_job(&state.db, id, patch)
        .await
        .map_err(error_response)?
        .ok_or_else(|| not_found("Job record not found"))?;
    tracing::info!(id, "job updated");
    Ok(Json(job))
}

/// DELETE /jobs/{id}
async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted = storage::delete_job(&state.db, id)
        .await
        .map_err(error_response)?;
    if !deleted {
        return Err(not_found("Job not found"));
    }
    tracing::info!(id, "job deleted");
    Ok(Json(json!({ "ok": "Job record deleted" })))
}
