// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info};

use mishmeret_api::{
    ApiError, AssignShiftRequest, AuthenticationService, CreateBranchRequest,
    CreateEmployeeRequest, LoginRequest, LoginResponse, MoveShiftRequest, SaveScheduleRequest,
    UpdateEmployeeRequest, WhoamiResponse, assign_shift, create_branch, create_employee,
    delete_employee, get_schedule, list_audit_events, list_employees, move_shift, save_schedule,
    transition_week, update_employee,
};
use mishmeret_audit::Cause;
use mishmeret_persistence::Persistence;

mod session;

use session::{SessionBranch, bearer_token};

/// Mishmeret Server - HTTP server for the Mishmeret shift board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer, serialized behind a mutex.
    pub persistence: Arc<Mutex<Persistence>>,
}

/// Monotonic request counter used to stamp audit causes.
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_cause(description: &str) -> Cause {
    let id: u64 = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    Cause::new(format!("req-{id}"), description.to_string())
}

/// Wrapper that converts API errors into HTTP responses.
struct HttpError(ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status: StatusCode = match &self.0 {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body: Json<serde_json::Value> =
            Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Query parameters for schedule reads.
#[derive(Debug, Deserialize)]
struct ScheduleQuery {
    /// The branch display name.
    branch: String,
    /// The week selector; defaults to `current`.
    week: Option<String>,
}

/// Query parameters selecting a week only.
#[derive(Debug, Deserialize)]
struct WeekQuery {
    /// The week selector; defaults to `current`.
    week: Option<String>,
}

/// Query parameters selecting a branch.
#[derive(Debug, Deserialize)]
struct BranchQuery {
    /// The branch display name.
    branch: String,
}

async fn login_handler(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let (token, _actor, branch) =
        AuthenticationService::login(&mut persistence, &request.username, &request.password)
            .map_err(ApiError::from)?;

    Ok(Json(LoginResponse {
        token,
        branch: branch.name,
        is_admin: branch.is_admin,
    }))
}

async fn logout_handler(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, Response> {
    let token: &str = bearer_token(&headers).map_err(IntoResponse::into_response)?;

    let mut persistence = state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, token)
        .map_err(|e| HttpError::from(ApiError::from(e)).into_response())?;

    Ok(StatusCode::NO_CONTENT)
}

async fn whoami_handler(
    SessionBranch(_actor, branch): SessionBranch,
) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        username: branch.username,
        branch: branch.name,
        is_admin: branch.is_admin,
    })
}

async fn get_schedule_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(_actor, _branch): SessionBranch,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let week: String = query.week.unwrap_or_else(|| String::from("current"));
    let response = get_schedule(&mut persistence, &query.branch, &week)?;
    Ok(Json(response).into_response())
}

async fn get_schedule_by_path_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(_actor, _branch): SessionBranch,
    Path(branch): Path<String>,
    Query(query): Query<WeekQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let week: String = query.week.unwrap_or_else(|| String::from("current"));
    let response = get_schedule(&mut persistence, &branch, &week)?;
    Ok(Json(response).into_response())
}

async fn put_schedule_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(branch_id): Path<i64>,
    Json(request): Json<SaveScheduleRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = save_schedule(
        &mut persistence,
        &actor,
        branch_id,
        request,
        next_cause("PUT /schedule"),
    )?;
    Ok(Json(response).into_response())
}

async fn assign_shift_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(branch_id): Path<i64>,
    Json(request): Json<AssignShiftRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = assign_shift(
        &mut persistence,
        &actor,
        branch_id,
        request,
        next_cause("POST /schedule/assign"),
    )?;
    Ok(Json(response).into_response())
}

async fn move_shift_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(branch_id): Path<i64>,
    Json(request): Json<MoveShiftRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = move_shift(
        &mut persistence,
        &actor,
        branch_id,
        request,
        next_cause("POST /schedule/move"),
    )?;
    Ok(Json(response).into_response())
}

async fn transition_week_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(branch_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = transition_week(
        &mut persistence,
        &actor,
        branch_id,
        next_cause("POST /transition"),
    )?;
    Ok(Json(response).into_response())
}

async fn list_employees_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(_actor, _branch): SessionBranch,
    Query(query): Query<BranchQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = list_employees(&mut persistence, &query.branch)?;
    Ok(Json(response).into_response())
}

async fn create_employee_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = create_employee(
        &mut persistence,
        &actor,
        request,
        next_cause("POST /employees"),
    )?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn update_employee_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(employee_id): Path<i64>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = update_employee(
        &mut persistence,
        &actor,
        employee_id,
        request,
        next_cause("PUT /employees"),
    )?;
    Ok(Json(response).into_response())
}

async fn delete_employee_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Path(employee_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = state.persistence.lock().await;
    delete_employee(
        &mut persistence,
        &actor,
        employee_id,
        next_cause("DELETE /employees"),
    )?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_branch_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Json(request): Json<CreateBranchRequest>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = create_branch(
        &mut persistence,
        &actor,
        request,
        next_cause("POST /branches"),
    )?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn list_audit_handler(
    AxumState(state): AxumState<AppState>,
    SessionBranch(actor, _branch): SessionBranch,
    Query(query): Query<BranchQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response = list_audit_events(&mut persistence, &actor, &query.branch)?;
    Ok(Json(response).into_response())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/whoami", get(whoami_handler))
        .route("/schedule", get(get_schedule_handler))
        .route(
            "/schedule/{branch}",
            get(get_schedule_by_path_handler).put(put_schedule_handler),
        )
        .route("/schedule/{branch_id}/assign", post(assign_shift_handler))
        .route("/schedule/{branch_id}/move", post(move_shift_handler))
        .route("/transition/{branch_id}", post(transition_week_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{employee_id}",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/branches", post(create_branch_handler))
        .route("/audit", get(list_audit_handler))
        .with_state(state)
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let persistence: Persistence = match &args.database {
        Some(path) => {
            info!(path, "Opening database file");
            Persistence::new_with_database_file(path)?
        }
        None => {
            info!("Using in-memory database");
            Persistence::new_in_memory()?
        }
    };

    let state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let addr: String = format!("0.0.0.0:{}", args.port);
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr, "Mishmeret server listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Args = Args::parse();

    if let Err(e) = run(args).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
