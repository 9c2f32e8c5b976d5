//! Schedulify server - session-backed schedule storage plus generation.
//!
//! Architecture:
//! - Every request passes through the session middleware, which resolves
//!   a signed `sid` cookie into a session ID (minting one if needed)
//! - Handlers read and write the in-memory session store through that ID
//! - `/analyze-task` additionally makes one outbound call to the
//!   configured generation service
//!
//! Endpoints:
//! - GET  /                        - Landing page UI
//! - POST /set-schedule            - Store the four daily times
//! - GET  /get-schedule            - Read the stored times
//! - POST /analyze-task            - Generate a suggested schedule
//! - GET  /get-generated-schedule  - Read the last generated text

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::llm::{compose_prompt, ScheduleGenerator};
use crate::models::Schedule;
use crate::session::{session_layer, SessionId, SessionStore};

/// Shared server state.
pub struct ServerState {
    /// In-memory session store.
    pub sessions: SessionStore,
    /// Generation service used by `/analyze-task`.
    pub generator: Arc<dyn ScheduleGenerator>,
    /// Secret for signing session cookies.
    pub session_secret: String,
}

// === Request/Response Types ===

/// Body of `POST /set-schedule`. Fields are optional here so validation
/// can report absence itself instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScheduleRequest {
    pub wake_up: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub sleep: Option<String>,
}

impl SetScheduleRequest {
    /// All four fields present and non-empty, or nothing.
    fn into_schedule(self) -> Option<Schedule> {
        let present = |field: Option<String>| field.filter(|v| !v.is_empty());
        Some(Schedule {
            wake_up: present(self.wake_up)?,
            lunch: present(self.lunch)?,
            dinner: present(self.dinner)?,
            sleep: present(self.sleep)?,
        })
    }
}

/// Body of `POST /analyze-task`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeTaskRequest {
    /// Free-text task description, used as-is.
    #[serde(default)]
    pub prompt: String,
}

/// Response carrying generated schedule text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedScheduleResponse {
    pub suggested_schedule: String,
}

// === Server Lifecycle ===

/// Build the application router.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/set-schedule", post(set_schedule))
        .route("/get-schedule", get(get_schedule))
        .route("/analyze-task", post(analyze_task))
        .route("/get-generated-schedule", get(get_generated_schedule))
        .layer(middleware::from_fn_with_state(state.clone(), session_layer))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn start_server(port: u16, state: Arc<ServerState>) -> Result<()> {
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Schedulify server starting on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

// === Handlers ===

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// Replace the session's schedule with the four provided times.
async fn set_schedule(
    State(state): State<Arc<ServerState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Json(request): Json<SetScheduleRequest>,
) -> Result<&'static str, ApiError> {
    let schedule = request
        .into_schedule()
        .ok_or_else(|| ApiError::validation("All schedule fields are required"))?;

    debug!(%session_id, ?schedule, "saving schedule");
    state
        .sessions
        .update(session_id, |data| data.schedule = Some(schedule))
        .await;

    Ok("Schedule saved successfully")
}

/// Return the stored schedule, exactly as last written.
async fn get_schedule(
    State(state): State<Arc<ServerState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<Json<Schedule>, ApiError> {
    state
        .sessions
        .get(session_id)
        .await
        .and_then(|data| data.schedule)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No schedule found"))
}

/// Compose a prompt from the stored schedule and the task text, call the
/// generation service once, and store the result.
async fn analyze_task(
    State(state): State<Arc<ServerState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Json(request): Json<AnalyzeTaskRequest>,
) -> Result<Json<SuggestedScheduleResponse>, ApiError> {
    // Precondition before any outbound call or mutation.
    let schedule = state
        .sessions
        .get(session_id)
        .await
        .and_then(|data| data.schedule)
        .ok_or_else(|| {
            ApiError::validation(
                "Please provide specific times for Wake up, Lunch, Dinner, and Sleep.",
            )
        })?;

    let prompt = compose_prompt(&schedule, &request.prompt);

    match state.generator.generate(&prompt).await {
        Ok(text) => {
            state
                .sessions
                .update(session_id, |data| {
                    data.generated_schedule = Some(text.clone());
                })
                .await;
            Ok(Json(SuggestedScheduleResponse {
                suggested_schedule: text,
            }))
        }
        Err(err) => {
            // Logged for operators; the client only sees the fixed message.
            error!(%session_id, error = %err, "schedule generation failed");
            Err(ApiError::Upstream)
        }
    }
}

/// Return the last generated schedule text for this session.
async fn get_generated_schedule(
    State(state): State<Arc<ServerState>>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<Json<SuggestedScheduleResponse>, ApiError> {
    state
        .sessions
        .get(session_id)
        .await
        .and_then(|data| data.generated_schedule)
        .map(|text| {
            Json(SuggestedScheduleResponse {
                suggested_schedule: text,
            })
        })
        .ok_or_else(|| ApiError::not_found("No generated schedule found"))
}
