//! HTTP Endpoints
//!
//! Action webhook plus operational endpoints.

use axum::{
    extract::{Json, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use vaulty_core::ActionId;

use crate::metrics::{metrics_handler, record_action, record_error};
use crate::state::AppState;
use crate::webhook::{ActionCall, ActionResponse};
use crate::ServerError;

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.request_timeout_secs);
    drop(config);

    Router::new()
        .route("/webhook", post(run_action))
        .route("/actions", get(list_actions))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/admin/reload-config", post(reload_config))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If no configured origin parses, falls back to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let mut parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No usable CORS origins configured, defaulting to {}", FALLBACK_ORIGIN);
        parsed_origins.push(HeaderValue::from_static(FALLBACK_ORIGIN));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Run one custom action
///
/// POST /webhook
async fn run_action(
    State(state): State<AppState>,
    Json(call): Json<ActionCall>,
) -> Result<Json<ActionResponse>, ServerError> {
    let id: ActionId = call.next_action.parse().map_err(|_| {
        record_error("unknown_action");
        tracing::warn!(action = %call.next_action, "Unknown action requested");
        ServerError::UnknownAction(call.next_action.clone())
    })?;

    let turn = call.to_turn();
    let started = Instant::now();
    let outcome = state.registry().run(id, &turn).map_err(|e| {
        record_error("dispatch");
        ServerError::from(e)
    })?;
    record_action(id.name(), started.elapsed());

    tracing::info!(
        action = %id,
        sender = %turn.sender_id,
        events = outcome.slot_updates.len() + usize::from(outcome.reset_slots),
        responses = outcome.messages.len(),
        "Action executed"
    );

    Ok(Json(ActionResponse::from_outcome(&outcome)))
}

/// List registered actions
async fn list_actions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let registry = state.registry();
    let actions: Vec<serde_json::Value> = registry
        .action_ids()
        .into_iter()
        .filter_map(|id| registry.get(id).map(|action| (id, action.clone())))
        .map(|(id, action)| {
            serde_json::json!({
                "name": id.name(),
                "description": action.description(),
            })
        })
        .collect();

    Json(serde_json::json!({ "actions": actions }))
}

/// Health check
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let action_count = state.registry().len();
    let expected = ActionId::ALL.len();
    let healthy = action_count == expected;

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if healthy { "healthy" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "environment": format!("{:?}", state.get_config().environment),
            "actions": action_count,
        })),
    )
}

/// Settings baked into the router's layers at startup
const RESTART_REQUIRED: [&str; 2] = ["server.cors_origins", "server.request_timeout_secs"];

/// Config reload endpoint
///
/// POST /admin/reload-config
///
/// Form policy and balances take effect for the next action call. CORS
/// and the request timeout are layers built by [`create_router`] and
/// only change on restart; the response lists them under
/// `restart_required`.
async fn reload_config(State(state): State<AppState>) -> impl IntoResponse {
    match state.reload_config() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "success",
                "message": "Configuration reloaded successfully",
                "restart_required": RESTART_REQUIRED,
            })),
        ),
        Err(e) => {
            tracing::error!("Config reload failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "message": e.to_string()
                })),
            )
        }
    }
}
