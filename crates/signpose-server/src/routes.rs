//! Axum route handlers for the HTTP API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use signpose_core::{write_clip, SignError};

use crate::models::{ConvertRequest, ConvertResponse, ErrorResponse, HealthResponse};
use crate::render::render_video;
use crate::state::AppState;
use crate::tasks::TaskStatus;

/// `GET /health` — health check endpoint.
///
/// # Example Response
///
/// ```json
/// {"status": "ok", "version": "0.1.0"}
/// ```
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/convert` — submit text for conversion.
///
/// Validates the request, registers a task, and runs the
/// text → gloss → pose (→ video) pipeline on a background task. The
/// caller polls `GET /api/status/:task_id` for progress.
///
/// # Errors
///
/// - 400 Bad Request: empty text, unknown glosser
/// - 422 Unprocessable Entity: invalid JSON (handled by Axum)
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.text.trim().is_empty() {
        return Err(bad_request("text must not be empty"));
    }
    if state.glossers.get(&request.glosser).is_err() {
        return Err(bad_request(&format!(
            "unknown glosser \"{}\" (available: {})",
            request.glosser,
            state.glossers.names().join(", ")
        )));
    }

    let task_id = uuid::Uuid::new_v4().to_string();
    state.tasks.insert(&task_id, "queued");
    tracing::info!(task_id = %task_id, glosser = %request.glosser, "conversion submitted");

    tokio::spawn(run_conversion(state.clone(), task_id.clone(), request));

    Ok(Json(ConvertResponse { task_id }))
}

/// `GET /api/status/:task_id` — poll a conversion task.
///
/// Unknown ids yield `{"status": "not_found"}` rather than a 404, so
/// pollers can treat the body uniformly.
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Json<TaskStatus> {
    Json(state.tasks.status(&task_id))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// The background worker for one conversion.
async fn run_conversion(state: Arc<AppState>, task_id: String, request: ConvertRequest) {
    if let Err(e) = try_conversion(&state, &task_id, request).await {
        tracing::warn!(task_id = %task_id, error = %e, "conversion failed");
        state.tasks.fail(&task_id, e.to_string());
    }
}

async fn try_conversion(
    state: &Arc<AppState>,
    task_id: &str,
    request: ConvertRequest,
) -> Result<(), SignError> {
    let glosser = state.glossers.get(&request.glosser)?;

    state.tasks.set_step(task_id, "translating text to glosses");
    let sentences = glosser.text_to_gloss(&request.text, &request.spoken_language)?;
    if sentences.is_empty() {
        return Err(SignError::EmptyInput {
            message: "no glosses produced from the input text".to_string(),
        });
    }

    state.tasks.set_step(task_id, "resolving glosses to poses");
    let resolver = Arc::clone(&state.resolver);
    let pose_path = state.poses_dir.join(format!("{task_id}.pose.json"));
    let clip = {
        let pose_path = pose_path.clone();
        let spoken = request.spoken_language.clone();
        let signed = request.signed_language.clone();
        // The resolution core is synchronous and does blocking file
        // I/O; keep it off the async runtime.
        tokio::task::spawn_blocking(move || {
            let clip = resolver.resolve(&sentences, &spoken, &signed)?;
            write_clip(&clip, &pose_path)?;
            Ok::<_, SignError>(clip)
        })
        .await
        .map_err(|e| SignError::Internal {
            message: format!("resolution task failed: {e}"),
        })??
    };

    let Some(render_config) = state.render.clone() else {
        state.tasks.complete(task_id, pose_path.display().to_string());
        return Ok(());
    };

    state.tasks.set_step(task_id, "rendering video");
    let video_path = state.videos_dir.join(format!("{task_id}.mp4"));
    let frame_rate = clip.header.fps.round().max(1.0) as u32;
    {
        let pose_path = pose_path.clone();
        let video_path = video_path.clone();
        tokio::task::spawn_blocking(move || {
            render_video(&render_config, &pose_path, &video_path, frame_rate)
        })
        .await
        .map_err(|e| SignError::Internal {
            message: format!("render task failed: {e}"),
        })??;
    }

    state.tasks.complete(task_id, video_path.display().to_string());
    Ok(())
}
