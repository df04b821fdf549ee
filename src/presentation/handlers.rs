// HTTP request handlers
use crate::application::catalog_resolver::{image_for, title_for};
use crate::application::layout_editor::EditorError;
use crate::application::session::{DashboardSession, SessionError};
use crate::domain::format::format_number;
use crate::domain::insights::{column_kpis, dataset_shape};
use crate::infrastructure::share_codec;
use crate::presentation::app_state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SelectTemplateRequest {
    pub template_id: String,
}

#[derive(Deserialize)]
pub struct MoveSlotRequest {
    pub drag_index: usize,
    pub hover_index: usize,
}

#[derive(Deserialize)]
pub struct AddSlotRequest {
    pub content_type: String,
}

#[derive(Deserialize)]
pub struct RetypeSlotRequest {
    pub content_type: String,
}

#[derive(Deserialize)]
pub struct SaveLayoutRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ApplySharedRequest {
    pub token: String,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn session_error_response(err: SessionError) -> Response {
    let status = match &err {
        SessionError::UnknownTemplate(_) | SessionError::UnknownSavedLayout(_) => {
            StatusCode::NOT_FOUND
        }
        SessionError::InvalidShareToken => StatusCode::BAD_REQUEST,
        SessionError::Editor(EditorError::EmptyLayoutName) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::Editor(EditorError::SlotIndexOutOfRange { .. }) => StatusCode::BAD_REQUEST,
    };
    error_response(status, err.to_string())
}

fn dashboard_view(session: &DashboardSession) -> serde_json::Value {
    // one card per slot, with the chart title and image resolved against the
    // analysis payload (placeholder slots resolve to no image)
    let cards: Vec<serde_json::Value> = session
        .layout()
        .slots
        .iter()
        .map(|slot| {
            let content = slot.content_type.as_deref();
            json!({
                "slot": slot,
                "title": content.map(title_for),
                "image": content.and_then(|ct| {
                    session.insights().and_then(|payload| image_for(payload, ct))
                }),
            })
        })
        .collect();

    json!({
        "template": session.template_id(),
        "layout": session.layout(),
        "cards": cards,
        "kpis": session.kpi_tiles(),
        "available_charts": session.catalog_entries(),
    })
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Upload a tabular file, forward it to the analysis backend, and lay out
/// the resulting dashboard.
pub async fn analyze_dataset(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => return error_response(StatusCode::BAD_REQUEST, "missing file field"),
            Err(err) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("invalid multipart body: {err}"),
                )
            }
        }
    };

    let file_name = field.file_name().unwrap_or("dataset.csv").to_string();
    let contents = match field.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            return error_response(StatusCode::BAD_REQUEST, format!("failed to read upload: {err}"))
        }
    };

    match state.gateway.analyze_file(&file_name, contents).await {
        Ok(payload) => {
            let mut session = state.session.lock().await;
            if let Err(err) = session.ingest_analysis(payload) {
                return session_error_response(err);
            }
            tracing::info!(
                "analyzed {} and laid out {} slots",
                file_name,
                session.layout().len()
            );
            Json(dashboard_view(&session)).into_response()
        }
        Err(err) => {
            tracing::error!("analysis of {} failed: {:#}", file_name, err);
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}

/// Current dashboard: layout, KPI tiles, and the add-a-chart catalog.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    Json(dashboard_view(&session)).into_response()
}

/// Drop the dataset and active layout. Saved layouts survive.
pub async fn clear_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let mut session = state.session.lock().await;
    session.clear_dashboard();
    StatusCode::NO_CONTENT.into_response()
}

/// Dataset overview: dimensions, column types, missing values, numeric stats.
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    let Some(insights) = session.insights() else {
        return error_response(StatusCode::NOT_FOUND, "no dataset analyzed yet");
    };

    let numeric_stats: Vec<serde_json::Value> = column_kpis(insights)
        .iter()
        .map(|kpi| {
            json!({
                "column": kpi.column,
                "mean": format_number(kpi.mean),
                "min": format_number(kpi.min),
                "max": format_number(kpi.max),
                "sum": format_number(kpi.sum),
            })
        })
        .collect();

    Json(json!({
        "shape": dataset_shape(insights),
        "dtypes": insights.get("dtypes"),
        "missing": insights.get("missing"),
        "numeric_stats": numeric_stats,
    }))
    .into_response()
}

/// List the available dashboard templates.
pub async fn list_templates(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    let templates: Vec<serde_json::Value> = session
        .templates()
        .iter()
        .map(|template| {
            json!({
                "id": template.id,
                "name": template.name,
                "description": template.description,
            })
        })
        .collect();
    Json(templates).into_response()
}

/// Re-seed the dashboard from a named template.
pub async fn select_template(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectTemplateRequest>,
) -> Response {
    let mut session = state.session.lock().await;
    match session.select_template(&request.template_id) {
        Ok(()) => Json(dashboard_view(&session)).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// Drag-and-drop reorder of one slot.
pub async fn move_slot(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveSlotRequest>,
) -> Response {
    let mut session = state.session.lock().await;
    match session.move_slot(request.drag_index, request.hover_index) {
        Ok(()) => Json(json!({ "layout": session.layout() })).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// Append a chart to the dashboard.
pub async fn add_slot(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddSlotRequest>,
) -> Response {
    let mut session = state.session.lock().await;
    session.add_chart(&request.content_type);
    Json(json!({ "layout": session.layout() })).into_response()
}

/// Swap the chart rendered in one slot.
pub async fn retype_slot(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(request): Json<RetypeSlotRequest>,
) -> Response {
    let mut session = state.session.lock().await;
    match session.retype_slot(index, &request.content_type) {
        Ok(()) => Json(json!({ "layout": session.layout() })).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// List saved layouts.
pub async fn list_layouts(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    Json(session.saved_layouts()).into_response()
}

/// Save the active layout under a name.
pub async fn save_layout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveLayoutRequest>,
) -> Response {
    let session = state.session.lock().await;
    match session.save_layout(&request.name) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// Load a saved layout into the active dashboard.
pub async fn load_layout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let mut session = state.session.lock().await;
    match session.load_layout(&id) {
        Ok(()) => Json(dashboard_view(&session)).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// Delete a saved layout.
pub async fn delete_layout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let session = state.session.lock().await;
    session.delete_layout(&id);
    StatusCode::NO_CONTENT.into_response()
}

/// Shareable link for the active layout.
pub async fn share_layout(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.lock().await;
    Json(json!({
        "token": session.share_token(),
        "url": share_codec::share_url(&state.public_url, session.layout()),
    }))
    .into_response()
}

/// Import a layout from a shared link token.
pub async fn apply_shared_layout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApplySharedRequest>,
) -> Response {
    let mut session = state.session.lock().await;
    match session.apply_shared(&request.token) {
        Ok(()) => Json(json!({ "layout": session.layout() })).into_response(),
        Err(err) => session_error_response(err),
    }
}

/// Ask the backend a question about the analyzed dataset.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let dataset_info = {
        let session = state.session.lock().await;
        session.insights().cloned()
    };
    let Some(dataset_info) = dataset_info else {
        return error_response(StatusCode::CONFLICT, "no dataset analyzed yet");
    };

    match state
        .gateway
        .send_chat_message(&request.message, &dataset_info)
        .await
    {
        Ok(response) => Json(json!({ "response": response })).into_response(),
        Err(err) => {
            tracing::error!("chat request failed: {:#}", err);
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}
