// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::application::session::DashboardSession;
use crate::infrastructure::analysis_api::AnalysisApiClient;
use crate::infrastructure::config::{load_dashboard_config, load_templates};
use crate::infrastructure::file_store::FileLayoutStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_slot, analyze_dataset, apply_shared_layout, chat, clear_dashboard, dataset_summary,
    delete_layout, get_dashboard, health_check, list_layouts, list_templates, load_layout,
    move_slot, retype_slot, save_layout, select_template, share_layout,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;
    let templates = load_templates();

    // Create adapters (infrastructure layer)
    let store = Arc::new(FileLayoutStore::new(&config.storage.dir));
    let gateway = Arc::new(AnalysisApiClient::new(config.backend.base_url.clone()));

    // Create the session (application layer)
    let session = DashboardSession::new(store, templates);

    // Create application state
    let state = Arc::new(AppState {
        session: Mutex::new(session),
        gateway,
        public_url: config.server.public_url.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/analyze", post(analyze_dataset))
        .route("/dashboard", get(get_dashboard).delete(clear_dashboard))
        .route("/templates", get(list_templates))
        .route("/dashboard/template", post(select_template))
        .route("/dashboard/slots", post(add_slot))
        .route("/dashboard/slots/move", post(move_slot))
        .route("/dashboard/slots/:index", put(retype_slot))
        .route("/layouts", get(list_layouts).post(save_layout))
        .route("/layouts/:id/load", post(load_layout))
        .route("/layouts/:id", delete(delete_layout))
        .route("/share", get(share_layout))
        .route("/share/apply", post(apply_shared_layout))
        .route("/summary", get(dataset_summary))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .listen
        .parse()
        .context("invalid server.listen address")?;
    tracing::info!("Starting insight-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
