// Application state for HTTP handlers
use crate::application::analysis_gateway::AnalysisGateway;
use crate::application::session::DashboardSession;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState {
    pub session: Mutex<DashboardSession>,
    pub gateway: Arc<dyn AnalysisGateway>,
    pub public_url: String,
}
