// Dashboard session - per-client state and the use cases over it
//
// Owns the active layout, the ingested analysis payload, and the selected
// template. All layout mutations route through the editor, which is the only
// writer of the store's current-layout entry.
use crate::application::catalog_resolver::{available_content_types, catalog_entries, CatalogEntry};
use crate::application::kpi_service::{kpi_tiles, KpiTile};
use crate::application::layout_editor::{EditorError, LayoutEditor};
use crate::application::layout_store::LayoutStore;
use crate::domain::insights::AnalysisPayload;
use crate::domain::layout::Layout;
use crate::domain::saved_layout::SavedLayout;
use crate::domain::template::{Template, DEFAULT_TEMPLATE_ID};
use crate::infrastructure::share_codec;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("unknown saved layout: {0}")]
    UnknownSavedLayout(String),
    #[error("share token could not be decoded")]
    InvalidShareToken,
    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub struct DashboardSession {
    editor: LayoutEditor,
    store: Arc<dyn LayoutStore>,
    templates: Vec<Template>,
    template_id: String,
    insights: Option<AnalysisPayload>,
    layout: Layout,
}

impl DashboardSession {
    pub fn new(store: Arc<dyn LayoutStore>, templates: Vec<Template>) -> Self {
        Self {
            editor: LayoutEditor::new(store.clone()),
            store,
            templates,
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            insights: None,
            layout: Layout::default(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn insights(&self) -> Option<&AnalysisPayload> {
        self.insights.as_ref()
    }

    pub fn kpi_tiles(&self) -> Vec<KpiTile> {
        self.insights.as_ref().map(kpi_tiles).unwrap_or_default()
    }

    pub fn catalog_entries(&self) -> Vec<CatalogEntry> {
        self.insights
            .as_ref()
            .map(catalog_entries)
            .unwrap_or_default()
    }

    pub fn available_content_types(&self) -> Vec<String> {
        self.insights
            .as_ref()
            .map(available_content_types)
            .unwrap_or_default()
    }

    fn template(&self, template_id: &str) -> Result<&Template, SessionError> {
        self.templates
            .iter()
            .find(|t| t.id == template_id)
            .ok_or_else(|| SessionError::UnknownTemplate(template_id.to_string()))
    }

    /// Take in a fresh analysis result. A persisted current layout is
    /// restored when one exists; otherwise the dashboard is seeded from the
    /// selected template with the payload's available chart types.
    pub fn ingest_analysis(&mut self, payload: AnalysisPayload) -> Result<(), SessionError> {
        self.insights = Some(payload);

        match self.store.current_layout() {
            Some(persisted) => {
                tracing::debug!("restored persisted layout with {} slots", persisted.len());
                self.layout = persisted;
            }
            None => {
                let template_id = self.template_id.clone();
                let template = self.template(&template_id)?.clone();
                let catalog = self.available_content_types();
                self.layout = self.editor.initialize_from_template(&template, &catalog);
            }
        }
        Ok(())
    }

    /// Re-seed the dashboard from a named template.
    pub fn select_template(&mut self, template_id: &str) -> Result<(), SessionError> {
        let template = self.template(template_id)?.clone();
        let catalog = self.available_content_types();
        self.layout = self.editor.initialize_from_template(&template, &catalog);
        self.template_id = template.id;
        Ok(())
    }

    pub fn move_slot(&mut self, drag_index: usize, hover_index: usize) -> Result<(), SessionError> {
        self.layout = self.editor.move_slot(&self.layout, drag_index, hover_index)?;
        Ok(())
    }

    pub fn add_chart(&mut self, content_type: &str) {
        self.layout = self.editor.add_slot(&self.layout, content_type);
    }

    pub fn retype_slot(&mut self, index: usize, content_type: &str) -> Result<(), SessionError> {
        self.layout = self.editor.retype_slot(&self.layout, index, content_type)?;
        Ok(())
    }

    pub fn save_layout(&self, name: &str) -> Result<SavedLayout, SessionError> {
        Ok(self
            .editor
            .save_named_layout(&self.layout, name, &self.template_id)?)
    }

    pub fn saved_layouts(&self) -> Vec<SavedLayout> {
        self.store.saved_layouts()
    }

    pub fn load_layout(&mut self, id: &str) -> Result<(), SessionError> {
        let saved = self
            .store
            .saved_layouts()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| SessionError::UnknownSavedLayout(id.to_string()))?;

        self.layout = self.editor.load_named_layout(&saved);
        self.template_id = saved.template_id;
        Ok(())
    }

    pub fn delete_layout(&self, id: &str) {
        self.store.delete_saved_layout(id);
    }

    pub fn share_token(&self) -> String {
        share_codec::encode_layout(&self.layout)
    }

    /// Import a layout from a shared link token.
    pub fn apply_shared(&mut self, token: &str) -> Result<(), SessionError> {
        let shared = share_codec::decode_layout(token).ok_or(SessionError::InvalidShareToken)?;
        self.layout = self.editor.replace_layout(&shared);
        Ok(())
    }

    /// Drop the dataset and active layout. Saved layouts are untouched.
    pub fn clear_dashboard(&mut self) {
        self.insights = None;
        self.layout = Layout::default();
        self.store.clear_current_layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::SlotKind;
    use crate::domain::template::builtin_templates;
    use crate::infrastructure::file_store::FileLayoutStore;
    use serde_json::json;

    fn session(dir: &std::path::Path) -> DashboardSession {
        let store = Arc::new(FileLayoutStore::new(dir));
        DashboardSession::new(store, builtin_templates())
    }

    fn sample_payload() -> AnalysisPayload {
        match json!({
            "shape": [100, 3],
            "correlation_heatmap": "x".repeat(1500),
            "region_pie": "y".repeat(1500),
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_ingest_seeds_from_template_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        session.ingest_analysis(sample_payload()).unwrap();
        assert_eq!(session.template_id(), DEFAULT_TEMPLATE_ID);
        assert_eq!(session.layout().len(), 6);

        let charts: Vec<&str> = session
            .layout()
            .slots
            .iter()
            .filter(|s| s.kind == SlotKind::Chart)
            .map(|s| s.content_type.as_deref().unwrap())
            .collect();
        // two available types cycled over five chart slots, offset by the
        // leading KPI slot
        assert_eq!(
            charts,
            vec![
                "region_pie",
                "correlation_heatmap",
                "region_pie",
                "correlation_heatmap",
                "region_pie"
            ]
        );

        // second session against the same storage restores the same layout
        let mut restored = DashboardSession::new(
            Arc::new(FileLayoutStore::new(dir.path())),
            builtin_templates(),
        );
        restored.ingest_analysis(sample_payload()).unwrap();
        assert_eq!(restored.layout(), session.layout());
    }

    #[test]
    fn test_select_template_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        assert!(matches!(
            session.select_template("galactic"),
            Err(SessionError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_share_round_trip_through_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.ingest_analysis(sample_payload()).unwrap();

        let token = session.share_token();
        let before = session.layout().clone();

        session.select_template("compact").unwrap();
        assert_ne!(session.layout(), &before);

        session.apply_shared(&token).unwrap();
        assert_eq!(session.layout(), &before);
    }

    #[test]
    fn test_save_load_delete_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.ingest_analysis(sample_payload()).unwrap();

        let saved = session.save_layout("My View").unwrap();
        session.select_template("executive").unwrap();

        session.load_layout(&saved.id).unwrap();
        assert_eq!(session.layout(), &saved.layout);
        assert_eq!(session.template_id(), saved.template_id);

        session.delete_layout(&saved.id);
        assert!(session.saved_layouts().is_empty());
        assert!(matches!(
            session.load_layout(&saved.id),
            Err(SessionError::UnknownSavedLayout(_))
        ));
    }

    #[test]
    fn test_clear_dashboard_keeps_saved_layouts() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.ingest_analysis(sample_payload()).unwrap();
        session.save_layout("Keep Me").unwrap();

        session.clear_dashboard();
        assert!(session.layout().is_empty());
        assert!(session.insights().is_none());
        assert_eq!(session.saved_layouts().len(), 1);
    }
}
