// Saved layout snapshot domain model
use crate::domain::layout::Layout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, persisted snapshot of a layout. Immutable once created; loading
/// copies the layout back into the active session by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayout {
    pub id: String,
    pub name: String,
    pub layout: Layout,
    pub created_at: DateTime<Utc>,
    pub template_id: String,
}

impl SavedLayout {
    pub fn new(name: &str, layout: Layout, template_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            layout,
            created_at: Utc::now(),
            template_id: template_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{Slot, SlotKind};

    #[test]
    fn test_saved_layout_snapshots_by_value() {
        let layout = Layout::new(vec![Slot::new(SlotKind::Chart, None, 6, 2)]);
        let saved = SavedLayout::new("My View", layout.clone(), "analytical");

        assert_eq!(saved.layout, layout);
        assert_eq!(saved.name, "My View");
        assert_eq!(saved.template_id, "analytical");
        assert!(!saved.id.is_empty());
    }
}
