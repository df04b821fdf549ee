// Layout domain model
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Content type assigned to chart slots when no analysis data matches yet.
pub const PLACEHOLDER_CONTENT_TYPE: &str = "placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Kpi,
    Chart,
}

/// One chart-or-KPI position in the dashboard grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub kind: SlotKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default = "default_span")]
    pub width: u32,
    #[serde(default = "default_span")]
    pub height: u32,
}

fn default_span() -> u32 {
    1
}

impl Slot {
    /// Build a slot with a freshly generated unique id.
    pub fn new(kind: SlotKind, content_type: Option<String>, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content_type,
            width,
            height,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate slot id: {0}")]
    DuplicateSlotId(String),
    #[error("slot {id} has zero span ({width}x{height})")]
    ZeroSpan { id: String, width: u32, height: u32 },
}

/// Ordered sequence of slots. Order determines grid position (row-major fill).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    pub slots: Vec<Slot>,
}

impl Layout {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check the layout invariants: unique slot ids, spans of at least one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(ValidationError::DuplicateSlotId(slot.id.clone()));
            }
            if slot.width < 1 || slot.height < 1 {
                return Err(ValidationError::ZeroSpan {
                    id: slot.id.clone(),
                    width: slot.width,
                    height: slot.height,
                });
            }
        }
        Ok(())
    }
}
