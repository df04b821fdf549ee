// Dashboard template domain model
use crate::domain::layout::SlotKind;

/// Slot prototype inside a template. Content types are assigned at
/// initialization time, never stored here.
#[derive(Debug, Clone)]
pub struct TemplateSlot {
    pub kind: SlotKind,
    pub width: u32,
    pub height: u32,
}

impl TemplateSlot {
    pub fn new(kind: SlotKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            width,
            height,
        }
    }
}

/// A named, immutable prototype layout used to seed a new dashboard.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slots: Vec<TemplateSlot>,
}

impl Template {
    pub fn new(id: &str, name: &str, description: &str, slots: Vec<TemplateSlot>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            slots,
        }
    }
}

pub const DEFAULT_TEMPLATE_ID: &str = "analytical";

/// The fixed template set shipped with the dashboard.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "executive",
            "Executive View",
            "High-level KPIs and summary charts",
            vec![
                TemplateSlot::new(SlotKind::Kpi, 12, 1),
                TemplateSlot::new(SlotKind::Chart, 6, 2),
                TemplateSlot::new(SlotKind::Chart, 6, 2),
                TemplateSlot::new(SlotKind::Chart, 12, 2),
            ],
        ),
        Template::new(
            "analytical",
            "Analytical View",
            "Detailed analysis with multiple visualizations",
            vec![
                TemplateSlot::new(SlotKind::Kpi, 12, 1),
                TemplateSlot::new(SlotKind::Chart, 4, 2),
                TemplateSlot::new(SlotKind::Chart, 4, 2),
                TemplateSlot::new(SlotKind::Chart, 4, 2),
                TemplateSlot::new(SlotKind::Chart, 6, 2),
                TemplateSlot::new(SlotKind::Chart, 6, 2),
            ],
        ),
        Template::new(
            "compact",
            "Compact View",
            "Space-efficient layout for smaller screens",
            vec![
                TemplateSlot::new(SlotKind::Kpi, 12, 1),
                TemplateSlot::new(SlotKind::Chart, 12, 2),
                TemplateSlot::new(SlotKind::Chart, 12, 3),
            ],
        ),
    ]
}
