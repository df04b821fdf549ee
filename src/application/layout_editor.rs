// Layout editor - Use cases for mutating the active dashboard layout
use crate::application::layout_store::LayoutStore;
use crate::domain::layout::{Layout, Slot, SlotKind, PLACEHOLDER_CONTENT_TYPE};
use crate::domain::saved_layout::SavedLayout;
use crate::domain::template::Template;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_CHART_WIDTH: u32 = 6;
pub const DEFAULT_CHART_HEIGHT: u32 = 2;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("layout name must not be empty")]
    EmptyLayoutName,
    #[error("slot index {index} out of range for layout of {len} slots")]
    SlotIndexOutOfRange { index: usize, len: usize },
}

/// The single writer of the store's current-layout entry. Every successful
/// mutation is persisted before the new layout is returned.
#[derive(Clone)]
pub struct LayoutEditor {
    store: Arc<dyn LayoutStore>,
}

impl LayoutEditor {
    pub fn new(store: Arc<dyn LayoutStore>) -> Self {
        Self { store }
    }

    /// Seed a fresh layout from a template, assigning content types to chart
    /// slots by cycling through the catalog in slot order. With an empty
    /// catalog every chart slot gets the placeholder sentinel. Every slot
    /// receives a fresh id.
    pub fn initialize_from_template(&self, template: &Template, catalog: &[String]) -> Layout {
        let slots = template
            .slots
            .iter()
            .enumerate()
            .map(|(index, proto)| {
                let content_type = match proto.kind {
                    SlotKind::Kpi => None,
                    SlotKind::Chart => {
                        if catalog.is_empty() {
                            Some(PLACEHOLDER_CONTENT_TYPE.to_string())
                        } else {
                            Some(catalog[index % catalog.len()].clone())
                        }
                    }
                };
                Slot::new(proto.kind, content_type, proto.width, proto.height)
            })
            .collect();

        let layout = Layout::new(slots);
        self.store.set_current_layout(&layout);
        layout
    }

    /// Move one slot: remove it at `drag_index`, reinsert at `hover_index`
    /// in the post-removal sequence. Equal indices are a no-op with no
    /// persistence write.
    pub fn move_slot(
        &self,
        layout: &Layout,
        drag_index: usize,
        hover_index: usize,
    ) -> Result<Layout, EditorError> {
        let len = layout.len();
        for index in [drag_index, hover_index] {
            if index >= len {
                return Err(EditorError::SlotIndexOutOfRange { index, len });
            }
        }
        if drag_index == hover_index {
            return Ok(layout.clone());
        }

        let mut slots = layout.slots.clone();
        let dragged = slots.remove(drag_index);
        slots.insert(hover_index, dragged);

        let moved = Layout::new(slots);
        self.store.set_current_layout(&moved);
        Ok(moved)
    }

    /// Append a new chart slot with the default span.
    pub fn add_slot(&self, layout: &Layout, content_type: &str) -> Layout {
        let mut slots = layout.slots.clone();
        slots.push(Slot::new(
            SlotKind::Chart,
            Some(content_type.to_string()),
            DEFAULT_CHART_WIDTH,
            DEFAULT_CHART_HEIGHT,
        ));

        let extended = Layout::new(slots);
        self.store.set_current_layout(&extended);
        extended
    }

    /// Replace the content type of the slot at `index`; id and position are
    /// unchanged.
    pub fn retype_slot(
        &self,
        layout: &Layout,
        index: usize,
        content_type: &str,
    ) -> Result<Layout, EditorError> {
        if index >= layout.len() {
            return Err(EditorError::SlotIndexOutOfRange {
                index,
                len: layout.len(),
            });
        }

        let mut slots = layout.slots.clone();
        slots[index].content_type = Some(content_type.to_string());

        let retyped = Layout::new(slots);
        self.store.set_current_layout(&retyped);
        Ok(retyped)
    }

    /// Snapshot the layout under a name. The active layout is not altered.
    pub fn save_named_layout(
        &self,
        layout: &Layout,
        name: &str,
        template_id: &str,
    ) -> Result<SavedLayout, EditorError> {
        if name.trim().is_empty() {
            return Err(EditorError::EmptyLayoutName);
        }

        let saved = SavedLayout::new(name, layout.clone(), template_id);
        self.store.append_saved_layout(&saved);
        Ok(saved)
    }

    /// Copy a snapshot's layout back into the active session by value.
    /// Subsequent edits to the returned layout never touch the snapshot.
    pub fn load_named_layout(&self, saved: &SavedLayout) -> Layout {
        self.replace_layout(&saved.layout)
    }

    /// Adopt an externally supplied layout (e.g. from a shared link) as the
    /// active one.
    pub fn replace_layout(&self, layout: &Layout) -> Layout {
        let adopted = layout.clone();
        self.store.set_current_layout(&adopted);
        adopted
    }
}
