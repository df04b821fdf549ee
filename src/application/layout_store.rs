// Repository trait for layout persistence
use crate::domain::layout::Layout;
use crate::domain::saved_layout::SavedLayout;

/// Client-local storage for the active layout and named snapshots.
///
/// Storage is a cache, not a source of truth: read methods degrade to
/// no-data on absent or corrupt content, and write methods never raise —
/// implementations log failures and return.
pub trait LayoutStore: Send + Sync {
    /// The persisted active layout, or None if absent or unreadable.
    fn current_layout(&self) -> Option<Layout>;

    /// Overwrite the persisted active layout.
    fn set_current_layout(&self, layout: &Layout);

    /// Remove the active-layout entry only; saved layouts are untouched.
    fn clear_current_layout(&self);

    /// All saved layouts, oldest first. Empty if none exist or unreadable.
    fn saved_layouts(&self) -> Vec<SavedLayout>;

    /// Append a snapshot to the saved list. No de-duplication by name.
    fn append_saved_layout(&self, saved: &SavedLayout);

    /// Remove the snapshot with the given id, if present.
    fn delete_saved_layout(&self, id: &str);
}
