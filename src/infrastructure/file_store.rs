// File-backed layout store implementation
use crate::application::layout_store::LayoutStore;
use crate::domain::layout::Layout;
use crate::domain::saved_layout::SavedLayout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const CURRENT_LAYOUT_FILE: &str = "current-dashboard-layout.json";
const SAVED_LAYOUTS_FILE: &str = "saved-dashboard-layouts.json";

/// Stores layouts as JSON files under a local data directory. This is
/// client-local cache data: unreadable or corrupt content reads as absent,
/// and write failures are logged and swallowed.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    dir: PathBuf,
}

impl FileLayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.path(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read {}: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("discarding corrupt content in {}: {}", path.display(), err);
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            tracing::warn!("failed to create {}: {}", self.dir.display(), err);
            return;
        }

        let path = self.path(file);
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("failed to serialize {}: {}", path.display(), err);
                return;
            }
        };

        if let Err(err) = fs::write(&path, json) {
            tracing::warn!("failed to write {}: {}", path.display(), err);
        }
    }

    fn remove(&self, file: &str) {
        let path = self.path(file);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("failed to remove {}: {}", path.display(), err),
        }
    }

    #[cfg(test)]
    fn write_raw(&self, file: &str, contents: &str) {
        fs::create_dir_all(&self.dir).unwrap();
        fs::write(self.path(file), contents).unwrap();
    }
}

impl LayoutStore for FileLayoutStore {
    fn current_layout(&self) -> Option<Layout> {
        let layout: Layout = self.read_json(CURRENT_LAYOUT_FILE)?;
        if let Err(err) = layout.validate() {
            tracing::warn!("discarding invalid persisted layout: {}", err);
            return None;
        }
        Some(layout)
    }

    fn set_current_layout(&self, layout: &Layout) {
        self.write_json(CURRENT_LAYOUT_FILE, layout);
    }

    fn clear_current_layout(&self) {
        self.remove(CURRENT_LAYOUT_FILE);
    }

    fn saved_layouts(&self) -> Vec<SavedLayout> {
        self.read_json(SAVED_LAYOUTS_FILE).unwrap_or_default()
    }

    fn append_saved_layout(&self, saved: &SavedLayout) {
        let mut layouts = self.saved_layouts();
        layouts.push(saved.clone());
        self.write_json(SAVED_LAYOUTS_FILE, &layouts);
    }

    fn delete_saved_layout(&self, id: &str) {
        let mut layouts = self.saved_layouts();
        layouts.retain(|s| s.id != id);
        self.write_json(SAVED_LAYOUTS_FILE, &layouts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{Slot, SlotKind};

    fn store() -> (FileLayoutStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (FileLayoutStore::new(dir.path()), dir)
    }

    fn sample_layout() -> Layout {
        Layout::new(vec![
            Slot::new(SlotKind::Kpi, None, 12, 1),
            Slot::new(SlotKind::Chart, Some("pca".to_string()), 6, 2),
        ])
    }

    #[test]
    fn test_current_layout_round_trip() {
        let (store, _dir) = store();
        assert_eq!(store.current_layout(), None);

        let layout = sample_layout();
        store.set_current_layout(&layout);
        assert_eq!(store.current_layout(), Some(layout));
    }

    #[test]
    fn test_current_layout_corrupt_json_reads_as_absent() {
        let (store, _dir) = store();
        store.write_raw(CURRENT_LAYOUT_FILE, "{not json");
        assert_eq!(store.current_layout(), None);
    }

    #[test]
    fn test_current_layout_invalid_content_reads_as_absent() {
        let (store, _dir) = store();
        store.write_raw(
            CURRENT_LAYOUT_FILE,
            r#"[{"id": "a", "kind": "chart"}, {"id": "a", "kind": "chart"}]"#,
        );
        assert_eq!(store.current_layout(), None);
    }

    #[test]
    fn test_clear_current_layout_keeps_saved_list() {
        let (store, _dir) = store();
        store.set_current_layout(&sample_layout());
        store.append_saved_layout(&SavedLayout::new("View", sample_layout(), "compact"));

        store.clear_current_layout();
        assert_eq!(store.current_layout(), None);
        assert_eq!(store.saved_layouts().len(), 1);
    }

    #[test]
    fn test_append_allows_duplicate_names() {
        let (store, _dir) = store();
        store.append_saved_layout(&SavedLayout::new("Same", sample_layout(), "compact"));
        store.append_saved_layout(&SavedLayout::new("Same", sample_layout(), "compact"));

        let listed = store.saved_layouts();
        assert_eq!(listed.len(), 2);
        assert_ne!(listed[0].id, listed[1].id);
    }

    #[test]
    fn test_delete_saved_layout_by_id() {
        let (store, _dir) = store();
        let keep = SavedLayout::new("Keep", sample_layout(), "compact");
        let discard = SavedLayout::new("Discard", sample_layout(), "compact");
        store.append_saved_layout(&keep);
        store.append_saved_layout(&discard);

        store.delete_saved_layout(&discard.id);
        let listed = store.saved_layouts();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[test]
    fn test_corrupt_saved_list_reads_as_empty() {
        let (store, _dir) = store();
        store.write_raw(SAVED_LAYOUTS_FILE, r#"{"oops": true}"#);
        assert!(store.saved_layouts().is_empty());
    }
}
