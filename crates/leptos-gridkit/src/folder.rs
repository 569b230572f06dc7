//! Tray Folder Coordinator
//!
//! At most one tray overlay open per provider instance. Opening a key
//! implicitly closes any other; last write wins on the single shared key.

use leptos::prelude::*;

/// Plain open-key state, kept separate from the signal layer so the
/// exclusivity rules are testable without a reactive runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderState {
    open: Option<String>,
}

impl FolderState {
    pub fn is_open(&self, key: &str) -> bool {
        self.open.as_deref() == Some(key)
    }

    pub fn open(&mut self, key: &str) {
        self.open = Some(key.to_string());
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn toggle(&mut self, key: &str) {
        if self.is_open(key) {
            self.close();
        } else {
            self.open(key);
        }
    }
}

/// Signal-backed handle handed out via context. Scoped to the subtree that
/// needs the mutual exclusion; constructed on mount, discarded on unmount.
#[derive(Clone, Copy)]
pub struct TrayFolderManager {
    state: RwSignal<FolderState>,
}

impl TrayFolderManager {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FolderState::default()),
        }
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.state.with(|s| s.is_open(key))
    }

    pub fn open(&self, key: &str) {
        self.state.update(|s| s.open(key));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn toggle(&self, key: &str) {
        self.state.update(|s| s.toggle(key));
    }
}

impl Default for TrayFolderManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a manager and provides it to the current subtree.
pub fn provide_tray_folders() -> TrayFolderManager {
    let manager = TrayFolderManager::new();
    provide_context(manager);
    manager
}

/// Manager provided by an ancestor, if any. Cells fall back to static
/// rendering when no provider is in scope.
pub fn use_tray_folders() -> Option<TrayFolderManager> {
    use_context::<TrayFolderManager>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_key_closes_the_other() {
        let mut state = FolderState::default();
        state.open("A");
        assert!(state.is_open("A"));

        state.open("B");
        assert!(!state.is_open("A"));
        assert!(state.is_open("B"));

        state.close();
        assert!(!state.is_open("A"));
        assert!(!state.is_open("B"));
    }

    #[test]
    fn test_toggle() {
        let mut state = FolderState::default();
        state.toggle("A");
        assert!(state.is_open("A"));
        state.toggle("A");
        assert!(!state.is_open("A"));

        state.toggle("A");
        state.toggle("B");
        assert!(state.is_open("B"));
        assert!(!state.is_open("A"));
    }
}
