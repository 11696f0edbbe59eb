//! The window registry: sole owner of open windows, their stacking order and focus.
//!
//! Every mutator is a silent no-op for ids that are not open and returns `true` only when state
//! actually changed. Callers use that flag as the change notification and re-read a fresh
//! snapshot afterwards.

use desktop_app_contract::AppManifest;

use crate::{
    model::{DesktopConfig, WindowId, WindowPatch, WindowRecord, WindowRect},
    window_manager::cascade_rect,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistry {
    config: DesktopConfig,
    /// Open windows in launch order; stacking is carried by `z_index`.
    windows: Vec<WindowRecord>,
    focused: Option<WindowId>,
    /// Last z value handed out. Only ever grows, so values are never reused.
    z_counter: u64,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::with_config(DesktopConfig::default())
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            config,
            windows: Vec::new(),
            focused: None,
            z_counter: 0,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Opens the app's window, or restores and focuses it when it is already open.
    pub fn open(&mut self, manifest: &AppManifest) -> WindowId {
        let window_id = WindowId::from(manifest.id.clone());
        if self.contains(&window_id) {
            self.restore(&window_id);
            return window_id;
        }

        let rect = cascade_rect(&self.config, manifest, self.windows.len());
        let z_index = self.next_z();
        self.windows.push(WindowRecord {
            id: window_id.clone(),
            title: manifest.name.clone(),
            icon_id: manifest.icon.clone(),
            rect,
            z_index,
            minimized: false,
            maximized: false,
        });
        self.focused = Some(window_id.clone());
        window_id
    }

    /// Removes a window. Focus is cleared when it was focused; no other window inherits it.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        if self.windows.len() == before {
            return false;
        }
        if self.focused.as_ref() == Some(window_id) {
            self.focused = None;
        }
        true
    }

    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        let changed = !window.minimized;
        window.minimized = true;
        if self.focused.as_ref() == Some(window_id) {
            self.focused = None;
            return true;
        }
        changed
    }

    /// Un-minimizes, raises and focuses a window.
    pub fn restore(&mut self, window_id: &WindowId) -> bool {
        self.focus(window_id)
    }

    /// Flips the maximized flag. Stored geometry, stacking and focus are left alone.
    pub fn toggle_maximize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.maximized = !window.maximized;
        true
    }

    /// Raises a window to a fresh top z value and focuses it, un-minimizing if needed.
    ///
    /// Focusing the topmost window still allocates a new value.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        if !self.contains(window_id) {
            return false;
        }
        let z_index = self.next_z();
        if let Some(window) = self.find_mut(window_id) {
            window.z_index = z_index;
            window.minimized = false;
        }
        self.focused = Some(window_id.clone());
        true
    }

    /// Sets the resting position. Positions are not clamped to the desktop.
    pub fn move_to(&mut self, window_id: &WindowId, x: i32, y: i32) -> bool {
        self.update(
            window_id,
            WindowPatch {
                x: Some(x),
                y: Some(y),
                ..WindowPatch::default()
            },
        )
    }

    /// Sets the size, clamped up to the configured minimums.
    pub fn resize(&mut self, window_id: &WindowId, width: i32, height: i32) -> bool {
        self.update(
            window_id,
            WindowPatch {
                w: Some(width),
                h: Some(height),
                ..WindowPatch::default()
            },
        )
    }

    /// Merges a partial geometry/flag update, applying the same minimum clamps as [`Self::resize`].
    pub fn update(&mut self, window_id: &WindowId, patch: WindowPatch) -> bool {
        let (min_w, min_h) = (self.config.min_window_width, self.config.min_window_height);
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        let before = window.clone();

        let rect = window.rect;
        window.rect = WindowRect {
            x: patch.x.unwrap_or(rect.x),
            y: patch.y.unwrap_or(rect.y),
            w: patch.w.unwrap_or(rect.w),
            h: patch.h.unwrap_or(rect.h),
        }
        .clamped_min(min_w, min_h);
        if let Some(maximized) = patch.maximized {
            window.maximized = maximized;
        }
        if let Some(minimized) = patch.minimized {
            window.minimized = minimized;
        }

        let changed = *window != before;
        let minimized = window.minimized;
        if minimized && self.focused.as_ref() == Some(window_id) {
            self.focused = None;
            return true;
        }
        changed
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.get(window_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn max_z(&self) -> u64 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Open windows in launch order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Owned copy of every open window, back to front.
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        let mut windows = self.windows.clone();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Non-minimized windows, back to front.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    fn next_z(&mut self) -> u64 {
        self.z_counter = self.z_counter.max(self.max_z()) + 1;
        self.z_counter
    }

    fn find_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn manifest(id: &str, size: Option<(i32, i32)>) -> AppManifest {
        let manifest = AppManifest::new(ApplicationId::trusted(id), id.to_uppercase(), id);
        match size {
            Some((w, h)) => manifest.with_default_size(w, h),
            None => manifest,
        }
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(ApplicationId::trusted(raw))
    }

    #[test]
    fn open_assigns_cascade_geometry_top_z_and_focus() {
        let mut registry = WindowRegistry::new();

        let terminal = registry.open(&manifest("terminal", Some((600, 400))));
        let notes = registry.open(&manifest("notes", Some((400, 500))));

        let first = registry.get(&terminal).expect("terminal open");
        let second = registry.get(&notes).expect("notes open");
        assert_eq!(first.rect, WindowRect::new(100, 100, 600, 400));
        assert_eq!(second.rect, WindowRect::new(130, 130, 400, 500));
        assert_eq!((first.z_index, second.z_index), (1, 2));
        assert_eq!(second.title, "NOTES");
        assert_eq!(registry.focused_window_id(), Some(&notes));
    }

    #[test]
    fn reopening_restores_minimized_window_without_duplicating() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));
        registry.open(&manifest("notes", None));
        registry.minimize(&terminal);

        let again = registry.open(&manifest("terminal", None));

        assert_eq!(again, terminal);
        assert_eq!(registry.len(), 2);
        let record = registry.get(&terminal).expect("terminal");
        assert!(!record.minimized);
        assert_eq!(record.z_index, 3);
        assert_eq!(registry.focused_window_id(), Some(&terminal));
    }

    #[test]
    fn minimize_only_clears_focus_for_the_focused_window() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));
        let notes = registry.open(&manifest("notes", None));

        assert!(registry.minimize(&terminal));
        assert_eq!(registry.focused_window_id(), Some(&notes));

        assert!(registry.minimize(&notes));
        assert_eq!(registry.focused_window_id(), None);
        assert!(!registry.minimize(&notes));
    }

    #[test]
    fn focus_always_allocates_a_fresh_value() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));

        registry.focus(&terminal);
        registry.focus(&terminal);

        assert_eq!(registry.get(&terminal).map(|w| w.z_index), Some(3));
    }

    #[test]
    fn z_values_are_not_reused_after_closing_the_top_window() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));
        let notes = registry.open(&manifest("notes", None));

        registry.close(&notes);
        registry.focus(&terminal);

        assert_eq!(registry.get(&terminal).map(|w| w.z_index), Some(3));
    }

    #[test]
    fn resize_and_update_clamp_to_minimums() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));

        assert!(registry.resize(&terminal, 10, 10));
        assert_eq!(
            registry.get(&terminal).map(|w| w.rect),
            Some(WindowRect::new(100, 100, 300, 200))
        );

        registry.update(&terminal, WindowPatch::rect(WindowRect::new(-50, 20, 250, 900)));
        assert_eq!(
            registry.get(&terminal).map(|w| w.rect),
            Some(WindowRect::new(-50, 20, 300, 900))
        );
    }

    #[test]
    fn move_is_not_clamped_to_the_desktop() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));

        registry.move_to(&terminal, -400, 5000);

        assert_eq!(
            registry.get(&terminal).map(|w| (w.rect.x, w.rect.y)),
            Some((-400, 5000))
        );
    }

    #[test]
    fn unknown_ids_are_ignored_everywhere() {
        let mut registry = WindowRegistry::new();
        registry.open(&manifest("terminal", None));
        let before = registry.clone();
        let ghost = id("ghost");

        assert!(!registry.close(&ghost));
        assert!(!registry.minimize(&ghost));
        assert!(!registry.restore(&ghost));
        assert!(!registry.toggle_maximize(&ghost));
        assert!(!registry.focus(&ghost));
        assert!(!registry.move_to(&ghost, 1, 1));
        assert!(!registry.resize(&ghost, 1, 1));
        assert!(!registry.update(&ghost, WindowPatch::default()));
        assert_eq!(registry, before);
    }

    #[test]
    fn update_with_minimized_flag_drops_focus() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));

        let changed = registry.update(
            &terminal,
            WindowPatch {
                minimized: Some(true),
                ..WindowPatch::default()
            },
        );

        assert!(changed);
        assert_eq!(registry.focused_window_id(), None);
        assert!(registry.visible_windows().is_empty());
    }

    #[test]
    fn snapshot_is_ordered_back_to_front() {
        let mut registry = WindowRegistry::new();
        let terminal = registry.open(&manifest("terminal", None));
        let notes = registry.open(&manifest("notes", None));
        registry.focus(&terminal);

        let order: Vec<WindowId> = registry.snapshot().into_iter().map(|w| w.id).collect();
        assert_eq!(order, vec![notes, terminal]);
    }
}
