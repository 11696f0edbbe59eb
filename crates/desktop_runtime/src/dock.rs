//! Dock model: pinned launchers plus indicators for running windows.

use desktop_app_contract::ApplicationId;

use crate::{apps, model::WindowId, registry::WindowRegistry};

/// Prefs key under which the pinned app list is stored.
pub const PINNED_APPS_PREF_KEY: &str = "browseros.dock.pinned.v1";

const DEFAULT_PINNED_APPS: [&str; 3] = ["terminal", "explorer", "browser"];

/// Pins used before any preference has been loaded.
pub fn default_pinned_apps() -> Vec<ApplicationId> {
    DEFAULT_PINNED_APPS
        .iter()
        .map(|raw| ApplicationId::trusted(*raw))
        .collect()
}

/// Pins `app_id` at the end of the list, or unpins it if already present.
///
/// Returns whether the app is pinned afterwards.
pub fn toggle_pin(pins: &mut Vec<ApplicationId>, app_id: &ApplicationId) -> bool {
    let before = pins.len();
    pins.retain(|pinned| pinned != app_id);
    if pins.len() < before {
        return false;
    }
    pins.push(app_id.clone());
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub app_id: ApplicationId,
    pub label: String,
    pub icon_id: String,
    pub pinned: bool,
    /// A window for this app is open (possibly minimized).
    pub running: bool,
    /// This app's window currently holds focus.
    pub active: bool,
}

/// Dock entries: pinned catalog apps in pin order, then running apps that are not pinned.
///
/// The dock does not list the whole catalog; the desktop icon grid does. Pins naming apps missing
/// from the catalog are kept in the preference but not shown.
pub fn dock_items(pins: &[ApplicationId], registry: &WindowRegistry) -> Vec<DockItem> {
    let focused = registry.focused_window_id();
    let item = |app_id: &ApplicationId, pinned: bool| {
        let descriptor = apps::app_descriptor(app_id)?;
        let window_id = WindowId::from(app_id.clone());
        Some(DockItem {
            app_id: app_id.clone(),
            label: descriptor.name.to_string(),
            icon_id: descriptor.icon_id.to_string(),
            pinned,
            running: registry.contains(&window_id),
            active: focused == Some(&window_id),
        })
    };

    let mut items: Vec<DockItem> = pins.iter().filter_map(|app_id| item(app_id, true)).collect();
    items.extend(
        registry
            .windows()
            .iter()
            .map(|window| window.id.app_id())
            .filter(|app_id| !pins.contains(app_id))
            .filter_map(|app_id| item(app_id, false)),
    );
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn open(registry: &mut WindowRegistry, raw: &str) -> WindowId {
        let manifest = apps::app_manifest(&id(raw)).expect("catalog app");
        registry.open(&manifest)
    }

    #[test]
    fn toggle_pin_appends_then_removes() {
        let mut pins = vec![id("terminal")];

        assert!(toggle_pin(&mut pins, &id("notes")));
        assert_eq!(pins, vec![id("terminal"), id("notes")]);

        assert!(!toggle_pin(&mut pins, &id("terminal")));
        assert_eq!(pins, vec![id("notes")]);
    }

    #[test]
    fn dock_lists_pins_then_running_unpinned_windows() {
        let mut registry = WindowRegistry::new();
        open(&mut registry, "terminal");
        open(&mut registry, "notes");

        let items = dock_items(&default_pinned_apps(), &registry);
        let summary: Vec<(&str, bool, bool, bool)> = items
            .iter()
            .map(|item| (item.app_id.as_str(), item.pinned, item.running, item.active))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("terminal", true, true, false),
                ("explorer", true, false, false),
                ("browser", true, false, false),
                ("notes", false, true, true),
            ]
        );
    }

    #[test]
    fn every_default_pin_is_shown_on_an_empty_desktop() {
        let items = dock_items(&default_pinned_apps(), &WindowRegistry::new());

        assert_eq!(items.len(), default_pinned_apps().len());
        assert!(items.iter().all(|item| item.pinned && !item.running));
    }

    #[test]
    fn minimized_window_is_running_but_not_active() {
        let mut registry = WindowRegistry::new();
        let terminal = open(&mut registry, "terminal");
        registry.minimize(&terminal);

        let items = dock_items(&[id("terminal")], &registry);

        assert_eq!(items.len(), 1);
        assert!(items[0].running);
        assert!(!items[0].active);
        assert_eq!(items[0].label, "Terminal");
    }
}
