//! Composition of registry + gesture state into the scene the shell renders.

use desktop_app_contract::AppViewport;

use crate::{
    gesture::{GestureKind, GestureSession, InteractionState},
    model::{ResizeEdge, WindowId, WindowRect},
    registry::WindowRegistry,
    window_manager::effective_rect,
};

/// Height of the title bar drawn above a window's client area.
pub const TITLE_BAR_HEIGHT_PX: i32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneWindow {
    pub id: WindowId,
    pub title: String,
    pub icon_id: String,
    /// Geometry to draw: the viewport when maximized, the live drag preview while dragging.
    pub rect: WindowRect,
    pub z_index: u64,
    pub focused: bool,
    pub maximized: bool,
    pub draggable: bool,
    pub resize_handles: Vec<ResizeEdge>,
    pub gesture: Option<GestureKind>,
    /// `false` while a gesture is live so embedded content (iframes) cannot swallow the pointer.
    pub content_interactive: bool,
}

impl SceneWindow {
    pub fn client_viewport(&self) -> AppViewport {
        AppViewport {
            width: self.rect.w,
            height: (self.rect.h - TITLE_BAR_HEIGHT_PX).max(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopScene {
    pub viewport: WindowRect,
    /// Visible windows, back to front.
    pub windows: Vec<SceneWindow>,
    pub focused: Option<WindowId>,
}

impl DesktopScene {
    pub fn window(&self, window_id: &WindowId) -> Option<&SceneWindow> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn topmost(&self) -> Option<&SceneWindow> {
        self.windows.last()
    }
}

pub fn compose_scene(
    registry: &WindowRegistry,
    interaction: &InteractionState,
    viewport: WindowRect,
) -> DesktopScene {
    let focused = registry.focused_window_id();
    let windows = registry
        .visible_windows()
        .into_iter()
        .map(|window| {
            let session = interaction.session(&window.id);
            let rect = match session {
                Some(GestureSession::Drag(drag)) if !window.maximized => drag.preview_rect(),
                _ => effective_rect(window, viewport),
            };
            let gesture = session.map(GestureSession::kind);
            SceneWindow {
                id: window.id.clone(),
                title: window.title.clone(),
                icon_id: window.icon_id.clone(),
                rect,
                z_index: window.z_index,
                focused: focused == Some(&window.id),
                maximized: window.maximized,
                draggable: !window.maximized && gesture != Some(GestureKind::Resize),
                resize_handles: if window.maximized {
                    Vec::new()
                } else {
                    ResizeEdge::ALL.to_vec()
                },
                gesture,
                content_interactive: gesture.is_none(),
            }
        })
        .collect();

    DesktopScene {
        viewport,
        windows,
        focused: focused.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppManifest, ApplicationId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::PointerPosition;

    const VIEWPORT: WindowRect = WindowRect::new(0, 0, 1280, 688);

    fn open(registry: &mut WindowRegistry, raw: &str) -> WindowId {
        registry.open(&AppManifest::new(ApplicationId::trusted(raw), raw, raw))
    }

    #[test]
    fn scene_lists_visible_windows_back_to_front() {
        let mut registry = WindowRegistry::new();
        let terminal = open(&mut registry, "terminal");
        let notes = open(&mut registry, "notes");
        let files = open(&mut registry, "explorer");
        registry.minimize(&notes);
        registry.focus(&terminal);

        let scene = compose_scene(&registry, &InteractionState::default(), VIEWPORT);

        let order: Vec<&WindowId> = scene.windows.iter().map(|w| &w.id).collect();
        assert_eq!(order, vec![&files, &terminal]);
        assert_eq!(scene.topmost().map(|w| w.focused), Some(true));
        assert_eq!(scene.focused, Some(terminal));
    }

    #[test]
    fn maximized_windows_fill_the_viewport_and_lose_affordances() {
        let mut registry = WindowRegistry::new();
        let terminal = open(&mut registry, "terminal");
        registry.toggle_maximize(&terminal);

        let scene = compose_scene(&registry, &InteractionState::default(), VIEWPORT);
        let window = scene.window(&terminal).expect("visible");

        assert_eq!(window.rect, VIEWPORT);
        assert!(!window.draggable);
        assert!(window.resize_handles.is_empty());
        assert_eq!(
            registry.get(&terminal).map(|w| w.rect),
            Some(WindowRect::new(100, 100, 600, 400))
        );
    }

    #[test]
    fn dragging_window_uses_preview_and_blocks_content_pointer() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let terminal = open(&mut registry, "terminal");
        interaction
            .begin_drag(&registry, &terminal, 1, PointerPosition { x: 0, y: 0 })
            .expect("drag");
        interaction.update_drag(&terminal, PointerPosition { x: 15, y: -5 });

        let scene = compose_scene(&registry, &interaction, VIEWPORT);
        let window = scene.window(&terminal).expect("visible");

        assert_eq!(window.rect, WindowRect::new(115, 95, 600, 400));
        assert_eq!(window.gesture, Some(GestureKind::Drag));
        assert!(!window.content_interactive);
        assert_eq!(
            window.client_viewport(),
            AppViewport {
                width: 600,
                height: 360
            }
        );
    }
}
