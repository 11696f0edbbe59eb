//! Drag and resize controllers.
//!
//! Gesture state is transient and keyed by window id: a session exists only between pointer-down
//! and pointer-up, each window owns at most one session, and sessions of different windows never
//! share a baseline. Every session also records the pointer that started it, so releasing one
//! finger ends only the gestures that finger owns. Controllers read the registry to capture
//! baselines and write back only through its public operations.

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    model::{PointerId, PointerPosition, ResizeEdge, WindowId, WindowPatch, WindowRect},
    registry::WindowRegistry,
    window_manager::{drag_rect, pointer_delta, resize_rect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a gesture could not start. These are logged by the runtime and never surfaced.
pub enum GestureRefusal {
    #[error("window `{0}` is not open")]
    UnknownWindow(WindowId),
    #[error("window `{0}` is minimized")]
    Minimized(WindowId),
    #[error("window `{0}` is maximized")]
    Maximized(WindowId),
    #[error("window `{0}` already has an active {1:?} gesture")]
    Busy(WindowId, GestureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub pointer_current: PointerPosition,
}

impl DragSession {
    /// Where the window is drawn while the drag is live. Not written to the registry.
    pub fn preview_rect(&self) -> WindowRect {
        drag_rect(self.rect_start, self.pointer_start, self.pointer_current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_id: PointerId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl GestureSession {
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Drag(_) => GestureKind::Drag,
            Self::Resize(_) => GestureKind::Resize,
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        match self {
            Self::Drag(session) => session.pointer_id,
            Self::Resize(session) => session.pointer_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    sessions: HashMap<WindowId, GestureSession>,
}

impl InteractionState {
    pub fn session(&self, window_id: &WindowId) -> Option<&GestureSession> {
        self.sessions.get(window_id)
    }

    pub fn gesture_kind(&self, window_id: &WindowId) -> Option<GestureKind> {
        self.session(window_id).map(GestureSession::kind)
    }

    /// Kind of the window's gesture, only when `pointer_id` is the pointer driving it.
    pub fn gesture_kind_for_pointer(
        &self,
        window_id: &WindowId,
        pointer_id: PointerId,
    ) -> Option<GestureKind> {
        self.session(window_id)
            .filter(|session| session.pointer_id() == pointer_id)
            .map(GestureSession::kind)
    }

    pub fn owns_pointer(&self, pointer_id: PointerId) -> bool {
        self.sessions
            .values()
            .any(|session| session.pointer_id() == pointer_id)
    }

    pub fn is_idle(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn active_windows(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Captures the drag baseline for a window.
    pub fn begin_drag(
        &mut self,
        registry: &WindowRegistry,
        window_id: &WindowId,
        pointer_id: PointerId,
        pointer: PointerPosition,
    ) -> Result<(), GestureRefusal> {
        let rect_start = self.gesture_baseline(registry, window_id)?;
        self.sessions.insert(
            window_id.clone(),
            GestureSession::Drag(DragSession {
                pointer_id,
                pointer_start: pointer,
                rect_start,
                pointer_current: pointer,
            }),
        );
        Ok(())
    }

    /// Tracks the pointer for a live drag and returns the preview rect.
    pub fn update_drag(
        &mut self,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> Option<WindowRect> {
        match self.sessions.get_mut(window_id) {
            Some(GestureSession::Drag(session)) => {
                session.pointer_current = pointer;
                Some(session.preview_rect())
            }
            _ => None,
        }
    }

    /// Ends a drag and commits `baseline + total offset` through a single registry move.
    pub fn end_drag(
        &mut self,
        registry: &mut WindowRegistry,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> bool {
        let Some(GestureSession::Drag(session)) = self.sessions.get(window_id).copied() else {
            return false;
        };
        self.sessions.remove(window_id);
        let target = drag_rect(session.rect_start, session.pointer_start, pointer);
        registry.move_to(window_id, target.x, target.y);
        true
    }

    /// Captures the resize baseline and starting pointer for one of the eight handles.
    pub fn begin_resize(
        &mut self,
        registry: &WindowRegistry,
        window_id: &WindowId,
        edge: ResizeEdge,
        pointer_id: PointerId,
        pointer: PointerPosition,
    ) -> Result<(), GestureRefusal> {
        let rect_start = self.gesture_baseline(registry, window_id)?;
        self.sessions.insert(
            window_id.clone(),
            GestureSession::Resize(ResizeSession {
                edge,
                pointer_id,
                pointer_start: pointer,
                rect_start,
            }),
        );
        Ok(())
    }

    /// Pushes live resize geometry through [`WindowRegistry::update`].
    ///
    /// Returns `true` when the registry changed.
    pub fn update_resize(
        &mut self,
        registry: &mut WindowRegistry,
        window_id: &WindowId,
        pointer: PointerPosition,
    ) -> bool {
        let Some(GestureSession::Resize(session)) = self.sessions.get(window_id).copied() else {
            return false;
        };
        let Some(window) = registry.get(window_id) else {
            return false;
        };
        if window.maximized {
            return false;
        }

        let (dx, dy) = pointer_delta(session.pointer_start, pointer);
        let config = registry.config();
        let next = resize_rect(
            session.rect_start,
            window.rect,
            session.edge,
            dx,
            dy,
            config.min_window_width,
            config.min_window_height,
        );
        registry.update(window_id, WindowPatch::rect(next))
    }

    /// Clears the active handle. Live updates were already authoritative, so nothing is committed.
    pub fn end_resize(&mut self, window_id: &WindowId) -> bool {
        if matches!(self.sessions.get(window_id), Some(GestureSession::Resize(_))) {
            self.sessions.remove(window_id);
            true
        } else {
            false
        }
    }

    /// Ends the sessions driven by `pointer_id` (released anywhere). Its drags commit at
    /// `pointer`; sessions owned by other pointers are untouched.
    ///
    /// Returns the ids whose sessions ended.
    pub fn end_pointer(
        &mut self,
        registry: &mut WindowRegistry,
        pointer_id: PointerId,
        pointer: PointerPosition,
    ) -> Vec<WindowId> {
        let ended: Vec<WindowId> = self
            .active_windows()
            .into_iter()
            .filter(|window_id| {
                self.session(window_id)
                    .is_some_and(|session| session.pointer_id() == pointer_id)
            })
            .collect();
        for window_id in &ended {
            match self.gesture_kind(window_id) {
                Some(GestureKind::Drag) => {
                    self.end_drag(registry, window_id, pointer);
                }
                Some(GestureKind::Resize) => {
                    self.end_resize(window_id);
                }
                None => {}
            }
        }
        ended
    }

    /// Drops a session without committing anything.
    pub fn cancel(&mut self, window_id: &WindowId) -> bool {
        self.sessions.remove(window_id).is_some()
    }

    fn gesture_baseline(
        &self,
        registry: &WindowRegistry,
        window_id: &WindowId,
    ) -> Result<WindowRect, GestureRefusal> {
        let window = registry
            .get(window_id)
            .ok_or_else(|| GestureRefusal::UnknownWindow(window_id.clone()))?;
        if let Some(active) = self.gesture_kind(window_id) {
            return Err(GestureRefusal::Busy(window_id.clone(), active));
        }
        if window.minimized {
            return Err(GestureRefusal::Minimized(window_id.clone()));
        }
        if window.maximized {
            return Err(GestureRefusal::Maximized(window_id.clone()));
        }
        Ok(window.rect)
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppManifest, ApplicationId};
    use pretty_assertions::assert_eq;

    use super::*;

    const MOUSE: PointerId = 1;
    const TOUCH: PointerId = 7;

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn open(registry: &mut WindowRegistry, raw: &str) -> WindowId {
        registry.open(&AppManifest::new(ApplicationId::trusted(raw), raw, raw))
    }

    fn rect_of(registry: &WindowRegistry, window_id: &WindowId) -> WindowRect {
        registry.get(window_id).expect("window open").rect
    }

    #[test]
    fn drag_previews_without_writing_and_commits_once_on_release() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let win = open(&mut registry, "terminal");

        interaction.begin_drag(&registry, &win, MOUSE, pointer(10, 10)).expect("drag starts");
        let preview = interaction.update_drag(&win, pointer(60, 35));

        assert_eq!(preview, Some(WindowRect::new(150, 125, 600, 400)));
        assert_eq!(rect_of(&registry, &win), WindowRect::new(100, 100, 600, 400));

        assert!(interaction.end_drag(&mut registry, &win, pointer(70, 40)));
        assert_eq!(rect_of(&registry, &win), WindowRect::new(160, 130, 600, 400));
        assert!(interaction.is_idle());
    }

    #[test]
    fn drag_refused_while_maximized_or_minimized() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let win = open(&mut registry, "terminal");

        registry.toggle_maximize(&win);
        assert_eq!(
            interaction.begin_drag(&registry, &win, MOUSE, pointer(0, 0)),
            Err(GestureRefusal::Maximized(win.clone()))
        );

        registry.toggle_maximize(&win);
        registry.minimize(&win);
        assert_eq!(
            interaction.begin_resize(&registry, &win, ResizeEdge::East, MOUSE, pointer(0, 0)),
            Err(GestureRefusal::Minimized(win.clone()))
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn a_window_holds_at_most_one_gesture() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let win = open(&mut registry, "terminal");

        interaction.begin_drag(&registry, &win, MOUSE, pointer(0, 0)).expect("drag");

        assert_eq!(
            interaction.begin_resize(&registry, &win, ResizeEdge::South, MOUSE, pointer(0, 0)),
            Err(GestureRefusal::Busy(win.clone(), GestureKind::Drag))
        );
        assert_eq!(interaction.gesture_kind(&win), Some(GestureKind::Drag));
    }

    #[test]
    fn resize_streams_updates_and_end_commits_nothing_extra() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let win = open(&mut registry, "terminal");

        interaction
            .begin_resize(&registry, &win, ResizeEdge::NorthWest, MOUSE, pointer(100, 100))
            .expect("resize");
        assert!(interaction.update_resize(&mut registry, &win, pointer(80, 90)));
        assert_eq!(rect_of(&registry, &win), WindowRect::new(80, 90, 620, 410));

        assert!(interaction.end_resize(&win));
        assert_eq!(rect_of(&registry, &win), WindowRect::new(80, 90, 620, 410));
        assert!(!interaction.update_resize(&mut registry, &win, pointer(0, 0)));
    }

    #[test]
    fn concurrent_sessions_keep_their_own_baselines() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let terminal = open(&mut registry, "terminal");
        let notes = open(&mut registry, "notes");

        interaction.begin_drag(&registry, &terminal, MOUSE, pointer(0, 0)).expect("drag");
        interaction
            .begin_resize(&registry, &notes, ResizeEdge::East, TOUCH, pointer(500, 500))
            .expect("resize");

        interaction.update_drag(&terminal, pointer(5, 5));
        interaction.update_resize(&mut registry, &notes, pointer(540, 500));

        assert_eq!(
            interaction.end_pointer(&mut registry, MOUSE, pointer(20, 30)),
            vec![terminal.clone()]
        );
        assert_eq!(
            interaction.end_pointer(&mut registry, TOUCH, pointer(0, 0)),
            vec![notes.clone()]
        );
        assert_eq!(rect_of(&registry, &terminal), WindowRect::new(120, 130, 600, 400));
        assert_eq!(rect_of(&registry, &notes), WindowRect::new(130, 130, 640, 400));
        assert!(interaction.is_idle());
    }

    #[test]
    fn releasing_one_finger_leaves_the_other_drag_running() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let terminal = open(&mut registry, "terminal");
        let notes = open(&mut registry, "notes");

        interaction.begin_drag(&registry, &terminal, MOUSE, pointer(150, 110)).expect("drag");
        interaction.begin_drag(&registry, &notes, TOUCH, pointer(600, 150)).expect("drag");
        interaction.update_drag(&terminal, pointer(160, 110));

        let ended = interaction.end_pointer(&mut registry, MOUSE, pointer(160, 110));

        assert_eq!(ended, vec![terminal.clone()]);
        assert_eq!(rect_of(&registry, &terminal), WindowRect::new(110, 100, 600, 400));
        assert_eq!(rect_of(&registry, &notes), WindowRect::new(130, 130, 600, 400));
        assert_eq!(interaction.gesture_kind(&notes), Some(GestureKind::Drag));
        assert_eq!(interaction.gesture_kind_for_pointer(&notes, MOUSE), None);
        assert_eq!(interaction.gesture_kind_for_pointer(&notes, TOUCH), Some(GestureKind::Drag));
        assert!(!interaction.owns_pointer(MOUSE));

        assert!(interaction.end_drag(&mut registry, &notes, pointer(620, 170)));
        assert_eq!(rect_of(&registry, &notes), WindowRect::new(150, 150, 600, 400));
    }

    #[test]
    fn cancel_drops_a_drag_without_moving() {
        let mut registry = WindowRegistry::new();
        let mut interaction = InteractionState::default();
        let win = open(&mut registry, "terminal");

        interaction.begin_drag(&registry, &win, MOUSE, pointer(0, 0)).expect("drag");
        interaction.update_drag(&win, pointer(90, 90));

        assert!(interaction.cancel(&win));
        assert!(!interaction.end_drag(&mut registry, &win, pointer(90, 90)));
        assert_eq!(rect_of(&registry, &win), WindowRect::new(100, 100, 600, 400));
    }
}
