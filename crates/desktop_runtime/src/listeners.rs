//! Scoped document-level pointer listeners for active gestures.
//!
//! Listeners are attached when a gesture starts and owned by a [`ListenerGuard`]; dropping the
//! guard detaches them. [`GestureListeners`] keeps one guard per window, so ending, cancelling or
//! closing a window's gesture always releases exactly that window's listeners.

use std::collections::HashMap;

use leptos::leptos_dom::helpers::WindowListenerHandle;

use crate::model::WindowId;

/// A registered event listener that can be removed.
pub trait ListenerHandle {
    fn detach(self);
}

impl ListenerHandle for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// Owns a set of listeners and detaches all of them on drop.
pub struct ListenerGuard<H: ListenerHandle> {
    handles: Vec<H>,
}

impl<H: ListenerHandle> ListenerGuard<H> {
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: ListenerHandle> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.detach();
        }
    }
}

impl<H: ListenerHandle> std::fmt::Debug for ListenerGuard<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("handles", &self.handles.len())
            .finish()
    }
}

/// Listener table backed by real browser window listeners.
pub type WindowGestureListeners = GestureListeners<WindowListenerHandle>;

/// Per-window table of live gesture listener guards.
pub struct GestureListeners<H: ListenerHandle> {
    active: HashMap<WindowId, ListenerGuard<H>>,
}

impl<H: ListenerHandle> Default for GestureListeners<H> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
        }
    }
}

impl<H: ListenerHandle> GestureListeners<H> {
    /// Stores `guard` for `window_id`, detaching any guard it replaces.
    pub fn attach(&mut self, window_id: WindowId, guard: ListenerGuard<H>) {
        self.active.insert(window_id, guard);
    }

    /// Detaches the listeners held for `window_id`.
    pub fn detach(&mut self, window_id: &WindowId) -> bool {
        self.active.remove(window_id).is_some()
    }

    pub fn detach_all(&mut self) {
        self.active.clear();
    }

    pub fn is_attached(&self, window_id: &WindowId) -> bool {
        self.active.contains_key(window_id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl<H: ListenerHandle> std::fmt::Debug for GestureListeners<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureListeners")
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct RecordingHandle {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ListenerHandle for RecordingHandle {
        fn detach(self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    fn guard(
        log: &Rc<RefCell<Vec<&'static str>>>,
        names: &[&'static str],
    ) -> ListenerGuard<RecordingHandle> {
        ListenerGuard::new(
            names
                .iter()
                .map(|&name| RecordingHandle {
                    name,
                    log: Rc::clone(log),
                })
                .collect(),
        )
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(ApplicationId::trusted(raw))
    }

    #[test]
    fn dropping_a_guard_detaches_every_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let moves = guard(&log, &["pointermove", "pointerup", "pointercancel"]);
        assert_eq!(moves.len(), 3);

        drop(moves);

        assert_eq!(*log.borrow(), vec!["pointermove", "pointerup", "pointercancel"]);
    }

    #[test]
    fn detach_releases_only_the_named_window() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = GestureListeners::default();
        listeners.attach(id("terminal"), guard(&log, &["terminal"]));
        listeners.attach(id("notes"), guard(&log, &["notes"]));

        assert!(listeners.detach(&id("terminal")));
        assert!(!listeners.detach(&id("terminal")));

        assert_eq!(*log.borrow(), vec!["terminal"]);
        assert!(listeners.is_attached(&id("notes")));
        assert_eq!(listeners.active_count(), 1);
    }

    #[test]
    fn reattaching_replaces_and_detaches_the_previous_guard() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = GestureListeners::default();
        listeners.attach(id("terminal"), guard(&log, &["first"]));
        listeners.attach(id("terminal"), guard(&log, &["second"]));

        assert_eq!(*log.borrow(), vec!["first"]);

        listeners.detach_all();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn many_gesture_cycles_leave_nothing_attached() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = GestureListeners::default();

        for _ in 0..50 {
            listeners.attach(id("terminal"), guard(&log, &["move", "up"]));
            listeners.detach(&id("terminal"));
        }

        assert_eq!(listeners.active_count(), 0);
        assert_eq!(log.borrow().len(), 100);
    }
}
