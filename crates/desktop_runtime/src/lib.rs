//! Window management core for the browser desktop shell.
//!
//! The [`WindowRegistry`] owns every open window, its stacking order and focus; the gesture
//! controllers in [`gesture`] turn pointer input into registry updates; [`scene`] composes both
//! into what [`DesktopShell`] renders.

pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod gesture;
mod host;
pub mod listeners;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod scene;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use gesture::{GestureKind, GestureRefusal, InteractionState};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_pinned_apps, persist_pinned_apps, PersistenceError};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use registry::WindowRegistry;
pub use scene::{compose_scene, DesktopScene, SceneWindow};
