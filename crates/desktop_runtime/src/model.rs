use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

use crate::registry::WindowRegistry;

pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;

/// Window identity. The shell allows one window per app, so this is the launching app's id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(ApplicationId);

impl WindowId {
    pub fn app_id(&self) -> &ApplicationId {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ApplicationId> for WindowId {
    fn from(app_id: ApplicationId) -> Self {
        Self(app_id)
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Tunables for window placement and the desktop chrome that surrounds the window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub min_window_width: i32,
    pub min_window_height: i32,
    pub default_window_width: i32,
    pub default_window_height: i32,
    /// Top-left coordinate of the first opened window.
    pub cascade_origin: i32,
    /// Per-open-window offset applied to both axes.
    pub cascade_step: i32,
    pub top_bar_height_px: i32,
    pub dock_reserved_px: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_window_width: MIN_WINDOW_WIDTH,
            min_window_height: MIN_WINDOW_HEIGHT,
            default_window_width: DEFAULT_WINDOW_WIDTH,
            default_window_height: DEFAULT_WINDOW_HEIGHT,
            cascade_origin: 100,
            cascade_step: 30,
            top_bar_height_px: 32,
            dock_reserved_px: 80,
        }
    }
}

impl DesktopConfig {
    /// Window-layer rectangle for a screen of the given size; maximized windows fill it.
    pub fn desktop_viewport(&self, screen_w: i32, screen_h: i32) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: screen_w.max(0),
            h: (screen_h - self.top_bar_height_px - self.dock_reserved_px).max(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon_id: String,
    /// Resting geometry. Kept untouched while maximized so restoring is exact.
    pub rect: WindowRect,
    pub z_index: u64,
    pub minimized: bool,
    pub maximized: bool,
}

/// Partial update merged by [`WindowRegistry::update`]. `None` leaves a field as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub minimized: Option<bool>,
    pub maximized: Option<bool>,
}

impl WindowPatch {
    pub fn rect(rect: WindowRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
            ..Self::default()
        }
    }
}

/// Browser `pointerId` of the finger, pen or mouse driving a gesture.
pub type PointerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }
}

/// Everything the shell owns: the window registry plus dock preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub pinned_apps: Vec<ApplicationId>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            registry: WindowRegistry::default(),
            pinned_apps: crate::dock::default_pinned_apps(),
        }
    }
}

impl DesktopState {
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            registry: WindowRegistry::with_config(config),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: DesktopConfig =
            serde_json::from_str(r#"{"cascade_step":40,"dock_reserved_px":96}"#).expect("config");

        assert_eq!(config.cascade_step, 40);
        assert_eq!(config.dock_reserved_px, 96);
        assert_eq!(config.min_window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.cascade_origin, 100);
    }

    #[test]
    fn desktop_viewport_excludes_top_bar_and_dock() {
        let viewport = DesktopConfig::default().desktop_viewport(1280, 800);
        assert_eq!(viewport, WindowRect::new(0, 0, 1280, 688));
    }

    #[test]
    fn clamped_min_only_grows_undersized_rects() {
        assert_eq!(
            WindowRect::new(5, 5, 120, 90).clamped_min(300, 200),
            WindowRect::new(5, 5, 300, 200)
        );
        assert_eq!(
            WindowRect::new(5, 5, 640, 480).clamped_min(300, 200),
            WindowRect::new(5, 5, 640, 480)
        );
    }

    #[test]
    fn window_id_serializes_as_the_app_id() {
        let id = WindowId::from(ApplicationId::trusted("notes"));
        assert_eq!(serde_json::to_string(&id).expect("json"), "\"notes\"");
    }

    #[test]
    fn corner_edges_combine_two_axes() {
        assert!(ResizeEdge::NorthWest.moves_north() && ResizeEdge::NorthWest.moves_west());
        assert!(!ResizeEdge::NorthWest.moves_south() && !ResizeEdge::NorthWest.moves_east());
        assert_eq!(ResizeEdge::SouthEast.css_class(), "edge-se");
    }
}
