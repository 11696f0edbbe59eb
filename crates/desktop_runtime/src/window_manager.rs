//! Pure geometry helpers shared by the registry and the gesture controllers.

use desktop_app_contract::AppManifest;

use crate::model::{DesktopConfig, PointerPosition, ResizeEdge, WindowRecord, WindowRect};

/// Initial geometry for a newly opened window.
///
/// The size comes from the manifest (falling back to the configured default) and the position is
/// staggered by `open_count * cascade_step` on both axes. The stagger is never reset, so a long
/// open/close history can push new windows off-screen.
pub fn cascade_rect(
    config: &DesktopConfig,
    manifest: &AppManifest,
    open_count: usize,
) -> WindowRect {
    let stagger = i32::try_from(open_count)
        .unwrap_or(i32::MAX)
        .saturating_mul(config.cascade_step);
    let origin = config.cascade_origin.saturating_add(stagger);
    WindowRect {
        x: origin,
        y: origin,
        w: manifest.default_width.unwrap_or(config.default_window_width),
        h: manifest.default_height.unwrap_or(config.default_window_height),
    }
    .clamped_min(config.min_window_width, config.min_window_height)
}

/// Pointer delta between a gesture's start and the current pointer.
pub fn pointer_delta(start: PointerPosition, current: PointerPosition) -> (i32, i32) {
    (current.x - start.x, current.y - start.y)
}

/// Position of a dragged window: the baseline translated by the total pointer offset.
pub fn drag_rect(
    rect_start: WindowRect,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
) -> WindowRect {
    let (dx, dy) = pointer_delta(pointer_start, pointer);
    rect_start.offset(dx, dy)
}

/// Applies a resize delta for `edge` to the gesture baseline.
///
/// East/south edges grow from the baseline and clamp at the minimum. West/north edges move the
/// origin with the pointer and only accept the result while the size stays strictly above the
/// minimum; otherwise both origin and size keep their values from `current` so the window never
/// jumps away from the cursor.
pub fn resize_rect(
    rect_start: WindowRect,
    current: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let mut next = current;

    if edge.moves_east() {
        next.w = (rect_start.w + dx).max(min_w);
    }
    if edge.moves_west() {
        let width = rect_start.w - dx;
        if width > min_w {
            next.w = width;
            next.x = rect_start.x + dx;
        }
    }
    if edge.moves_south() {
        next.h = (rect_start.h + dy).max(min_h);
    }
    if edge.moves_north() {
        let height = rect_start.h - dy;
        if height > min_h {
            next.h = height;
            next.y = rect_start.y + dy;
        }
    }

    next
}

/// Geometry a window is drawn with: maximized windows fill the viewport, others use their rect.
pub fn effective_rect(window: &WindowRecord, viewport: WindowRect) -> WindowRect {
    if window.maximized {
        viewport
    } else {
        window.rect
    }
}
