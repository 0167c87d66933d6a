//! Window size, scroll offsets, and visible document bounds.
//!
//! Rendering engines expose window state through different properties, and
//! older engines lack the modern ones entirely. Each capability in
//! [`Viewport`] is an independent probe; resolution walks a fixed fallback
//! chain and takes the first hit, never a merge, so legacy-only branches
//! live in the trait implementation, not in the geometry.

use crate::measure::{Point, Size};

/// Document compatibility mode.
///
/// Selects which legacy element carries the client metrics when the modern
/// window probes are unavailable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompatMode {
    /// Standards mode ("CSS1Compat") — the root element carries client
    /// metrics.
    #[default]
    Standards,
    /// Quirks mode — the body carries client metrics.
    Quirks,
}

/// Read-only probes for window and document layout state.
///
/// The optional probes return `None` when the engine lacks the capability.
/// A modern engine implements [`inner_size`](Self::inner_size) and
/// [`page_offset`](Self::page_offset) and can stub the legacy probes with
/// zeros; they are only consulted when the modern probe fails.
pub trait Viewport {
    /// Window inner size, when the engine exposes it.
    fn inner_size(&self) -> Option<Size>;

    /// Page scroll offsets, when the engine exposes them.
    fn page_offset(&self) -> Option<Point>;

    /// Document compatibility mode.
    fn compat_mode(&self) -> CompatMode;

    /// Root-element client size (standards-mode fallback).
    fn root_client_size(&self) -> Size;

    /// Root-element scroll position (standards-mode fallback).
    fn root_scroll(&self) -> Point;

    /// Body client size (quirks-mode fallback).
    fn body_client_size(&self) -> Size;

    /// Body scroll position (quirks-mode fallback).
    fn body_scroll(&self) -> Point;
}

/// Margin reserved on the right viewport edge so placements clear a
/// scrollbar.
pub const SCROLLBAR_MARGIN: f64 = 20.0;

/// Visible window rectangle in absolute document coordinates.
///
/// The right bound is narrowed by [`SCROLLBAR_MARGIN`]; the other three
/// edges are exact.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WindowBounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Visible window size.
///
/// Prefers the window inner size; otherwise the root element's client size
/// in standards mode, the body's in quirks mode.
pub fn window_size(viewport: &impl Viewport) -> Size {
    if let Some(size) = viewport.inner_size() {
        return size;
    }
    match viewport.compat_mode() {
        CompatMode::Standards => viewport.root_client_size(),
        CompatMode::Quirks => viewport.body_client_size(),
    }
}

/// Current document scroll offsets.
///
/// Prefers the page offsets; otherwise the root element's scroll position
/// in standards mode, the body's in quirks mode.
pub fn scroll_offsets(viewport: &impl Viewport) -> Point {
    if let Some(offsets) = viewport.page_offset() {
        return offsets;
    }
    match viewport.compat_mode() {
        CompatMode::Standards => viewport.root_scroll(),
        CompatMode::Quirks => viewport.body_scroll(),
    }
}

/// Visible window rectangle in absolute document coordinates.
pub fn window_bounds(viewport: &impl Viewport) -> WindowBounds {
    let size = window_size(viewport);
    let scroll = scroll_offsets(viewport);

    WindowBounds {
        left: scroll.x,
        right: size.width + scroll.x - SCROLLBAR_MARGIN,
        top: scroll.y,
        bottom: size.height + scroll.y,
    }
}
