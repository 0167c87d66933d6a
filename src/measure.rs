//! Element geometry: measured rectangles and the offset-parent walk.
//!
//! Mirrors the classical document measurement model: an element has a
//! viewport-relative bounding box, a layout ("offset") size, a computed or
//! inline `position` style, border and scroll origins, and a chain of
//! candidate offset parents. All of it is read through the [`Element`]
//! trait, so the same geometry runs against a real rendering engine or a
//! test fixture.

use crate::viewport::{Viewport, scroll_offsets};

/// A 2D point or offset pair in CSS pixels.
///
/// The origin is the top-left corner; positive x extends right, positive y
/// extends down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height dimensions in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport-relative bounding box, exactly as reported by the environment.
///
/// The width or height may be zero for collapsed elements (zero-border
/// inline nodes, undisplayed content); measurement falls back to the
/// element's offset size in that case.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    /// Create a new client rect.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// A measured element rectangle.
///
/// `top`/`left` are document-absolute when produced by [`offset`] and
/// offset-parent-relative when produced by [`position`]. Dimensions are
/// always non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Value of the CSS `position` property.
///
/// Any non-[`Static`](Self::Static) value makes an ancestor eligible as an
/// offset parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CssPosition {
    /// Normal flow; the element is skipped during the offset-parent walk.
    #[default]
    Static,
    /// Offset relative to its normal-flow position.
    Relative,
    /// Positioned against its containing block.
    Absolute,
    /// Positioned against the viewport.
    Fixed,
    /// Relative until a scroll threshold, then pinned.
    Sticky,
}

impl CssPosition {
    /// Whether this is the default, statically positioned value.
    pub fn is_static(self) -> bool {
        self == Self::Static
    }
}

/// Read-only layout probes for a single element.
///
/// Each style probe returns `None` when the engine lacks the capability;
/// resolution falls back in a fixed order and never fails.
pub trait Element {
    /// Viewport-relative bounding box.
    fn bounding_rect(&self) -> ClientRect;

    /// Layout size from the box tree (offset-width/offset-height).
    ///
    /// Used when the bounding box collapses to zero, and as the natural
    /// size of a rendered-but-invisible placement target.
    fn offset_size(&self) -> Size;

    /// Computed `position` property, when the engine can compute style.
    fn computed_position(&self) -> Option<CssPosition>;

    /// Inline `style` position, the fallback when computed style is
    /// unavailable.
    fn inline_position(&self) -> Option<CssPosition>;

    /// Border offsets (client-top/client-left).
    fn client_origin(&self) -> Point;

    /// Scroll position (scroll-top/scroll-left).
    fn scroll_origin(&self) -> Point;

    /// Next candidate offset parent, `None` once the chain reaches the
    /// document root.
    fn offset_parent(&self) -> Option<&Self>;
}

/// Resolve an element's effective `position` style.
///
/// Computed style wins, inline style is the fallback, and an element whose
/// engine offers neither reads as `Static`.
fn resolved_position<E: Element + ?Sized>(element: &E) -> CssPosition {
    element
        .computed_position()
        .or_else(|| element.inline_position())
        .unwrap_or_default()
}

fn is_static_positioned<E: Element + ?Sized>(element: &E) -> bool {
    resolved_position(element).is_static()
}

/// Bounding-box size with offset-size fallback for collapsed dimensions.
fn measured_size<E: Element + ?Sized>(element: &E) -> Size {
    let rect = element.bounding_rect();
    let fallback = element.offset_size();
    Size {
        width: if rect.width == 0.0 {
            fallback.width
        } else {
            rect.width
        },
        height: if rect.height == 0.0 {
            fallback.height
        } else {
            rect.height
        },
    }
}

/// Nearest ancestor in the offset-parent chain that is not statically
/// positioned. `None` means the walk reached the document root.
fn non_static_offset_parent<E: Element + ?Sized>(element: &E) -> Option<&E> {
    let mut parent = element.offset_parent();
    while let Some(candidate) = parent {
        if !is_static_positioned(candidate) {
            return Some(candidate);
        }
        parent = candidate.offset_parent();
    }
    None
}

/// Measure an element in absolute document coordinates.
///
/// Bounding-box top/left plus the document scroll offsets; dimensions fall
/// back to the offset size when the bounding box reports zero.
pub fn offset<E: Element + ?Sized>(viewport: &impl Viewport, element: &E) -> Rect {
    let rect = element.bounding_rect();
    let scroll = scroll_offsets(viewport);
    let size = measured_size(element);
    Rect {
        top: rect.top + scroll.y,
        left: rect.left + scroll.x,
        width: size.width,
        height: size.height,
    }
}

/// Measure an element relative to its nearest non-statically-positioned
/// ancestor.
///
/// When no such ancestor exists (the offset-parent chain ends at the
/// document root), the result equals [`offset`]. Otherwise the ancestor's
/// offset is adjusted by its border minus its scroll position before being
/// subtracted — the classical position API.
pub fn position<E: Element + ?Sized>(viewport: &impl Viewport, element: &E) -> Rect {
    let el_offset = offset(viewport, element);

    let (parent_top, parent_left) = match non_static_offset_parent(element) {
        Some(parent) => {
            let parent_offset = offset(viewport, parent);
            let border = parent.client_origin();
            let scroll = parent.scroll_origin();
            (
                parent_offset.top + border.y - scroll.y,
                parent_offset.left + border.x - scroll.x,
            )
        }
        None => (0.0, 0.0),
    };

    Rect {
        top: el_offset.top - parent_top,
        left: el_offset.left - parent_left,
        width: el_offset.width,
        height: el_offset.height,
    }
}
