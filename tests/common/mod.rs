//! Shared fixture DOM: element chains with configurable style probes, plus
//! a configurable viewport.

#![allow(dead_code)]

use anchorlay::{ClientRect, CompatMode, CssPosition, Element, Point, Size, Viewport};

/// Fixture element owning its offset-parent chain.
pub struct FakeElement {
    rect: ClientRect,
    offset_size: Size,
    computed: Option<CssPosition>,
    inline: Option<CssPosition>,
    client_origin: Point,
    scroll_origin: Point,
    parent: Option<Box<FakeElement>>,
}

impl FakeElement {
    /// Element whose bounding box sits at `(top, left)` with the given
    /// size. Statically positioned, borderless, unscrolled, no parent.
    pub fn at(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            rect: ClientRect::new(top, left, width, height),
            offset_size: Size::new(width, height),
            computed: Some(CssPosition::Static),
            inline: None,
            client_origin: Point::ZERO,
            scroll_origin: Point::ZERO,
            parent: None,
        }
    }

    /// Set the computed `position` style.
    pub fn positioned(mut self, position: CssPosition) -> Self {
        self.computed = Some(position);
        self
    }

    /// Drop the computed-style probe (legacy engine).
    pub fn without_computed_style(mut self) -> Self {
        self.computed = None;
        self
    }

    /// Set the inline `position` style.
    pub fn inline_positioned(mut self, position: CssPosition) -> Self {
        self.inline = Some(position);
        self
    }

    /// Override the offset size independently of the bounding box.
    pub fn offset_sized(mut self, width: f64, height: f64) -> Self {
        self.offset_size = Size::new(width, height);
        self
    }

    /// Set border offsets (client-left, client-top).
    pub fn with_borders(mut self, left: f64, top: f64) -> Self {
        self.client_origin = Point::new(left, top);
        self
    }

    /// Set the element's own scroll position.
    pub fn scrolled_by(mut self, left: f64, top: f64) -> Self {
        self.scroll_origin = Point::new(left, top);
        self
    }

    /// Attach `parent` as the next candidate offset parent.
    pub fn child_of(mut self, parent: FakeElement) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl Element for FakeElement {
    fn bounding_rect(&self) -> ClientRect {
        self.rect
    }

    fn offset_size(&self) -> Size {
        self.offset_size
    }

    fn computed_position(&self) -> Option<CssPosition> {
        self.computed
    }

    fn inline_position(&self) -> Option<CssPosition> {
        self.inline
    }

    fn client_origin(&self) -> Point {
        self.client_origin
    }

    fn scroll_origin(&self) -> Point {
        self.scroll_origin
    }

    fn offset_parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

/// Fixture viewport; constructors pick the probe generation.
pub struct FakeViewport {
    inner: Option<Size>,
    page: Option<Point>,
    compat: CompatMode,
    root_client: Size,
    root_scroll: Point,
    body_client: Size,
    body_scroll: Point,
}

impl FakeViewport {
    /// Modern engine: 1024×768 inner size, unscrolled, standards mode.
    pub fn modern() -> Self {
        Self {
            inner: Some(Size::new(1024.0, 768.0)),
            page: Some(Point::ZERO),
            compat: CompatMode::Standards,
            root_client: Size::ZERO,
            root_scroll: Point::ZERO,
            body_client: Size::ZERO,
            body_scroll: Point::ZERO,
        }
    }

    /// Legacy standards-mode engine: no modern probes, root element
    /// carries the metrics.
    pub fn legacy_standards(client: Size, scroll: Point) -> Self {
        Self {
            inner: None,
            page: None,
            compat: CompatMode::Standards,
            root_client: client,
            root_scroll: scroll,
            body_client: Size::ZERO,
            body_scroll: Point::ZERO,
        }
    }

    /// Legacy quirks-mode engine: no modern probes, body carries the
    /// metrics.
    pub fn legacy_quirks(client: Size, scroll: Point) -> Self {
        Self {
            inner: None,
            page: None,
            compat: CompatMode::Quirks,
            root_client: Size::ZERO,
            root_scroll: Point::ZERO,
            body_client: client,
            body_scroll: scroll,
        }
    }

    /// Scroll the document (modern probe).
    pub fn scrolled_to(mut self, x: f64, y: f64) -> Self {
        self.page = Some(Point::new(x, y));
        self
    }
}

impl Viewport for FakeViewport {
    fn inner_size(&self) -> Option<Size> {
        self.inner
    }

    fn page_offset(&self) -> Option<Point> {
        self.page
    }

    fn compat_mode(&self) -> CompatMode {
        self.compat
    }

    fn root_client_size(&self) -> Size {
        self.root_client
    }

    fn root_scroll(&self) -> Point {
        self.root_scroll
    }

    fn body_client_size(&self) -> Size {
        self.body_client
    }

    fn body_scroll(&self) -> Point {
        self.body_scroll
    }
}
