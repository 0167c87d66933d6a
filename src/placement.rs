//! Placement-spec parsing and coordinate resolution.
//!
//! A placement spec is a token like `"top"`, `"bottom-left"`, or
//! `"left-top auto"`: a primary side, an optional alignment along the
//! perpendicular axis, and an optional `auto` modifier that flips the side
//! when the target would overflow the viewport.
//!
//! Parsing is permissive by contract: malformed specs never panic.
//! Unrecognized primary tokens fall through to the `top` formula,
//! unrecognized secondary tokens align center, and both surface as
//! [`ParseWarning`]s for callers that validate configuration.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::measure::{Element, Rect, Size, offset, position};
use crate::viewport::{Viewport, WindowBounds, window_bounds};

/// Primary placement side: where the target sits relative to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the host.
    Top,
    /// Below the host.
    Bottom,
    /// To the host's left.
    Left,
    /// To the host's right.
    Right,
}

impl Side {
    /// The opposite side, used by auto-flip.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The spec-string token for this side.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a primary token. Unrecognized tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Alignment along the axis perpendicular to the primary side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Target centered against the host.
    #[default]
    Center,
    /// Target flush with the host's near edge (top or left).
    Near,
    /// Target flush with the host's far edge (bottom or right).
    Far,
}

impl Align {
    /// Parse a secondary token. Unrecognized tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "center" => Some(Self::Center),
            "top" | "left" => Some(Self::Near),
            "bottom" | "right" => Some(Self::Far),
            _ => None,
        }
    }
}

/// Non-fatal diagnostic from placement-spec parsing.
///
/// Warnings never change the resolved coordinates; they exist so callers
/// can validate configuration up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseWarning {
    /// The primary token is not a known side; the `top` formula applies
    /// and auto-flip is disabled.
    PrimaryNotRecognized {
        /// The offending token, verbatim.
        token: String,
    },
    /// The secondary token is not a known alignment; center applies.
    SecondaryNotRecognized {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Typed parts of a placement spec.
///
/// Raw tokens are kept alongside the parsed values because the resolved
/// placement string echoes them verbatim — downstream CSS-class selection
/// depends on the exact text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedSpec {
    /// Parsed primary side. `None` for unrecognized tokens, which use the
    /// `top` formula but never flip.
    pub side: Option<Side>,
    /// Parsed secondary alignment.
    pub align: Align,
    /// Whether an `auto` modifier was present.
    pub auto: bool,
    /// Raw primary token.
    pub primary: String,
    /// Raw secondary token, if the spec had a hyphen part.
    pub secondary: Option<String>,
}

/// Resolved target coordinates plus the effective placement string.
///
/// `placement` echoes the input spec verbatim for fixed placements and the
/// normalized `<side>[-<align>] auto` form for auto placements; callers use
/// it to pick arrow-direction CSS classes.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// Target top coordinate, in the host measurement's coordinate space.
    pub top: f64,
    /// Target left coordinate, in the host measurement's coordinate space.
    pub left: f64,
    /// Effective placement string.
    pub placement: String,
}

impl Resolved {
    /// Snap the coordinates to whole CSS pixels.
    pub fn rounded(mut self) -> Self {
        self.top = self.top.round();
        self.left = self.left.round();
        self
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Locate the first standalone occurrence of `auto` (case-insensitive,
/// word-boundary delimited), widened by at most one whitespace character on
/// each side.
fn find_auto(spec: &str) -> Option<core::ops::Range<usize>> {
    for (i, _) in spec.char_indices() {
        let Some(window) = spec.get(i..i + 4) else {
            continue;
        };
        if !window.eq_ignore_ascii_case("auto") {
            continue;
        }
        let boundary_before = spec[..i].chars().next_back().is_none_or(|c| !is_word_char(c));
        let boundary_after = spec[i + 4..].chars().next().is_none_or(|c| !is_word_char(c));
        if !(boundary_before && boundary_after) {
            continue;
        }

        let mut start = i;
        if let Some(c) = spec[..i].chars().next_back() {
            if c.is_whitespace() {
                start -= c.len_utf8();
            }
        }
        let mut end = i + 4;
        if let Some(c) = spec[i + 4..].chars().next() {
            if c.is_whitespace() {
                end += c.len_utf8();
            }
        }
        return Some(start..end);
    }
    None
}

/// Strip the `auto` modifier, reporting whether one was present.
fn strip_auto(spec: &str) -> (Cow<'_, str>, bool) {
    match find_auto(spec) {
        Some(range) => {
            let mut stripped = String::with_capacity(spec.len());
            stripped.push_str(&spec[..range.start]);
            stripped.push_str(&spec[range.end..]);
            (Cow::Owned(stripped), true)
        }
        None => (Cow::Borrowed(spec), false),
    }
}

/// Parse a placement spec into typed parts plus diagnostics.
///
/// Never fails: unknown tokens degrade to the permissive defaults and are
/// reported as warnings.
///
/// # Example
///
/// ```
/// use anchorlay::placement::{Align, Side, parse_placement};
///
/// let (spec, warnings) = parse_placement("bottom-left auto");
/// assert_eq!(spec.side, Some(Side::Bottom));
/// assert_eq!(spec.align, Align::Near);
/// assert!(spec.auto);
/// assert!(warnings.is_empty());
/// ```
pub fn parse_placement(spec: &str) -> (ParsedSpec, Vec<ParseWarning>) {
    let mut warnings = Vec::new();

    let (stripped, auto) = strip_auto(spec);
    // Stripping `auto` out of a bare "auto" spec leaves nothing; the
    // primary then defaults to top.
    let stripped: &str = if auto && stripped.is_empty() {
        "top"
    } else {
        &stripped
    };

    let (primary, secondary) = match stripped.find('-') {
        Some(i) => (&stripped[..i], Some(&stripped[i + 1..])),
        None => (stripped, None),
    };

    let side = Side::parse(primary);
    if side.is_none() {
        warnings.push(ParseWarning::PrimaryNotRecognized {
            token: String::from(primary),
        });
    }

    let align = match secondary {
        None => Align::Center,
        Some(token) => Align::parse(token).unwrap_or_else(|| {
            warnings.push(ParseWarning::SecondaryNotRecognized {
                token: String::from(token),
            });
            Align::Center
        }),
    };

    (
        ParsedSpec {
            side,
            align,
            auto,
            primary: String::from(primary),
            secondary: secondary.map(String::from),
        },
        warnings,
    )
}

/// Horizontal coordinate for a target aligned against the host's width.
fn aligned_left(align: Align, host: &Rect, target: Size) -> f64 {
    match align {
        Align::Center => host.left + host.width / 2.0 - target.width / 2.0,
        Align::Near => host.left,
        Align::Far => host.left + host.width,
    }
}

/// Vertical coordinate for a target aligned against the host's height.
fn aligned_top(align: Align, host: &Rect, target: Size) -> f64 {
    match align {
        Align::Center => host.top + host.height / 2.0 - target.height / 2.0,
        Align::Near => host.top,
        Align::Far => host.top + host.height,
    }
}

/// Flip the side to its opposite when placing there would overflow the
/// matching viewport edge. Only the check for the current side runs.
fn flip_for_bounds(side: Side, host: &Rect, target: Size, bounds: WindowBounds) -> Side {
    let flip = match side {
        Side::Bottom => host.top + host.height + target.height > bounds.bottom,
        Side::Top => host.top - target.height < bounds.top,
        Side::Right => host.left + host.width + target.width > bounds.right,
        Side::Left => host.left - target.width < bounds.left,
    };
    if flip { side.opposite() } else { side }
}

/// Coordinate case table keyed on the (possibly flipped) primary side.
///
/// `None` — an unrecognized primary — shares the `top` formula.
fn place(side: Option<Side>, align: Align, host: &Rect, target: Size) -> (f64, f64) {
    match side {
        Some(Side::Right) => (aligned_top(align, host, target), host.left + host.width),
        Some(Side::Left) => (aligned_top(align, host, target), host.left - target.width),
        Some(Side::Bottom) => (host.top + host.height, aligned_left(align, host, target)),
        Some(Side::Top) | None => (host.top - target.height, aligned_left(align, host, target)),
    }
}

/// Rebuild the placement string after auto-flip.
///
/// The secondary token is echoed verbatim unless it is exactly `"center"`,
/// and `auto` always lands as the trailing token regardless of where it
/// appeared in the input.
fn auto_placement_string(side: Option<Side>, parsed: &ParsedSpec) -> String {
    let primary = match side {
        Some(side) => side.as_str(),
        None => parsed.primary.as_str(),
    };
    match parsed.secondary.as_deref() {
        Some(secondary) if secondary != "center" => format!("{primary}-{secondary} auto"),
        _ => format!("{primary} auto"),
    }
}

/// Compute coordinates for `target` placed against `host`.
///
/// The host is measured in absolute document coordinates when
/// `append_to_body` is set (the target will hang directly off the body) and
/// relative to its offset parent otherwise; the resolved coordinates are in
/// the same space. The target's natural size comes from its offset size, so
/// it must already be rendered, even if invisibly.
///
/// An empty spec returns the `{0, 0, ""}` sentinel — the caller must not
/// reposition. Parse warnings are deliberately swallowed here; use
/// [`parse_placement`] to inspect a spec.
pub fn position_target<E: Element + ?Sized>(
    viewport: &impl Viewport,
    host: &E,
    target: &E,
    spec: &str,
    append_to_body: bool,
) -> Resolved {
    if spec.is_empty() {
        return Resolved {
            top: 0.0,
            left: 0.0,
            placement: String::new(),
        };
    }

    let (parsed, _) = parse_placement(spec);

    let host_rect = if append_to_body {
        offset(viewport, host)
    } else {
        position(viewport, host)
    };
    let target_size = target.offset_size();

    let (side, placement) = if parsed.auto {
        let bounds = window_bounds(viewport);
        let side = parsed
            .side
            .map(|side| flip_for_bounds(side, &host_rect, target_size, bounds));
        (side, auto_placement_string(side, &parsed))
    } else {
        (parsed.side, String::from(spec))
    };

    let (top, left) = place(side, parsed.align, &host_rect, target_size);

    Resolved {
        top,
        left,
        placement,
    }
}
