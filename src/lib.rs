//! Anchored-element placement computation with viewport-aware auto-flip.
//!
//! Computes screen coordinates for positioning a floating element (a
//! tooltip, popover, or suggestion dropdown) relative to a host element.
//! Pure geometry — layout state is read through injectable traits, no live
//! document required, `no_std` compatible.
//!
//! # Modules
//!
//! - [`measure`] — element geometry, offset-parent walk, `offset`/`position`
//! - [`viewport`] — window size/scroll capability probes, viewport bounds
//! - [`placement`] — placement-spec parsing, auto-flip, coordinate resolution

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod measure;
#[cfg(feature = "alloc")]
pub mod placement;
#[cfg(feature = "svg")]
pub mod svg;
pub mod viewport;

// Re-exports: core types and operations
pub use measure::{ClientRect, CssPosition, Element, Point, Rect, Size, offset, position};
#[cfg(feature = "alloc")]
pub use placement::{
    Align, ParseWarning, ParsedSpec, Resolved, Side, parse_placement, position_target,
};
pub use viewport::{
    CompatMode, SCROLLBAR_MARGIN, Viewport, WindowBounds, scroll_offsets, window_bounds,
    window_size,
};
