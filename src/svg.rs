//! SVG visualization of a resolved placement.
//!
//! Renders the viewport bounds, the host rect, and the resolved target rect
//! as a single annotated panel for visual debugging of placement math.
//!
//! # Example
//!
//! ```
//! use anchorlay::placement::Resolved;
//! use anchorlay::svg::render_placement_svg;
//! use anchorlay::{Rect, Size, WindowBounds};
//!
//! let host = Rect::new(100.0, 100.0, 50.0, 20.0);
//! let resolved = Resolved {
//!     top: 90.0,
//!     left: 110.0,
//!     placement: String::from("top"),
//! };
//! let bounds = WindowBounds {
//!     top: 0.0,
//!     right: 1004.0,
//!     bottom: 768.0,
//!     left: 0.0,
//! };
//!
//! let svg = render_placement_svg(&host, Size::new(30.0, 10.0), &resolved, &bounds);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::measure::{Rect, Size};
use crate::placement::Resolved;
use crate::viewport::WindowBounds;

/// Maximum pixel width of the rendered panel.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum pixel height of the rendered panel.
const MAX_PANEL_H: f64 = 300.0;
/// Margin around the panel.
const MARGIN: f64 = 40.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;

/// Render the placement scene as a complete SVG document.
///
/// The viewport bounds are drawn as a dashed frame, the host rect filled,
/// and the resolved target rect outlined, with the effective placement
/// string as the panel label.
pub fn render_placement_svg(
    host: &Rect,
    target: Size,
    resolved: &Resolved,
    bounds: &WindowBounds,
) -> String {
    // World-space bounding box over everything we draw.
    let min_x = bounds.left.min(host.left).min(resolved.left);
    let min_y = bounds.top.min(host.top).min(resolved.top);
    let max_x = bounds
        .right
        .max(host.left + host.width)
        .max(resolved.left + target.width);
    let max_y = bounds
        .bottom
        .max(host.top + host.height)
        .max(resolved.top + target.height);

    let world_w = (max_x - min_x).max(1.0);
    let world_h = (max_y - min_y).max(1.0);
    let scale = (MAX_PANEL_W / world_w).min(MAX_PANEL_H / world_h);

    let doc_w = world_w * scale + 2.0 * MARGIN;
    let doc_h = world_h * scale + 2.0 * MARGIN + LABEL_H;

    // World coordinates → panel coordinates.
    let px = |x: f64| (x - min_x) * scale + MARGIN;
    let py = |y: f64| (y - min_y) * scale + MARGIN + LABEL_H;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{doc_w:.0}\" height=\"{doc_h:.0}\" \
         viewBox=\"0 0 {doc_w:.0} {doc_h:.0}\">\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{MARGIN}\" y=\"{y:.1}\" font-family=\"monospace\" font-size=\"13\">\
         placement: {placement:?}</text>\n",
        y = LABEL_H,
        placement = resolved.placement,
    ));

    // Viewport bounds: dashed frame.
    svg.push_str(&rect_el(
        px(bounds.left),
        py(bounds.top),
        (bounds.right - bounds.left) * scale,
        (bounds.bottom - bounds.top) * scale,
        "fill=\"none\" stroke=\"#999\" stroke-dasharray=\"6 4\"",
    ));

    // Host: filled.
    svg.push_str(&rect_el(
        px(host.left),
        py(host.top),
        host.width * scale,
        host.height * scale,
        "fill=\"#cde\" stroke=\"#369\"",
    ));

    // Target at its resolved position: outlined.
    svg.push_str(&rect_el(
        px(resolved.left),
        py(resolved.top),
        target.width * scale,
        target.height * scale,
        "fill=\"none\" stroke=\"#c33\" stroke-width=\"2\"",
    ));

    svg.push_str(&format!(
        "  <text x=\"{x:.1}\" y=\"{y:.1}\" font-family=\"monospace\" font-size=\"11\" \
         fill=\"#c33\">({left:.1}, {top:.1})</text>\n",
        x = px(resolved.left),
        y = py(resolved.top) - 4.0,
        left = resolved.left,
        top = resolved.top,
    ));

    svg.push_str("</svg>\n");
    svg
}

fn rect_el(x: f64, y: f64, w: f64, h: f64, style: &str) -> String {
    format!("  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" {style}/>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_three_rects() {
        let host = Rect::new(100.0, 100.0, 50.0, 20.0);
        let resolved = Resolved {
            top: 90.0,
            left: 110.0,
            placement: String::from("top"),
        };
        let bounds = WindowBounds {
            top: 0.0,
            right: 1004.0,
            bottom: 768.0,
            left: 0.0,
        };

        let svg = render_placement_svg(&host, Size::new(30.0, 10.0), &resolved, &bounds);
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("placement: \"top\""));
        assert!(svg.ends_with("</svg>\n"));
    }
}
