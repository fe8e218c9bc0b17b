//! SVG visualization of a composite layout.
//!
//! Draws the container, the padded inner area, and every cell numbered by
//! index, under a caption naming the pattern and parameters.
//!
//! # Example
//!
//! ```
//! use composite_layout::{Composite, Pattern, svg::render_composite_svg};
//!
//! let composite = Composite::export(1080.0, 5, Some(Pattern::Grid2x3Alt));
//! let svg = render_composite_svg(&composite);
//! assert!(svg.starts_with("<svg"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::composite::Composite;

/// Side of the drawn container in SVG units.
const PANEL: f64 = 320.0;
/// Margin around the panel.
const MARGIN: f64 = 20.0;
/// Height of the caption area above the panel.
const CAPTION_H: f64 = 40.0;

/// Render a complete SVG document for `composite`.
pub fn render_composite_svg(composite: &Composite) -> String {
    let params = composite.params();
    let scale = if params.container > 0.0 {
        PANEL / params.container
    } else {
        1.0
    };
    let total_w = PANEL + 2.0 * MARGIN;
    let total_h = PANEL + 2.0 * MARGIN + CAPTION_H;
    let origin_x = MARGIN;
    let origin_y = MARGIN + CAPTION_H;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .cell { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .index { font-size: 12px; fill: #fff; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .container { fill: #2d2d2d; stroke: #555; }
    .inner { stroke: #666; }
    .cell { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##);

    let center_x = total_w / 2.0;
    let pattern = composite.pattern().map_or("<none>", |p| p.name());
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN + 4.0,
        escape_xml(&format!("{pattern}  ×{}", composite.total()))
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN + 22.0,
        escape_xml(&format!(
            "container {} padding {} gap {}",
            params.container, params.padding, params.gap
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container" rx="2"/>"#,
        origin_x, origin_y, PANEL, PANEL
    ));
    svg.push('\n');

    let inner = params.inner_rect();
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner"/>"#,
        origin_x + inner.left * scale,
        origin_y + inner.top * scale,
        inner.width * scale,
        inner.height * scale
    ));
    svg.push('\n');

    for (i, cell) in composite.cells().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let x = origin_x + cell.left * scale;
        let y = origin_y + cell.top * scale;
        let w = cell.width * scale;
        let h = cell.height * scale;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="cell" rx="1"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{i}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
