//! SVG visualization of a computed grid layout.
//!
//! Draws the container, the cell lattice, and every placed box labelled with
//! its packing index and span. Handy for eyeballing packing order and for
//! documentation.
//!
//! # Example
//!
//! ```
//! use zensquare::{GridConfig, GridItem, Span, svg::render_grid_svg};
//!
//! let items = [GridItem::new(0, Span::square(2)), GridItem::new(1, Span::UNIT)];
//! let layout = GridConfig::default().compute(&items, 800.0).unwrap();
//!
//! let svg = render_grid_svg(&layout, 800.0);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::layout::GridLayout;

/// Maximum drawing width; wider containers are scaled down.
const MAX_PANEL_W: f64 = 600.0;
/// Horizontal and bottom margin.
const MARGIN: f64 = 20.0;
/// Height of the caption above the container.
const LABEL_H: f64 = 26.0;

/// Render a complete SVG document for `layout` in a container
/// `container_width` pixels wide.
pub fn render_grid_svg<Id>(layout: &GridLayout<Id>, container_width: f64) -> String {
    let width = container_width.max(1.0);
    let height = layout.total_height.max(1.0);
    let scale = if width > MAX_PANEL_W {
        MAX_PANEL_W / width
    } else {
        1.0
    };
    let (pw, ph) = (width * scale, height * scale);
    let total_w = pw + 2.0 * MARGIN;
    let total_h = LABEL_H + ph + MARGIN;

    let mut svg = String::with_capacity(2048 + layout.boxes.len() * 256);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .box-label { font-size: 11px; fill: #fff; }
  .container { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .cell { fill: none; stroke: #ccc; stroke-width: 0.5; stroke-dasharray: 3,2; }
  .box { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .container { fill: #2d2d2d; stroke: #555; }
    .cell { stroke: #444; }
    .box { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let g = &layout.geometry;
    let caption = format!(
        "Grid  {}×{}  {} cols  cell {:.1}×{:.1}  space {:.1}",
        container_width as u32, layout.total_height as u32, layout.capacity, g.width, g.height, g.space
    );
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="17" class="label">{}</text>"#,
        MARGIN,
        escape_xml(&caption)
    ));
    svg.push('\n');

    let (ox, oy) = (MARGIN, LABEL_H);
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container"/>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    // Cell lattice
    let (cw, ch) = g.box_size(crate::span::Span::UNIT);
    for row in 0..layout.rows() {
        for col in 0..layout.capacity {
            let (x, y) = g.offset(col, row);
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="cell"/>"#,
                ox + x * scale,
                oy + y * scale,
                cw * scale,
                ch * scale
            ));
            svg.push('\n');
        }
    }

    for (i, placed) in layout.boxes.iter().enumerate() {
        let r = placed.rect;
        let (x, y) = (ox + r.x * scale, oy + r.y * scale);
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="box" rx="2"/>"#,
            x,
            y,
            r.width * scale,
            r.height * scale
        ));
        svg.push('\n');
        let label = format!("#{i} {}×{}", placed.cell.span.x, placed.cell.span.y);
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="box-label">{}</text>"#,
            x + 4.0,
            y + 14.0,
            escape_xml(&label)
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
