//! SVG diagram of a composition plan.
//!
//! Draws the frame with each planned command as an outline: background
//! regions (diagonal clip polygons included), the split border, logo boxes
//! labelled by entity, and the frame border. Useful for checking a layout
//! without rendering pixels.
//!
//! # Example
//!
//! ```
//! use zensplit::{AssetSizes, Composition, Offsets, Pair, Size, compose, svg::render_plan_svg};
//!
//! let composition = Composition::new(Size::new(1232, 706));
//! let sizes = AssetSizes {
//!     backgrounds: Pair::splat(Some(Size::new(1920, 1080))),
//!     logos: Pair::splat(Some(Size::new(300, 100))),
//! };
//! let plan = compose::plan(&composition, &sizes, &Offsets::default());
//!
//! let svg = render_plan_svg(&composition, &plan);
//! assert!(svg.starts_with("<svg"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::compose::{Command, Composition, Plan};
use crate::entity::Entity;
use crate::geom::{Point, Rect};
use crate::split::SplitStyle;

/// Maximum pixel width of the frame panel.
const MAX_PANEL_W: f64 = 600.0;
/// Maximum pixel height of the frame panel.
const MAX_PANEL_H: f64 = 400.0;
/// Margin around the panel.
const MARGIN: f64 = 30.0;
/// Height of the title above the panel.
const LABEL_H: f64 = 22.0;
/// Height reserved below the panel for the summary line.
const FOOTER_H: f64 = 24.0;

/// Render a complete SVG document for `plan`.
pub fn render_plan_svg(composition: &Composition, plan: &Plan) -> String {
    let frame = plan.frame;
    let (pw, ph, scale) = scale_to_fit(frame.width as f64, frame.height as f64);
    let total_w = pw + 2.0 * MARGIN;
    let total_h = MARGIN + LABEL_H + ph + FOOTER_H + MARGIN;
    let ox = MARGIN;
    let oy = MARGIN + LABEL_H;
    let to_panel = |p: Point| (ox + p.x * scale, oy + p.y * scale);
    let rect = |r: Rect| (ox + r.x * scale, oy + r.y * scale, r.width * scale, r.height * scale);

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .game1 { fill: #6ba3d6; fill-opacity: 0.55; stroke: #2c6faa; stroke-width: 1; }
  .game2 { fill: #d6936b; fill-opacity: 0.55; stroke: #aa5a2c; stroke-width: 1; }
  .logo { fill: none; stroke-width: 2; stroke-dasharray: 5,3; }
  .border { fill: #fff; stroke: #333; stroke-width: 0.5; }
  .seam { stroke: #333; stroke-linecap: butt; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .frame { fill: #2d2d2d; stroke: #555; }
    .border { fill: #ccc; stroke: #eee; }
    .seam { stroke: #eee; }
  }
</style>
"##);

    svg.push_str(&format!(
        r#"<defs><clipPath id="frame-clip"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"/></clipPath></defs>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&title(composition))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="frame"/>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    svg.push_str(r#"<g clip-path="url(#frame-clip)">"#);
    svg.push('\n');
    for command in &plan.commands {
        match command {
            Command::Clear => {}
            Command::DrawBackground {
                entity,
                projection,
                clip,
            } => match clip {
                Some(polygon) => {
                    let points: String = polygon
                        .iter()
                        .map(|&p| {
                            let (x, y) = to_panel(p);
                            format!("{x:.1},{y:.1} ")
                        })
                        .collect();
                    svg.push_str(&format!(
                        r#"<polygon points="{}" class="{}" fill-rule="nonzero"/>"#,
                        points.trim_end(),
                        entity.name()
                    ));
                }
                None => {
                    let (x, y, w, h) = rect(projection.dest);
                    svg.push_str(&format!(
                        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="{}"/>"#,
                        entity.name()
                    ));
                }
            },
            Command::DrawLogo { entity, dest, .. } => {
                let (x, y, w, h) = rect(*dest);
                svg.push_str(&format!(
                    r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="logo" stroke="{}"/>"#,
                    logo_stroke(*entity)
                ));
                svg.push('\n');
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{} logo</text>"#,
                    x + w / 2.0,
                    y + h / 2.0 + 4.0,
                    entity.name()
                ));
            }
            Command::FillRect { rect: r, .. } => {
                let (x, y, w, h) = rect(*r);
                svg.push_str(&format!(
                    r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="border"/>"#
                ));
            }
            Command::StrokeLine {
                from,
                to,
                width,
                ..
            } => {
                let (x1, y1) = to_panel(*from);
                let (x2, y2) = to_panel(*to);
                svg.push_str(&format!(
                    r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" class="seam" stroke-width="{:.2}"/>"#,
                    (width * scale).max(0.5)
                ));
            }
        }
        if !matches!(command, Command::Clear) {
            svg.push('\n');
        }
    }
    svg.push_str("</g>\n");

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        oy + ph + 16.0,
        escape_xml(&format!(
            "{} commands, {} logo{}",
            plan.commands.len(),
            logo_count(plan),
            if logo_count(plan) == 1 { "" } else { "s" }
        ))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

fn title(composition: &Composition) -> String {
    let frame = composition.frame;
    let split = &composition.split;
    let style = match split.style {
        SplitStyle::Horizontal => String::from("horizontal"),
        SplitStyle::Vertical => String::from("vertical"),
        SplitStyle::Diagonal => format!("diagonal {}°", split.angle_degrees),
    };
    let mut title = format!("Frame  {}×{}  {}", frame.width, frame.height, style);
    if split.swap_backgrounds {
        title.push_str("  swapped");
    }
    title
}

fn logo_count(plan: &Plan) -> usize {
    Entity::ALL
        .iter()
        .filter(|&&e| plan.logo_bounds.get(e).is_some())
        .count()
}

fn logo_stroke(entity: Entity) -> &'static str {
    match entity {
        Entity::Game1 => "#2c6faa",
        Entity::Game2 => "#aa5a2c",
    }
}

/// Scale a frame to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
