//! Split layout: two background regions and the separator between them.
//!
//! ```text
//!   Horizontal          Vertical            Diagonal (angle a)
//!   ┌──────────┐        ┌────┬─────┐        ┌──────────┐
//!   │  first   │        │    │     │        │ first  ╱ │
//!   ├━━━━━━━━━━┤        │ 1st┃ 2nd │        │      ╱   │
//!   │  second  │        │    │     │        │    ╱ 2nd │
//!   └──────────┘        └────┴─────┘        └──────────┘
//! ```
//!
//! Horizontal and vertical splits shrink each half by half the border width
//! and fill the gap with a bar. The diagonal split draws the first background
//! over the whole frame and the second one clipped to a polygon on the far
//! side of a seam through the frame center.

use num_traits::Float;

use crate::color::Color;
use crate::entity::{Assignment, Entity, Pair, Slot, resolve_assignment};
use crate::geom::{Point, Rect, Size};
use crate::project::{FitMode, PanZoom, Projection, project};
use crate::surface::ClipPolygon;

/// How the frame is divided between the two backgrounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitStyle {
    /// Top and bottom halves.
    Horizontal,
    /// Left and right halves.
    Vertical,
    /// Two sides of a line through the center at a configurable angle.
    #[default]
    Diagonal,
}

/// Split configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitConfig {
    pub style: SplitStyle,
    /// Seam angle in degrees, clockwise from the +x axis. Diagonal only.
    pub angle_degrees: f64,
    /// Separator thickness in frame pixels. `<= 0` draws no separator.
    pub border_width: f64,
    pub border_color: Color,
    /// Put `game2`'s background (and its pan/zoom) in the first region.
    pub swap_backgrounds: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            style: SplitStyle::Diagonal,
            angle_degrees: 45.0,
            border_width: 0.0,
            border_color: Color::WHITE,
            swap_backgrounds: false,
        }
    }
}

impl SplitConfig {
    /// Config for `style` with defaults for everything else.
    pub fn new(style: SplitStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the diagonal seam angle.
    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle_degrees = degrees;
        self
    }

    /// Set separator width and color.
    pub fn border(mut self, width: f64, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    /// Swap which entity's background goes first.
    pub fn swap_backgrounds(mut self, swap: bool) -> Self {
        self.swap_backgrounds = swap;
        self
    }
}

/// One background region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    pub slot: Slot,
    /// Entity whose background and pan/zoom fill this region.
    pub entity: Entity,
    /// Destination rectangle the background covers.
    pub region: Rect,
    /// Clip applied on top of `region` (diagonal second layer only).
    pub clip: Option<ClipPolygon>,
}

/// The separator drawn after both backgrounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Border {
    /// Filled bar along the midline (horizontal / vertical splits).
    Bar { rect: Rect, color: Color },
    /// Stroked seam line (diagonal split).
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
}

/// Resolved split geometry for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitLayout {
    pub assignment: Assignment,
    /// Layers in drawing order: first slot, then second.
    pub layers: [BackgroundLayer; 2],
    pub border: Option<Border>,
}

/// A background ready to blit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackgroundDraw {
    pub entity: Entity,
    pub projection: Projection,
    pub clip: Option<ClipPolygon>,
}

/// Compute regions, clip, and separator for `frame`.
pub fn split_layout(frame: Size, config: &SplitConfig) -> SplitLayout {
    let assignment = resolve_assignment(config.swap_backgrounds);
    let width = frame.width as f64;
    let height = frame.height as f64;
    let bw = config.border_width.max(0.0);
    let half_border = bw / 2.0;
    let draw_border = config.border_width > 0.0;

    let layer = |slot: Slot, region: Rect, clip: Option<ClipPolygon>| BackgroundLayer {
        slot,
        entity: assignment.at(slot),
        region,
        clip,
    };

    let (first, second, border) = match config.style {
        SplitStyle::Horizontal => {
            let half = height / 2.0;
            let region_h = half - half_border;
            let lower = Rect::new(0.0, half + half_border, width, region_h);
            (
                layer(Slot::First, Rect::new(0.0, 0.0, width, region_h), None),
                layer(Slot::Second, lower, None),
                draw_border.then(|| Border::Bar {
                    rect: Rect::new(0.0, half - half_border, width, bw),
                    color: config.border_color,
                }),
            )
        }
        SplitStyle::Vertical => {
            let half = width / 2.0;
            let region_w = half - half_border;
            let right = Rect::new(half + half_border, 0.0, region_w, height);
            (
                layer(Slot::First, Rect::new(0.0, 0.0, region_w, height), None),
                layer(Slot::Second, right, None),
                draw_border.then(|| Border::Bar {
                    rect: Rect::new(half - half_border, 0.0, bw, height),
                    color: config.border_color,
                }),
            )
        }
        SplitStyle::Diagonal => {
            let (from, to) = diagonal_seam(frame, config.angle_degrees);
            let clip = diagonal_clip(frame, config.angle_degrees);
            let full = frame.to_rect();
            (
                layer(Slot::First, full, None),
                layer(Slot::Second, full, Some(clip)),
                draw_border.then_some(Border::Line {
                    from,
                    to,
                    width: bw,
                    color: config.border_color,
                }),
            )
        }
    };

    SplitLayout {
        assignment,
        layers: [first, second],
        border,
    }
}

impl SplitLayout {
    /// Project each entity's background into its region.
    ///
    /// Image sizes and offsets are both looked up by the layer's entity.
    /// Missing or empty backgrounds and empty regions yield `None`.
    pub fn project(
        &self,
        backgrounds: &Pair<Option<Size>>,
        offsets: &Pair<PanZoom>,
    ) -> [Option<BackgroundDraw>; 2] {
        self.layers.map(|layer| {
            let Some(size) = backgrounds[layer.entity] else {
                log::debug!(
                    "no {} background; leaving {:?} region empty",
                    layer.entity,
                    layer.slot
                );
                return None;
            };
            let projection = project(size, layer.region, FitMode::Cover, &offsets[layer.entity])?;
            Some(BackgroundDraw {
                entity: layer.entity,
                projection,
                clip: layer.clip,
            })
        })
    }
}

/// Seam endpoints through the frame center at `angle_degrees`.
///
/// The half-length is half the frame diagonal, so both ends always reach
/// the frame edge whatever the angle.
pub fn diagonal_seam(frame: Size, angle_degrees: f64) -> (Point, Point) {
    let width = frame.width as f64;
    let height = frame.height as f64;
    let radians = Float::to_radians(angle_degrees);
    let radius = Float::hypot(width, height) / 2.0;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let (dx, dy) = (radius * Float::cos(radians), radius * Float::sin(radians));
    (Point::new(cx - dx, cy - dy), Point::new(cx + dx, cy + dy))
}

/// Clip polygon for the second diagonal background.
///
/// The seam plus two frame corners and two edge points chosen by the angle's
/// quadrant, closing over the side of the seam the second background shows
/// on.
pub fn diagonal_clip(frame: Size, angle_degrees: f64) -> ClipPolygon {
    let w = frame.width as f64;
    let h = frame.height as f64;
    let (start, end) = diagonal_seam(frame, angle_degrees);
    let tail = if angle_degrees <= 90.0 {
        [
            Point::new(w, end.y),
            Point::new(w, h),
            Point::new(0.0, h),
            Point::new(0.0, start.y),
        ]
    } else if angle_degrees <= 180.0 {
        [
            Point::new(end.x, h),
            Point::new(0.0, h),
            Point::new(0.0, 0.0),
            Point::new(start.x, 0.0),
        ]
    } else if angle_degrees <= 270.0 {
        [
            Point::new(0.0, end.y),
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, start.y),
        ]
    } else {
        [
            Point::new(end.x, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(start.x, h),
        ]
    };
    [start, end, tail[0], tail[1], tail[2], tail[3]]
}
