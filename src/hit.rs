//! Pointer-to-entity mapping and drag handling.
//!
//! Pointer positions arrive in display coordinates (the frame may be shown
//! scaled). [`DisplayMapping`] converts them into frame space, [`hit_test`]
//! decides whether a point grabs a logo or a background and whose, and
//! [`apply_drag`] moves that entity's offset. [`DragSession`] ties the three
//! together for a pointer-down/move/up sequence.

use num_traits::Float;

use crate::entity::{Entity, Pair, Slot, resolve_assignment};
use crate::geom::{Point, Rect, Size};
use crate::logo::{LogoBounds, LogoOffset};
use crate::project::PanZoom;
use crate::split::{SplitConfig, SplitStyle};

/// How a displayed frame maps back to frame pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayMapping {
    /// Frame size in pixels.
    pub frame: Size,
    /// Where the frame is shown, in display units.
    pub display: Rect,
}

impl DisplayMapping {
    /// Mapping for a frame shown at `display`.
    pub const fn new(frame: Size, display: Rect) -> Self {
        Self { frame, display }
    }

    /// Mapping for a frame shown unscaled at the origin.
    pub fn identity(frame: Size) -> Self {
        Self::new(frame, frame.to_rect())
    }

    fn ratio(&self) -> (f64, f64) {
        let axis = |frame: u32, shown: f64| {
            if shown > 0.0 && shown.is_finite() {
                frame as f64 / shown
            } else {
                1.0
            }
        };
        (
            axis(self.frame.width, self.display.width),
            axis(self.frame.height, self.display.height),
        )
    }

    /// Display point to frame point.
    pub fn to_frame(&self, p: Point) -> Point {
        let (sx, sy) = self.ratio();
        Point::new((p.x - self.display.x) * sx, (p.y - self.display.y) * sy)
    }

    /// Display-space movement to frame-space movement.
    pub fn delta_to_frame(&self, d: Point) -> Point {
        let (sx, sy) = self.ratio();
        Point::new(d.x * sx, d.y * sy)
    }
}

/// What a drag moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    Logo,
    Background,
}

/// Result of classifying a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HitTarget {
    pub mode: DragMode,
    pub entity: Entity,
}

/// Classify a frame-space point.
///
/// Logo boxes win over backgrounds, `game1` before `game2`. Anything else
/// falls to the background whose split half contains the point. The diagonal
/// half is decided by `x/W + y/H < 1` whatever the configured angle. Points
/// outside the frame are classified by the same rules.
pub fn hit_test(point: Point, frame: Size, bounds: &LogoBounds, split: &SplitConfig) -> HitTarget {
    for entity in Entity::ALL {
        if bounds.get(entity).is_some_and(|b| b.contains(point)) {
            log::trace!("hit {point:?} -> {entity} logo");
            return HitTarget {
                mode: DragMode::Logo,
                entity,
            };
        }
    }

    let rel_x = point.x / axis_len(frame.width);
    let rel_y = point.y / axis_len(frame.height);
    let first = match split.style {
        SplitStyle::Horizontal => rel_y < 0.5,
        SplitStyle::Vertical => rel_x < 0.5,
        SplitStyle::Diagonal => rel_x + rel_y < 1.0,
    };
    let slot = if first { Slot::First } else { Slot::Second };
    let entity = resolve_assignment(split.swap_backgrounds).at(slot);
    log::trace!("hit {point:?} -> {entity} background ({slot:?})");
    HitTarget {
        mode: DragMode::Background,
        entity,
    }
}

fn axis_len(len: u32) -> f64 {
    if len == 0 { 1.0 } else { len as f64 }
}

/// Per-entity state the engine reads and drags rewrite.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offsets {
    pub background: Pair<PanZoom>,
    pub logo: Pair<LogoOffset>,
}

/// Add a frame-space delta to the target's offset, 1:1.
pub fn apply_drag(target: HitTarget, delta: Point, mut offsets: Offsets) -> Offsets {
    match target.mode {
        DragMode::Background => {
            let pz = &mut offsets.background[target.entity];
            pz.x += delta.x;
            pz.y += delta.y;
        }
        DragMode::Logo => {
            let lo = &mut offsets.logo[target.entity];
            lo.x += delta.x;
            lo.y += delta.y;
        }
    }
    offsets
}

/// Classify a display point for cursor feedback, without starting a drag.
pub fn hover(
    mapping: &DisplayMapping,
    display_point: Point,
    bounds: &LogoBounds,
    split: &SplitConfig,
) -> HitTarget {
    let point = mapping.to_frame(display_point);
    hit_test(point, mapping.frame, bounds, split)
}

/// One pointer-down → move → up sequence.
///
/// Deltas are rounded to whole frame pixels. The anchor only advances when
/// the rounded delta is non-zero, so slow sub-pixel motion accumulates
/// instead of being lost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    mapping: DisplayMapping,
    target: HitTarget,
    anchor: Point,
    limit: Option<f64>,
}

impl DragSession {
    /// Start a drag at `display_point`, classifying it against `bounds`.
    pub fn begin(
        mapping: DisplayMapping,
        display_point: Point,
        bounds: &LogoBounds,
        split: &SplitConfig,
    ) -> Self {
        let target = hover(&mapping, display_point, bounds, split);
        log::debug!("drag begin {:?} on {}", target.mode, target.entity);
        Self {
            mapping,
            target,
            anchor: display_point,
            limit: None,
        }
    }

    /// Clamp resulting offsets to `[-limit, limit]` on each axis.
    ///
    /// A non-finite limit leaves the drag unclamped.
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit.is_finite().then(|| Float::abs(limit));
        self
    }

    /// What this drag moves.
    pub fn target(&self) -> HitTarget {
        self.target
    }

    /// Move the pointer to `display_point` and return the updated offsets.
    pub fn drag_to(&mut self, display_point: Point, offsets: Offsets) -> Offsets {
        let raw = self.mapping.delta_to_frame(Point::new(
            display_point.x - self.anchor.x,
            display_point.y - self.anchor.y,
        ));
        let delta = Point::new(Float::round(raw.x), Float::round(raw.y));
        if delta.x == 0.0 && delta.y == 0.0 {
            return offsets;
        }
        self.anchor = display_point;

        let mut moved = apply_drag(self.target, delta, offsets);
        if let Some(limit) = self.limit {
            let clamp = |v: f64| v.clamp(-limit, limit);
            match self.target.mode {
                DragMode::Background => {
                    let pz = &mut moved.background[self.target.entity];
                    pz.x = clamp(pz.x);
                    pz.y = clamp(pz.y);
                }
                DragMode::Logo => {
                    let lo = &mut moved.logo[self.target.entity];
                    lo.x = clamp(lo.x);
                    lo.y = clamp(lo.y);
                }
            }
        }
        moved
    }

    /// Finish the drag.
    pub fn end(self) -> HitTarget {
        log::debug!("drag end {:?} on {}", self.target.mode, self.target.entity);
        self.target
    }
}
