//! Logo sizing and placement.
//!
//! Logos are capped at 30% of the frame height, scaled per entity, and
//! placed either as a centered pair or relative to the split regions. Each
//! entity's placement offset is added last. The resulting boxes are returned
//! as [`LogoBounds`], keyed by entity, for hit-testing.

use num_traits::Float;

use crate::entity::{Entity, Pair, Slot, resolve_assignment};
use crate::geom::{Rect, Size};
use crate::split::SplitStyle;

/// Horizontal gap between logos in [`LogoPosition::Center`].
pub const LOGO_GAP: f64 = 20.0;

/// Logo height cap as a fraction of frame height.
pub const MAX_HEIGHT_FRACTION: f64 = 0.3;

/// Where the logos go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogoPosition {
    /// Side by side in the middle of the frame.
    Center,
    /// One logo over each split region.
    #[default]
    SplitRelative,
}

/// Logo configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogoConfig {
    pub position: LogoPosition,
    /// Put `game2`'s logo in the first position.
    pub swap_logos: bool,
    /// Per-entity scale multiplier. `<= 0` is treated as 1.
    pub scale: Pair<f64>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            position: LogoPosition::default(),
            swap_logos: false,
            scale: Pair::splat(1.0),
        }
    }
}

impl LogoConfig {
    /// Config for `position` with defaults for everything else.
    pub fn new(position: LogoPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Swap which entity's logo goes first.
    pub fn swap_logos(mut self, swap: bool) -> Self {
        self.swap_logos = swap;
        self
    }

    /// Set one entity's scale.
    pub fn scale(mut self, entity: Entity, scale: f64) -> Self {
        self.scale[entity] = scale;
        self
    }

    fn effective_scale(&self, entity: Entity) -> f64 {
        let s = self.scale[entity];
        if s > 0.0 && s.is_finite() { s } else { 1.0 }
    }
}

/// Pixel shift applied on top of a logo's computed position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LogoOffset {
    pub x: f64,
    pub y: f64,
}

impl LogoOffset {
    /// Create an offset.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logo size for a natural raster size, height cap, and scale.
///
/// A logo shorter than the cap keeps its natural height (times `scale`); it
/// is never stretched up to the cap. Returns `None` for zero-size rasters.
pub fn logo_size(natural: Size, max_height: f64, scale: f64) -> Option<(f64, f64)> {
    if natural.is_empty() {
        return None;
    }
    let aspect = natural.width as f64 / natural.height as f64;
    let height = max_height.min(natural.height as f64) * scale;
    Some((height * aspect, height))
}

/// Intermediate size for a two-pass downscale, if one is needed.
///
/// When the source exceeds twice the destination on either axis it is first
/// resampled to exactly twice the destination (truncated to whole pixels),
/// then drawn at the destination size.
pub fn intermediate_size(natural: Size, dest_width: f64, dest_height: f64) -> Option<Size> {
    let needs_two_pass =
        natural.width as f64 > dest_width * 2.0 || natural.height as f64 > dest_height * 2.0;
    needs_two_pass.then(|| {
        Size::new(
            Float::floor(dest_width * 2.0).max(1.0) as u32,
            Float::floor(dest_height * 2.0).max(1.0) as u32,
        )
    })
}

/// A placed logo.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogoPlacement {
    pub entity: Entity,
    pub slot: Slot,
    /// Final box on the frame, offset included.
    pub dest: Rect,
    /// Two-pass downscale target, when the raster is much larger than `dest`.
    pub intermediate: Option<Size>,
}

/// Placed logos in drawing order (first slot, then second).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LogoLayout {
    pub placements: [Option<LogoPlacement>; 2],
}

impl LogoLayout {
    /// Bounding boxes keyed by entity.
    pub fn bounds(&self) -> LogoBounds {
        let mut bounds = LogoBounds::default();
        for p in self.placements.iter().flatten() {
            bounds.0[p.entity] = Some(p.dest);
        }
        bounds
    }
}

/// On-frame logo boxes from one render, keyed by logical entity.
///
/// An entity whose logo was not drawn has no box and cannot be hit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LogoBounds(pub Pair<Option<Rect>>);

impl LogoBounds {
    /// Box for `entity`, if its logo was drawn.
    pub fn get(&self, entity: Entity) -> Option<Rect> {
        self.0[entity]
    }

    /// Whether no logo was drawn.
    pub fn is_empty(&self) -> bool {
        self.0.game1.is_none() && self.0.game2.is_none()
    }
}

/// Size and place both logos.
///
/// `natural` holds each entity's raster size (`None` when not loaded). The
/// swap flag only decides which entity takes the first position; scale and
/// offset always follow the entity.
pub fn layout_logos(
    frame: Size,
    style: SplitStyle,
    config: &LogoConfig,
    natural: &Pair<Option<Size>>,
    offsets: &Pair<LogoOffset>,
) -> LogoLayout {
    let assignment = resolve_assignment(config.swap_logos);
    let max_height = frame.height as f64 * MAX_HEIGHT_FRACTION;
    let width = frame.width as f64;
    let height = frame.height as f64;

    let sizes = assignment.slots().map(|(slot, entity)| {
        let size = natural[entity]
            .and_then(|n| logo_size(n, max_height, config.effective_scale(entity)))
            .filter(|&(w, h)| w > 0.0 && h > 0.0);
        if size.is_none() {
            log::debug!("no drawable {entity} logo for {slot:?} position");
        }
        size.map(|s| (slot, entity, s))
    });

    // Centered pair: both present share one row, a lone logo is centered alone.
    let pair_start = match sizes {
        [Some((_, _, (w1, _))), Some((_, _, (w2, _)))] => {
            Some(((width - (w1 + LOGO_GAP + w2)) / 2.0, w1))
        }
        _ => None,
    };

    let origin = |slot: Slot, (w, h): (f64, f64)| -> (f64, f64) {
        match config.position {
            LogoPosition::Center => {
                let y = (height - h) / 2.0;
                match (pair_start, slot) {
                    (Some((start, _)), Slot::First) => (start, y),
                    (Some((start, first_width)), Slot::Second) => {
                        (start + first_width + LOGO_GAP, y)
                    }
                    (None, _) => ((width - w) / 2.0, y),
                }
            }
            LogoPosition::SplitRelative => {
                let along = match slot {
                    Slot::First => 0.25,
                    Slot::Second => 0.75,
                };
                match style {
                    SplitStyle::Horizontal => ((width - w) / 2.0, height * along - h / 2.0),
                    SplitStyle::Vertical => (width * along - w / 2.0, (height - h) / 2.0),
                    SplitStyle::Diagonal => (width * along - w / 2.0, height * along - h / 2.0),
                }
            }
        }
    };

    let placements = sizes.map(|entry| {
        let (slot, entity, (w, h)) = entry?;
        let (x, y) = origin(slot, (w, h));
        let offset = offsets[entity];
        let dest = Rect::new(x + offset.x, y + offset.y, w, h);
        let intermediate = natural[entity].and_then(|n| intermediate_size(n, w, h));
        Some(LogoPlacement {
            entity,
            slot,
            dest,
            intermediate,
        })
    });

    let layout = LogoLayout { placements };
    log::trace!("logo layout {:?}", layout);
    layout
}
