//! Composition planning and execution.
//!
//! A render happens in two phases. [`plan`] turns a [`Composition`] snapshot,
//! the asset sizes, and the per-entity [`Offsets`] into an ordered list of
//! draw [`Command`]s plus the logo bounds those commands will paint. No pixels
//! are touched. [`Plan::execute`] then replays the commands on a [`Surface`].
//! [`render`] does both and returns the bounds for the hit-test mapper.
//!
//! Drawing order is fixed: clear, backgrounds (first slot, then second),
//! split border, logos, frame border.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::assets::{AssetSizes, Assets};
use crate::color::Color;
use crate::entity::Entity;
use crate::geom::{Point, Rect, Size};
use crate::hit::Offsets;
use crate::logo::{LogoBounds, LogoConfig, layout_logos};
use crate::project::Projection;
use crate::split::{Border, SplitConfig, split_layout};
use crate::surface::{ClipPolygon, RasterHandle, Surface};

/// Band drawn just inside the frame edge, on top of everything else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameBorder {
    pub width: f64,
    pub color: Color,
}

impl FrameBorder {
    /// A frame border of `width` pixels.
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Everything that decides what a render looks like, apart from the images
/// and per-entity offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Composition {
    pub frame: Size,
    pub split: SplitConfig,
    pub logo: LogoConfig,
    pub frame_border: Option<FrameBorder>,
}

impl Composition {
    /// Default split and logo settings at `frame` size.
    pub fn new(frame: Size) -> Self {
        Self {
            frame,
            split: SplitConfig::default(),
            logo: LogoConfig::default(),
            frame_border: None,
        }
    }

    /// Set the split configuration.
    pub fn split(mut self, split: SplitConfig) -> Self {
        self.split = split;
        self
    }

    /// Set the logo configuration.
    pub fn logo(mut self, logo: LogoConfig) -> Self {
        self.logo = logo;
        self
    }

    /// Draw a border band around the frame.
    pub fn frame_border(mut self, border: FrameBorder) -> Self {
        self.frame_border = Some(border);
        self
    }
}

/// A single draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Reset the frame to transparent.
    Clear,
    /// Blit an entity's background.
    DrawBackground {
        entity: Entity,
        projection: Projection,
        clip: Option<ClipPolygon>,
    },
    /// Blit an entity's logo into `dest`.
    DrawLogo {
        entity: Entity,
        dest: Rect,
        /// Resample to this size first when the logo is much larger than `dest`.
        intermediate: Option<Size>,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
}

/// Ordered draw commands for one render, with the logo bounds they paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub frame: Size,
    pub commands: Vec<Command>,
    pub logo_bounds: LogoBounds,
}

/// Plan a render without touching pixels.
pub fn plan(composition: &Composition, sizes: &AssetSizes, offsets: &Offsets) -> Plan {
    let frame = composition.frame;
    let mut commands = Vec::with_capacity(10);
    commands.push(Command::Clear);

    let layout = split_layout(frame, &composition.split);
    for draw in layout
        .project(&sizes.backgrounds, &offsets.background)
        .into_iter()
        .flatten()
    {
        commands.push(Command::DrawBackground {
            entity: draw.entity,
            projection: draw.projection,
            clip: draw.clip,
        });
    }

    match layout.border {
        Some(Border::Bar { rect, color }) => commands.push(Command::FillRect { rect, color }),
        Some(Border::Line {
            from,
            to,
            width,
            color,
        }) => commands.push(Command::StrokeLine {
            from,
            to,
            width,
            color,
        }),
        None => {}
    }

    let logos = layout_logos(
        frame,
        composition.split.style,
        &composition.logo,
        &sizes.logos,
        &offsets.logo,
    );
    for placement in logos.placements.iter().flatten() {
        commands.push(Command::DrawLogo {
            entity: placement.entity,
            dest: placement.dest,
            intermediate: placement.intermediate,
        });
    }

    if let Some(border) = composition.frame_border {
        for rect in frame_bands(frame, border.width) {
            commands.push(Command::FillRect {
                rect,
                color: border.color,
            });
        }
    }

    let plan = Plan {
        frame,
        commands,
        logo_bounds: logos.bounds(),
    };
    log::trace!("planned {} commands for {}x{}", plan.commands.len(), frame.width, frame.height);
    plan
}

/// Top, bottom, left, and right bands of a border `width` pixels wide.
///
/// Width is capped at half the smaller frame side; `<= 0` and NaN yield no
/// bands.
fn frame_bands(frame: Size, width: f64) -> impl Iterator<Item = Rect> {
    let w = frame.width as f64;
    let h = frame.height as f64;
    // NaN must not fall through `min` to the half-frame cap.
    let bw = if width > 0.0 {
        width.min(w / 2.0).min(h / 2.0)
    } else {
        0.0
    };
    let bands = if bw > 0.0 {
        [
            Rect::new(0.0, 0.0, w, bw),
            Rect::new(0.0, h - bw, w, bw),
            Rect::new(0.0, bw, bw, h - 2.0 * bw),
            Rect::new(w - bw, bw, bw, h - 2.0 * bw),
        ]
    } else {
        [Rect::default(); 4]
    };
    bands.into_iter().filter(|r| !r.is_empty())
}

impl Plan {
    /// Replay the commands on `surface`.
    ///
    /// Images are looked up by entity. A command whose image is missing from
    /// `assets` is skipped.
    pub fn execute<S: Surface>(&self, surface: &mut S, assets: &Assets<'_, S::Image>) {
        let actual = surface.size();
        if actual != self.frame {
            log::debug!(
                "plan for {}x{} executed on {}x{} surface",
                self.frame.width,
                self.frame.height,
                actual.width,
                actual.height
            );
        }

        for command in &self.commands {
            match command {
                Command::Clear => surface.clear(),
                Command::DrawBackground {
                    entity,
                    projection,
                    clip,
                } => match assets.backgrounds[*entity] {
                    Some(image) => {
                        surface.draw_image(image, projection.source, projection.dest, clip.as_ref())
                    }
                    None => log::debug!("skipping {entity} background: not provided"),
                },
                Command::DrawLogo {
                    entity,
                    dest,
                    intermediate,
                } => {
                    let Some(image) = assets.logos[*entity] else {
                        log::debug!("skipping {entity} logo: not provided");
                        continue;
                    };
                    match intermediate {
                        Some(size) => {
                            let reduced = surface.resample(image, *size);
                            let source = reduced.size().to_rect();
                            surface.draw_image(&reduced, source, *dest, None);
                        }
                        None => surface.draw_image(image, image.size().to_rect(), *dest, None),
                    }
                }
                Command::FillRect { rect, color } => surface.fill_rect(*rect, *color),
                Command::StrokeLine {
                    from,
                    to,
                    width,
                    color,
                } => surface.stroke_line(*from, *to, *width, *color),
            }
        }
    }
}

/// Plan and execute a composition, returning the logo bounds just painted.
pub fn render<S: Surface>(
    surface: &mut S,
    composition: &Composition,
    assets: &Assets<'_, S::Image>,
    offsets: &Offsets,
) -> LogoBounds {
    let plan = plan(composition, &assets.sizes(), offsets);
    plan.execute(surface, assets);
    plan.logo_bounds
}
