//! Two-entity split composition with logo layout and drag hit-testing.
//!
//! Composes two backgrounds and two logos, one of each per logical entity
//! ([`Entity::Game1`], [`Entity::Game2`]), into a single frame. The frame is
//! split horizontally, vertically, or along an angled diagonal, each
//! background covers its region under its own pan/zoom, and the logos are
//! placed on top. Pointer input is mapped back to whichever logo or
//! background it grabs.
//!
//! The geometry core is pure, allocation-free, and `no_std` compatible. Pixels
//! only happen behind the [`Surface`] trait; [`raster::Raster`] is the bundled
//! software implementation.
//!
//! # Modules
//!
//! - [`project`]: Cover/contain projection of an image into a rectangle
//! - [`split`]: Split regions, diagonal clip polygon, separator border
//! - [`logo`]: Logo sizing and placement, bounds keyed by entity
//! - [`hit`]: Display mapping, hit-testing, drag sessions
//! - [`compose`]: Planning draw commands and executing them on a surface
//! - [`preset`]: Named output formats and border scaling
//! - [`settings`]: Form-encoded settings snapshots
//! - [`raster`]: `image`-backed software surface
//! - [`svg`]: SVG diagrams of a plan
//!
//! # Example
//!
//! ```
//! use zensplit::{Composition, Entity, LogoConfig, LogoPosition, Offsets, Rect, Size};
//! use zensplit::{AssetSizes, Pair, compose};
//!
//! let composition = Composition::new(Size::new(1232, 706))
//!     .logo(LogoConfig::new(LogoPosition::Center));
//! let sizes = AssetSizes {
//!     backgrounds: Pair::splat(Some(Size::new(1920, 1080))),
//!     logos: Pair::new(Some(Size::new(300, 100)), Some(Size::new(200, 100))),
//! };
//! let plan = compose::plan(&composition, &sizes, &Offsets::default());
//!
//! assert_eq!(plan.logo_bounds.get(Entity::Game1), Some(Rect::new(356.0, 303.0, 300.0, 100.0)));
//! assert_eq!(plan.logo_bounds.get(Entity::Game2), Some(Rect::new(676.0, 303.0, 200.0, 100.0)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod assets;
pub mod color;
#[cfg(feature = "alloc")]
pub mod compose;
pub mod entity;
pub mod geom;
pub mod hit;
pub mod logo;
pub mod preset;
pub mod project;
#[cfg(feature = "raster")]
pub mod raster;
#[cfg(feature = "settings")]
pub mod settings;
pub mod split;
pub mod surface;
#[cfg(feature = "svg")]
pub mod svg;

pub use assets::{AssetSizes, Assets, first_available};
pub use color::{Color, parse_color};
#[cfg(feature = "alloc")]
pub use compose::{Command, Composition, FrameBorder, Plan, plan, render};
pub use entity::{Assignment, Entity, Pair, Slot, resolve_assignment};
pub use geom::{Point, Rect, Size};
pub use hit::{DisplayMapping, DragMode, DragSession, HitTarget, Offsets, apply_drag, hit_test};
pub use logo::{LogoBounds, LogoConfig, LogoOffset, LogoPlacement, LogoPosition, layout_logos};
pub use preset::{Preset, PresetError, scale_border_width};
pub use project::{FitMode, PanZoom, Projection, project};
#[cfg(feature = "raster")]
pub use raster::{Raster, RasterError, render_raster};
pub use split::{Border, SplitConfig, SplitLayout, SplitStyle, split_layout};
pub use surface::{ClipPolygon, RasterHandle, Surface};
