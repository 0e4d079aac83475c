//! Form-encoded settings snapshots.
//!
//! Hosts keep their controls (format picker, split style, sliders, swap
//! checkboxes) as a flat `key=value&...` string, the same shape an HTML form
//! submits. [`parse`] turns that into [`Settings`], and
//! [`Settings::snapshot`] resolves it into the [`Composition`] and
//! [`Offsets`] a render needs.
//!
//! # Example
//!
//! ```
//! use zensplit::settings;
//! use zensplit::{Entity, Size, SplitStyle};
//!
//! let query = "format=header-capsule&split-style=vertical&border-width=4&game2-bg-scale=150";
//! let result = settings::parse(query);
//! assert!(result.warnings.is_empty());
//!
//! let (composition, offsets) = result.settings.snapshot();
//! assert_eq!(composition.frame, Size::new(920, 430));
//! assert_eq!(composition.split.style, SplitStyle::Vertical);
//! assert_eq!(offsets.background[Entity::Game2].scale, 1.5);
//! ```
//!
//! Problems never fail the parse. Unknown keys, unparseable values, and
//! repeated keys become [`ParseWarning`]s; the last valid value wins.

mod parse;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::color::Color;
use crate::compose::{Composition, FrameBorder};
use crate::entity::{Entity, Pair};
use crate::hit::Offsets;
use crate::logo::{LogoConfig, LogoOffset, LogoPosition};
use crate::preset::{Preset, scale_border_width};
use crate::project::PanZoom;
use crate::split::{SplitConfig, SplitStyle};

/// Frame border color when none is given.
pub const DEFAULT_FRAME_BORDER_COLOR: Color = Color::rgb(0x66, 0xc0, 0xf4);

/// Result of parsing a settings string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub settings: Settings,
    /// Non-fatal problems, in input order.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from settings parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key is neither a setting nor a known host field.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: String,
        value: String,
        reason: &'static str,
    },
}

/// Per-entity controls. Scales are percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntitySettings {
    pub logo_scale: Option<f64>,
    pub logo_x: Option<f64>,
    pub logo_y: Option<f64>,
    pub background_x: Option<f64>,
    pub background_y: Option<f64>,
    pub background_scale: Option<f64>,
}

/// Parsed settings. `None` means the control was not supplied and its
/// default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub format: Option<Preset>,
    pub split_style: Option<SplitStyle>,
    pub split_angle: Option<f64>,
    /// Border width at the 1414×464 reference size; scaled per format.
    pub border_width: Option<f64>,
    pub border_color: Option<Color>,
    /// Frame border width in output pixels (not scaled).
    pub frame_border_width: Option<f64>,
    pub frame_border_color: Option<Color>,
    pub swap_backgrounds: Option<bool>,
    pub swap_logos: Option<bool>,
    pub logo_position: Option<LogoPosition>,
    pub entities: Pair<EntitySettings>,
    /// Recognized host fields that do not affect rendering (game names).
    pub(crate) extras: BTreeMap<String, String>,
}

impl Settings {
    /// Empty settings: every control at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host fields kept verbatim.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Resolve into what a render needs.
    ///
    /// The border width is scaled from the reference size to the chosen
    /// format and rounded. Percent scales become multipliers.
    pub fn snapshot(&self) -> (Composition, Offsets) {
        let frame = self.format.unwrap_or_default().size();
        let border = scale_border_width(self.border_width.unwrap_or(0.0), frame);

        let split = SplitConfig::new(self.split_style.unwrap_or_default())
            .angle(self.split_angle.unwrap_or(45.0))
            .border(border, self.border_color.unwrap_or(Color::WHITE))
            .swap_backgrounds(self.swap_backgrounds.unwrap_or(false));

        let mut logo = LogoConfig::new(self.logo_position.unwrap_or_default())
            .swap_logos(self.swap_logos.unwrap_or(false));
        let mut offsets = Offsets::default();
        for entity in Entity::ALL {
            let e = &self.entities[entity];
            logo = logo.scale(entity, percent(e.logo_scale));
            offsets.logo[entity] =
                LogoOffset::new(e.logo_x.unwrap_or(0.0), e.logo_y.unwrap_or(0.0));
            offsets.background[entity] = PanZoom::pan(
                e.background_x.unwrap_or(0.0),
                e.background_y.unwrap_or(0.0),
            )
            .scale(percent(e.background_scale));
        }

        let mut composition = Composition::new(frame).split(split).logo(logo);
        if let Some(width) = self.frame_border_width.filter(|&w| w > 0.0) {
            composition = composition.frame_border(FrameBorder::new(
                width,
                self.frame_border_color.unwrap_or(DEFAULT_FRAME_BORDER_COLOR),
            ));
        }

        log::debug!("settings snapshot: {}x{} {:?}", frame.width, frame.height, split.style);
        (composition, offsets)
    }
}

fn percent(value: Option<f64>) -> f64 {
    value.unwrap_or(100.0) / 100.0
}

/// Parse a settings string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (settings, warnings) = parse::parse_query(query);
    if !warnings.is_empty() {
        log::debug!("settings parsed with {} warnings", warnings.len());
    }
    ParseResult { settings, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Size;

    fn snapshot(query: &str) -> (Composition, Offsets) {
        parse(query).settings.snapshot()
    }

    #[test]
    fn empty_snapshot_uses_defaults() {
        let (comp, offsets) = Settings::new().snapshot();
        assert_eq!(comp.frame, Size::new(1232, 706));
        assert_eq!(comp.split.style, SplitStyle::Diagonal);
        assert_eq!(comp.split.angle_degrees, 45.0);
        assert_eq!(comp.split.border_width, 0.0);
        assert_eq!(comp.frame_border, None);
        assert_eq!(offsets, Offsets::default());
    }

    #[test]
    fn border_is_scaled_to_format() {
        let (comp, _) = snapshot("format=main-capsule&border-width=4");
        assert_eq!(comp.split.border_width, 5.0);
        let (comp, _) = snapshot("format=package-header&border-width=4");
        assert_eq!(comp.split.border_width, 4.0);
    }

    #[test]
    fn frame_border_is_not_scaled() {
        let (comp, _) = snapshot("format=small-capsule&frame-border-width=6");
        assert_eq!(
            comp.frame_border,
            Some(FrameBorder::new(6.0, DEFAULT_FRAME_BORDER_COLOR))
        );
        let (comp, _) = snapshot("frame-border-width=0&frame-border-color=fff");
        assert_eq!(comp.frame_border, None);
    }

    #[test]
    fn entity_controls_land_on_their_entity() {
        let query = "swap-logos=on&swap-backgrounds=true\
                     &game1-scale=50&game1-x-offset=-12&game1-y-offset=7\
                     &game2-bg-x-offset=30&game2-bg-y-offset=-4&game2-bg-scale=0";
        let (comp, offsets) = snapshot(query);
        assert!(comp.logo.swap_logos);
        assert!(comp.split.swap_backgrounds);
        assert_eq!(comp.logo.scale.game1, 0.5);
        assert_eq!(comp.logo.scale.game2, 1.0);
        assert_eq!(offsets.logo.game1, LogoOffset::new(-12.0, 7.0));
        assert_eq!(offsets.background.game2.x, 30.0);
        assert_eq!(offsets.background.game2.y, -4.0);
        // 0% is passed through; the projector treats it as 1.
        assert_eq!(offsets.background.game2.scale, 0.0);
        assert_eq!(offsets.background.game2.effective_scale(), 1.0);
    }
}
