//! Settings strings vs. hand-built compositions.
//!
//! A settings string should plan exactly what the equivalent builder calls
//! plan. Border widths are entered at the 1414×464 reference size, so the
//! expected values below are already scaled (and rounded) per format.

#![cfg(feature = "settings")]

use zensplit::settings::{self, ParseWarning};
use zensplit::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sizes() -> AssetSizes {
    AssetSizes {
        backgrounds: Pair::new(Some(Size::new(1920, 1080)), Some(Size::new(800, 1200))),
        logos: Pair::new(Some(Size::new(640, 240)), Some(Size::new(200, 100))),
    }
}

/// Parse `query`, failing on anything but duplicate-key warnings.
fn snapshot(query: &str) -> (Composition, Offsets) {
    let result = settings::parse(query);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| matches!(w, ParseWarning::DuplicateKey { .. })),
        "unexpected warnings for {query:?}: {:?}",
        result.warnings
    );
    result.settings.snapshot()
}

fn assert_same_plan(query: &str, expected: Composition, offsets: Offsets) {
    init();
    let (comp, parsed_offsets) = snapshot(query);
    assert_eq!(comp, expected, "composition for {query:?}");
    assert_eq!(parsed_offsets, offsets, "offsets for {query:?}");
    assert_eq!(
        compose::plan(&comp, &sizes(), &parsed_offsets),
        compose::plan(&expected, &sizes(), &offsets),
        "plan for {query:?}"
    );
}

// ============================================================
// Formats and borders
// ============================================================

mod formats {
    use super::*;

    #[test]
    fn every_preset_by_name() {
        for preset in Preset::ALL {
            let (comp, _) = snapshot(&format!("format={}", preset.name()));
            assert_eq!(comp.frame, preset.size());
        }
    }

    #[test]
    fn main_capsule_horizontal_border() {
        let split = SplitConfig::new(SplitStyle::Horizontal).border(5.0, Color::WHITE);
        assert_same_plan(
            "format=main-capsule&split-style=horizontal&border-width=4&border-color=%23ffffff",
            Composition::new(Size::new(1232, 706)).split(split),
            Offsets::default(),
        );
    }

    #[test]
    fn small_capsule_shrinks_border() {
        let split = SplitConfig::new(SplitStyle::Vertical).border(4.0, Color::BLACK);
        assert_same_plan(
            "format=small-capsule&split-style=vertical&border-width=10&border-color=000",
            Composition::new(Size::new(462, 174)).split(split),
            Offsets::default(),
        );
    }

    #[test]
    fn package_header_is_reference_size() {
        let split = SplitConfig::new(SplitStyle::Diagonal)
            .angle(135.0)
            .border(7.0, Color::WHITE);
        assert_same_plan(
            "format=package-header&split-style=diagonal&split-angle=135&border-width=7",
            Composition::new(Size::new(1414, 464)).split(split),
            Offsets::default(),
        );
    }

    #[test]
    fn frame_border_with_color() {
        assert_same_plan(
            "format=header-capsule&frame-border-width=3&frame-border-color=%2366c0f480",
            Composition::new(Size::new(920, 430))
                .frame_border(FrameBorder::new(3.0, Color::rgba(0x66, 0xc0, 0xf4, 0x80))),
            Offsets::default(),
        );
    }
}

// ============================================================
// Per-entity controls
// ============================================================

mod entities {
    use super::*;

    #[test]
    fn logo_and_background_controls() {
        let mut offsets = Offsets::default();
        offsets.logo[Entity::Game1] = LogoOffset::new(-25.0, 10.0);
        offsets.background[Entity::Game2] = PanZoom::pan(40.0, -15.0).scale(1.25);
        let logo = LogoConfig::new(LogoPosition::Center).scale(Entity::Game1, 0.75);
        assert_same_plan(
            "logo-position=center&game1-scale=75&game1-x-offset=-25&game1-y-offset=10\
             &game2-bg-x-offset=40&game2-bg-y-offset=-15&game2-bg-scale=125",
            Composition::new(Size::new(1232, 706)).logo(logo),
            offsets,
        );
    }

    #[test]
    fn swaps() {
        let split = SplitConfig::new(SplitStyle::Vertical).swap_backgrounds(true);
        let logo = LogoConfig::new(LogoPosition::SplitRelative).swap_logos(true);
        assert_same_plan(
            "split-style=vertical&swap-backgrounds=on&swap-logos=true&logo-position=split",
            Composition::new(Size::new(1232, 706))
                .split(split)
                .logo(logo),
            Offsets::default(),
        );
    }

    #[test]
    fn repeated_slider_last_wins() {
        let (_, offsets) = snapshot("game2-x-offset=5&game2-x-offset=9");
        assert_eq!(offsets.logo[Entity::Game2].x, 9.0);
    }
}

// ============================================================
// Warnings
// ============================================================

mod warnings {
    use super::*;

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let result = settings::parse("format=poster&border-color=teal&split-angle=steep");
        assert_eq!(result.warnings.len(), 3);
        assert!(
            result
                .warnings
                .iter()
                .all(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
        );
        let (comp, _) = result.settings.snapshot();
        assert_eq!(comp, Composition::new(Size::new(1232, 706)));
    }

    #[test]
    fn full_form_round_trip_is_quiet() {
        let query = "format=main-capsule&split-style=diagonal&split-angle=45\
                     &border-width=0&border-color=%23ffffff\
                     &frame-border-width=0&frame-border-color=%2366c0f4\
                     &swap-backgrounds=off&swap-logos=off&logo-position=split\
                     &game1-name=Portal&game1-scale=100&game1-x-offset=0&game1-y-offset=0\
                     &game1-bg-x-offset=0&game1-bg-y-offset=0&game1-bg-scale=100\
                     &game2-name=Portal+2&game2-scale=100&game2-x-offset=0&game2-y-offset=0\
                     &game2-bg-x-offset=0&game2-bg-y-offset=0&game2-bg-scale=100";
        let result = settings::parse(query);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.settings.extras().len(), 2);
        let (comp, offsets) = result.settings.snapshot();
        assert_eq!(comp, Composition::new(Size::new(1232, 706)));
        assert_eq!(offsets, Offsets::default());
    }
}
