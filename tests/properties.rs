//! Randomized checks of the geometry invariants.

#![cfg(feature = "raster")]

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use zensplit::geom::signed_area;
use zensplit::logo::LOGO_GAP;
use zensplit::split::diagonal_clip;
use zensplit::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whether two projections agree to within `eps` on every edge.
fn approx_eq(a: &Projection, b: &Projection, eps: f64) -> bool {
    let edges = |p: &Projection| {
        [
            p.source.x,
            p.source.y,
            p.source.width,
            p.source.height,
            p.dest.x,
            p.dest.y,
            p.dest.width,
            p.dest.height,
        ]
    };
    let (a, b) = (edges(a), edges(b));
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
}

fn style_of(n: u8) -> SplitStyle {
    match n % 3 {
        0 => SplitStyle::Horizontal,
        1 => SplitStyle::Vertical,
        _ => SplitStyle::Diagonal,
    }
}

// ── Projection ──────────────────────────────────────────────────────

#[quickcheck]
fn cover_nonpositive_zoom_is_unzoomed(
    iw: u16,
    ih: u16,
    dw: u16,
    dh: u16,
    zoom: i8,
) -> TestResult {
    init();
    if iw == 0 || ih == 0 || dw == 0 || dh == 0 || zoom > 0 {
        return TestResult::discard();
    }
    let image = Size::new(iw as u32, ih as u32);
    let dest = Rect::new(0.0, 0.0, dw as f64, dh as f64);
    let offset = PanZoom::default().scale(zoom as f64);
    let zoomed = project(image, dest, FitMode::Cover, &offset);
    let plain = project(image, dest, FitMode::Cover, &PanZoom::default());
    match (zoomed, plain) {
        (Some(a), Some(b)) => TestResult::from_bool(approx_eq(&a, &b, 1e-9)),
        _ => TestResult::failed(),
    }
}

#[quickcheck]
fn cover_sample_stays_inside_image(
    iw: u16,
    ih: u16,
    dw: u16,
    dh: u16,
    pan: (i16, i16),
    zoom: u8,
) -> TestResult {
    init();
    if iw == 0 || ih == 0 || dw == 0 || dh == 0 {
        return TestResult::discard();
    }
    // Zoom in only: 1.0 ..= 3.55.
    let zoom = 1.0 + zoom as f64 / 100.0;
    let image = Size::new(iw as u32, ih as u32);
    let dest = Rect::new(0.0, 0.0, dw as f64, dh as f64);
    let offset = PanZoom::pan(pan.0 as f64, pan.1 as f64).scale(zoom);
    let Some(p) = project(image, dest, FitMode::Cover, &offset) else {
        return TestResult::failed();
    };
    let eps = 1e-6;
    let (iw, ih) = (iw as f64, ih as f64);
    if p.source.width > iw + eps || p.source.height > ih + eps {
        return TestResult::error(format!("sample {:?} larger than {iw}x{ih}", p.source));
    }
    // Axes where the sample fills the image exactly are not clamped.
    if p.source.width < iw && (p.source.x < -eps || p.source.right() > iw + eps) {
        return TestResult::error(format!("x out of range: {:?}", p.source));
    }
    if p.source.height < ih && (p.source.y < -eps || p.source.bottom() > ih + eps) {
        return TestResult::error(format!("y out of range: {:?}", p.source));
    }
    TestResult::passed()
}

// ── Diagonal split ──────────────────────────────────────────────────

#[quickcheck]
fn right_angle_clip_covers_half(w: u16, h: u16, quadrant: u8) -> TestResult {
    init();
    if w == 0 || h == 0 {
        return TestResult::discard();
    }
    let frame = Size::new(w as u32, h as u32);
    let angle = (quadrant % 4) as f64 * 90.0;
    let fraction = signed_area(&diagonal_clip(frame, angle)).abs() / frame.area() as f64;
    if (fraction - 0.5).abs() > 1e-9 {
        return TestResult::error(format!("{angle}° on {frame:?}: clip covers {fraction}"));
    }
    TestResult::passed()
}

// ── Swap is a relabel ───────────────────────────────────────────────

fn gradient(w: u32, h: u32, seed: u8) -> Raster {
    let mut rgba = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            rgba.extend_from_slice(&[
                (x * 7) as u8 ^ seed,
                (y * 11) as u8,
                seed.wrapping_mul(3),
                255,
            ]);
        }
    }
    Raster::new(w, h, rgba).unwrap()
}

#[quickcheck]
fn swapped_backgrounds_match_exchanged_assets(
    style: u8,
    angle: u16,
    pan: (i8, i8),
    zoom: u8,
) -> bool {
    init();
    let a = gradient(40, 30, 17);
    let b = gradient(25, 50, 200);
    let split = SplitConfig::new(style_of(style))
        .angle((angle % 360) as f64)
        .border(2.0, Color::rgb(1, 2, 3));
    let frame = Size::new(48, 36);

    let mut offsets = Offsets::default();
    let zoom = 1.0 + zoom as f64 / 128.0;
    offsets.background[Entity::Game1] = PanZoom::pan(pan.0 as f64, pan.1 as f64).scale(zoom);
    offsets.background[Entity::Game2] = PanZoom::pan(-(pan.1 as f64), 3.0);

    let swapped = render_raster(
        &Composition::new(frame).split(split.swap_backgrounds(true)),
        &Assets::empty()
            .background(Entity::Game1, &a)
            .background(Entity::Game2, &b),
        &offsets,
    )
    .0;

    let mut exchanged_offsets = offsets;
    exchanged_offsets.background = offsets.background.swapped();
    let exchanged = render_raster(
        &Composition::new(frame).split(split.swap_backgrounds(false)),
        &Assets::empty()
            .background(Entity::Game1, &b)
            .background(Entity::Game2, &a),
        &exchanged_offsets,
    )
    .0;

    swapped.as_rgba() == exchanged.as_rgba()
}

// ── Logos ───────────────────────────────────────────────────────────

#[quickcheck]
fn centered_pair_keeps_gap(
    w1: u16,
    h1: u16,
    w2: u16,
    h2: u16,
    swap: bool,
    scale: (u8, u8),
) -> TestResult {
    init();
    if w1 == 0 || h1 == 0 || w2 == 0 || h2 == 0 {
        return TestResult::discard();
    }
    let config = LogoConfig::new(LogoPosition::Center)
        .swap_logos(swap)
        .scale(Entity::Game1, scale.0 as f64 / 64.0)
        .scale(Entity::Game2, scale.1 as f64 / 64.0);
    let natural = Pair::new(
        Some(Size::new(w1 as u32, h1 as u32)),
        Some(Size::new(w2 as u32, h2 as u32)),
    );
    let frame = Size::new(1232, 706);
    let at_rest = Pair::default();
    let layout = layout_logos(frame, SplitStyle::Diagonal, &config, &natural, &at_rest);
    let [Some(first), Some(second)] = layout.placements else {
        return TestResult::error(format!("missing placement: {layout:?}"));
    };
    if first.slot != Slot::First || second.slot != Slot::Second {
        return TestResult::error(format!("placements out of order: {layout:?}"));
    }
    let gap = second.dest.x - first.dest.right();
    TestResult::from_bool((gap - LOGO_GAP).abs() < 1e-6)
}

#[quickcheck]
fn inside_game1_logo_hits_game1(style: u8, swap: bool, x: u16, y: u16, w: u8, h: u8) -> TestResult {
    init();
    if w == 0 || h == 0 {
        return TestResult::discard();
    }
    let frame = Size::new(1232, 706);
    let rect = Rect::new(x as f64 % 1232.0, y as f64 % 706.0, w as f64, h as f64);
    // Overlapping game2 box must not steal the hit.
    let bounds = LogoBounds(Pair::new(Some(rect), Some(rect.translate(1.0, 1.0))));
    let split = SplitConfig::new(style_of(style)).swap_backgrounds(swap);
    let hit = hit_test(rect.center(), frame, &bounds, &split);
    TestResult::from_bool(
        hit == HitTarget {
            mode: DragMode::Logo,
            entity: Entity::Game1,
        },
    )
}
