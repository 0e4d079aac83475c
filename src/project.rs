//! Fitted image projection: cover and contain under pan/zoom.
//!
//! Computes which part of a source image to sample and where to put it.
//! Pure geometry, no pixel access.
//!
//! # Example
//!
//! ```
//! use zensplit::{FitMode, PanZoom, Rect, Size, project};
//!
//! // 400×200 background covering a 1232×351 region.
//! let p = project(
//!     Size::new(400, 200),
//!     Rect::new(0.0, 0.0, 1232.0, 351.0),
//!     FitMode::Cover,
//!     &PanZoom::default(),
//! )
//! .unwrap();
//!
//! // Full width of the source, cropped vertically to the region's aspect.
//! assert!((p.source.width - 400.0).abs() < 1e-9);
//! assert!(p.source.height < 200.0);
//! assert_eq!(p.dest, Rect::new(0.0, 0.0, 1232.0, 351.0));
//! ```

use crate::geom::{Rect, Size};

/// How a source image fills its destination.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Scale to fill the destination, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the destination, leaving margins.
    Contain,
}

/// Pan and zoom applied to a background inside its region.
///
/// `x`/`y` are shifts in destination pixels; `scale` multiplies the
/// automatically computed fit scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanZoom {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl PanZoom {
    /// Pan without zoom.
    pub const fn pan(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0 }
    }

    /// Set the zoom multiplier.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Zoom multiplier with non-positive and non-finite values mapped to 1.
    pub fn effective_scale(&self) -> f64 {
        if self.scale > 0.0 && self.scale.is_finite() {
            self.scale
        } else {
            1.0
        }
    }
}

/// What to blit: a source sample rectangle into a destination rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Region of the source image, in source pixels. May extend past the
    /// image when zoomed out far enough that no clamping applies.
    pub source: Rect,
    /// Region of the frame, in frame pixels.
    pub dest: Rect,
}

/// Project `image` into `dest` under `mode` and `offset`.
///
/// Returns `None` when there is nothing to draw: a zero-size image or an
/// empty destination.
pub fn project(image: Size, dest: Rect, mode: FitMode, offset: &PanZoom) -> Option<Projection> {
    if image.is_empty() || dest.is_empty() {
        return None;
    }

    let iw = image.width as f64;
    let ih = image.height as f64;
    let zoom = offset.effective_scale();

    let projection = match mode {
        FitMode::Cover => {
            // Scale is destination-per-source, so offsets stay in frame pixels.
            let total = (dest.width / iw).max(dest.height / ih) * zoom;
            let sw = dest.width / total;
            let sh = dest.height / total;
            let sx = clamp_origin((iw - sw) / 2.0 - offset.x / total, sw, iw);
            let sy = clamp_origin((ih - sh) / 2.0 - offset.y / total, sh, ih);
            Projection {
                source: Rect::new(sx, sy, sw, sh),
                dest,
            }
        }
        FitMode::Contain => {
            let scale = (dest.width / iw).min(dest.height / ih) * zoom;
            let dw = iw * scale;
            let dh = ih * scale;
            Projection {
                source: image.to_rect(),
                dest: Rect::new(
                    dest.x + (dest.width - dw) / 2.0 + offset.x,
                    dest.y + (dest.height - dh) / 2.0 + offset.y,
                    dw,
                    dh,
                ),
            }
        }
    };

    log::trace!(
        "project {}x{} {:?} -> source {:?} dest {:?}",
        image.width,
        image.height,
        mode,
        projection.source,
        projection.dest
    );
    Some(projection)
}

/// Clamp a sample origin into the image, but only when the sample is smaller
/// than the image on this axis. Larger samples pass through so zooming out
/// overflows instead of distorting.
fn clamp_origin(origin: f64, sample: f64, image: f64) -> f64 {
    if sample < image {
        origin.clamp(0.0, image - sample)
    } else {
        origin
    }
}
