//! Software [`Surface`] over an RGBA8 buffer.
//!
//! Pixels are addressed at their centers `(x + 0.5, y + 0.5)`. A pixel is
//! touched by a shape when its center is inside it; there is no
//! anti-aliasing on edges. Images are sampled bilinearly with straight alpha
//! and composited source-over.

use image::imageops::{self, FilterType};
use image::{Pixel, Rgba, RgbaImage};

use crate::assets::Assets;
use crate::color::Color;
use crate::compose::{Composition, render};
use crate::geom::{Point, Rect, Size, distance_to_segment, winding_contains};
use crate::hit::Offsets;
use crate::logo::LogoBounds;
use crate::surface::{ClipPolygon, RasterHandle, Surface};

/// Raster construction failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Buffer is not `width * height * 4` bytes.
    #[error("RGBA buffer is {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    /// `width * height * 4` does not fit in memory.
    #[error("raster dimensions {width}x{height} overflow")]
    TooLarge { width: u32, height: u32 },
}

/// An owned RGBA8 image, usable both as a source image and as a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster(RgbaImage);

impl Raster {
    /// Wrap a row-major RGBA8 buffer.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, RasterError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(RasterError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(RasterError::BufferLength {
                expected,
                actual: rgba.len(),
            });
        }
        let actual = rgba.len();
        RgbaImage::from_raw(width, height, rgba)
            .map(Self)
            .ok_or(RasterError::BufferLength { expected, actual })
    }

    /// Fully transparent raster.
    pub fn blank(size: Size) -> Self {
        Self(RgbaImage::new(size.width, size.height))
    }

    /// Raster filled with one color.
    pub fn filled(size: Size, color: Color) -> Self {
        Self(RgbaImage::from_pixel(
            size.width,
            size.height,
            Rgba(color.to_array()),
        ))
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.0
            .get_pixel_checked(x, y)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Row-major RGBA8 bytes.
    pub fn as_rgba(&self) -> &[u8] {
        self.0.as_raw()
    }

    /// The underlying `image` buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        self.0
    }
}

impl From<RgbaImage> for Raster {
    fn from(image: RgbaImage) -> Self {
        Self(image)
    }
}

impl RasterHandle for Raster {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

/// Pixel index range whose centers fall in `[lo, hi)`, clamped to `0..len`.
fn span(lo: f64, hi: f64, len: u32) -> core::ops::Range<u32> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().clamp(0.0, len as f64);
    if start >= end {
        return 0..0;
    }
    start as u32..end as u32
}

fn composite(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    match src[3] {
        0 => {}
        255 => *dst = src,
        _ => dst.blend(&src),
    }
}

/// Bilinear sample at a continuous source position, edges clamped.
fn sample(image: &RgbaImage, u: f64, v: f64) -> Rgba<u8> {
    let max_x = (image.width() - 1) as f64;
    let max_y = (image.height() - 1) as f64;
    let fx = u - 0.5;
    let fy = v - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let xa = x0.clamp(0.0, max_x) as u32;
    let xb = (x0 + 1.0).clamp(0.0, max_x) as u32;
    let ya = y0.clamp(0.0, max_y) as u32;
    let yb = (y0 + 1.0).clamp(0.0, max_y) as u32;

    let (a, b) = (image.get_pixel(xa, ya), image.get_pixel(xb, ya));
    let (c, d) = (image.get_pixel(xa, yb), image.get_pixel(xb, yb));
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let top = a[i] as f64 * (1.0 - tx) + b[i] as f64 * tx;
        let bottom = c[i] as f64 * (1.0 - tx) + d[i] as f64 * tx;
        *channel = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

impl Surface for Raster {
    type Image = Raster;

    fn size(&self) -> Size {
        RasterHandle::size(self)
    }

    fn clear(&mut self) {
        for p in self.0.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    fn draw_image(
        &mut self,
        image: &Raster,
        source: Rect,
        dest: Rect,
        clip: Option<&ClipPolygon>,
    ) {
        let iw = image.0.width() as f64;
        let ih = image.0.height() as f64;
        if iw == 0.0 || ih == 0.0 || source.is_empty() || dest.is_empty() {
            return;
        }
        let sx = source.width / dest.width;
        let sy = source.height / dest.height;

        for py in span(dest.y, dest.bottom(), self.0.height()) {
            let cy = py as f64 + 0.5;
            let v = source.y + (cy - dest.y) * sy;
            if v < 0.0 || v >= ih {
                continue;
            }
            for px in span(dest.x, dest.right(), self.0.width()) {
                let cx = px as f64 + 0.5;
                let u = source.x + (cx - dest.x) * sx;
                if u < 0.0 || u >= iw {
                    continue;
                }
                if let Some(polygon) = clip {
                    if !winding_contains(polygon, Point::new(cx, cy)) {
                        continue;
                    }
                }
                let src = sample(&image.0, u, v);
                composite(self.0.get_pixel_mut(px, py), src);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let src = Rgba(color.to_array());
        for py in span(rect.y, rect.bottom(), self.0.height()) {
            for px in span(rect.x, rect.right(), self.0.width()) {
                composite(self.0.get_pixel_mut(px, py), src);
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len_sq = dx * dx + dy * dy;
        if width <= 0.0 || len_sq == 0.0 {
            return;
        }
        let half = width / 2.0;
        let src = Rgba(color.to_array());

        let (left, right) = (from.x.min(to.x) - half, from.x.max(to.x) + half);
        let (top, bottom) = (from.y.min(to.y) - half, from.y.max(to.y) + half);
        let xs = span(left, right, self.0.width());
        let ys = span(top, bottom, self.0.height());
        for py in ys {
            let cy = py as f64 + 0.5;
            for px in xs.clone() {
                let cx = px as f64 + 0.5;
                // Butt caps: only the span between the endpoints is painted.
                let t = ((cx - from.x) * dx + (cy - from.y) * dy) / len_sq;
                if !(0.0..=1.0).contains(&t) {
                    continue;
                }
                if distance_to_segment(from, to, Point::new(cx, cy)) <= half {
                    composite(self.0.get_pixel_mut(px, py), src);
                }
            }
        }
    }

    fn resample(&mut self, image: &Raster, size: Size) -> Raster {
        if image.0.width() == 0 || image.0.height() == 0 || size.is_empty() {
            return Raster::blank(size);
        }
        Raster(imageops::resize(
            &image.0,
            size.width,
            size.height,
            FilterType::Triangle,
        ))
    }
}

/// Render a composition onto a fresh transparent raster of the frame size.
pub fn render_raster(
    composition: &Composition,
    assets: &Assets<'_, Raster>,
    offsets: &Offsets,
) -> (Raster, LogoBounds) {
    let mut surface = Raster::blank(composition.frame);
    let bounds = render(&mut surface, composition, assets, offsets);
    (surface, bounds)
}
