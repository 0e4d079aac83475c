//! The drawing seam between layout geometry and pixels.
//!
//! The engine never touches pixels itself. It hands rectangles, clip
//! polygons, and lines to a [`Surface`], the same small set of operations a
//! 2D canvas context offers. [`crate::raster::Raster`] is the bundled
//! software implementation; hosts with their own compositor implement the
//! trait over their native image type.

use crate::color::Color;
use crate::geom::{Point, Rect, Size};

/// A decoded image with known pixel dimensions.
pub trait RasterHandle {
    /// Pixel dimensions. Zero on either axis means nothing to draw.
    fn size(&self) -> Size;
}

impl<T: RasterHandle + ?Sized> RasterHandle for &T {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// Polygon used to clip a draw (nonzero winding).
pub type ClipPolygon = [Point; 6];

/// A drawable frame.
pub trait Surface {
    /// Image type this surface can draw.
    type Image: RasterHandle;

    /// Frame dimensions.
    fn size(&self) -> Size;

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Draw the `source` region of `image` scaled into `dest`, like a canvas
    /// `drawImage` with nine arguments. Parts of `source` outside the image
    /// draw nothing. When `clip` is set only pixels inside it are touched.
    fn draw_image(
        &mut self,
        image: &Self::Image,
        source: Rect,
        dest: Rect,
        clip: Option<&ClipPolygon>,
    );

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a straight line with butt caps.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);

    /// Resample `image` to exactly `size` with a smoothing filter. Used for the
    /// intermediate pass of large logo downscales.
    fn resample(&mut self, image: &Self::Image, size: Size) -> Self::Image;
}
