//! Square raster canvas the flower is painted on.
//!
//! Backed by a `tiny_skia::Pixmap`. Everything drawn here is fully opaque,
//! so premultiplied and straight RGB are the same bytes and the pixmap can
//! be handed to `image` as-is.
//!
//! Polygons and circles are rasterized WITHOUT anti-aliasing: the gradient
//! fill recognizes unpainted petal pixels by exact comparison with the blank
//! fill color, and blended edge pixels would never match.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tiny_skia::{ColorU8, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Color;
use crate::error::{FlowerError, Result};
use crate::geometry::Contour;

/// Grid coordinates sit on pixel centers.
const PIXEL_CENTER: f32 = 0.5;

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or(FlowerError::InvalidCanvasSize(size))?;
        let [r, g, b] = background.to_rgb8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size() as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(y as usize * size as usize + x as usize)
    }

    /// Read a pixel; `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        let idx = self.index(x, y)?;
        let p = self.pixmap.pixels()[idx];
        Some([p.red(), p.green(), p.blue()])
    }

    /// Overwrite a pixel. Writes outside the canvas are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            let [r, g, b] = color.to_rgb8();
            self.pixmap.pixels_mut()[idx] = ColorU8::from_rgba(r, g, b, 255).premultiply();
        }
    }

    /// True if the pixel exists and still holds the blank placeholder.
    #[inline]
    pub fn is_blank(&self, x: i32, y: i32, blank: Color) -> bool {
        self.pixel(x, y) == Some(blank.to_rgb8())
    }

    /// Paint a pixel only if it still holds the blank placeholder.
    ///
    /// Returns whether the pixel was painted.
    #[inline]
    pub fn paint_if_blank(&mut self, x: i32, y: i32, color: Color, blank: Color) -> bool {
        if !self.is_blank(x, y, blank) {
            return false;
        }
        self.set_pixel(x, y, color);
        true
    }

    /// Count pixels holding exactly `color` (after quantization).
    pub fn count_color(&self, color: Color) -> usize {
        let [r, g, b] = color.to_rgb8();
        self.pixmap
            .pixels()
            .iter()
            .filter(|p| p.red() == r && p.green() == g && p.blue() == b)
            .count()
    }

    /// Fill the interior of a contour with a flat color.
    ///
    /// The contour's first coordinate is the raster x axis.
    pub fn fill_contour(&mut self, contour: &Contour, color: Color) {
        let Some(path) = contour_path(contour) else {
            return;
        };
        let paint = solid_paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
    }

    /// Draw the contour outline as a 1px hairline.
    pub fn stroke_contour(&mut self, contour: &Contour, color: Color) {
        let Some(path) = contour_path(contour) else {
            return;
        };
        let paint = solid_paint(color);
        // Width 0 selects tiny-skia's connected hairline rasterizer
        let stroke = Stroke {
            width: 0.0,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fill a disk centered on pixel `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(
            cx as f32 + PIXEL_CENTER,
            cy as f32 + PIXEL_CENTER,
            radius,
        ) else {
            return;
        };
        let paint = solid_paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Copy the canvas into an `image` buffer.
    pub fn to_image(&self) -> Result<RgbaImage> {
        let size = self.size();
        RgbaImage::from_raw(size, size, self.pixmap.data().to_vec())
            .ok_or(FlowerError::InvalidCanvasSize(size))
    }

    /// Encode the canvas as an RGB PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let rgb = DynamicImage::ImageRgba8(self.to_image()?).to_rgb8();
        rgb.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let [r, g, b] = color.to_rgb8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

fn contour_path(contour: &Contour) -> Option<tiny_skia::Path> {
    let (first, rest) = contour.points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.row as f32 + PIXEL_CENTER, first.col as f32 + PIXEL_CENTER);
    for p in rest {
        pb.line_to(p.row as f32 + PIXEL_CENTER, p.col as f32 + PIXEL_CENTER);
    }
    pb.close();
    pb.finish()
}
