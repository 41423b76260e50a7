//! Square RGB raster target
//!
//! Discs are filled by testing pixel indices against the radius, so a disc
//! of radius `r` at an integer center spans `2r + 1` pixels. Lines sample
//! pixel centers against the stroke half-width, so an axis-aligned stroke of
//! even width covers exactly that many rows or columns.

use std::path::Path;

use image::{ImageFormat, Rgb as Pixel, RgbImage};

use super::shapes::{line_half_width, DrawList, Shape};
use super::RenderError;
use crate::core::config::Rgb;
use crate::foundation::math::{Point2, Vec2};

/// Square canvas backed by an [`RgbImage`]
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas of side `size` filled with `background`
    pub fn new(size: u32, background: Rgb) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidCanvas(size));
        }
        Ok(Self {
            image: RgbImage::from_pixel(size, size, Pixel(background)),
        })
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Color at a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Rasterize one shape; parts outside the canvas are skipped
    pub fn draw_shape(&mut self, shape: &Shape) {
        let color = shape.color();
        let (min, max) = shape.bounds();
        match shape {
            Shape::Disc { center, radius, .. } => {
                let r2 = radius * radius;
                self.fill_where(min, max, color, |x, y| {
                    let dx = x - center.x;
                    let dy = y - center.y;
                    dx * dx + dy * dy <= r2
                });
            }
            Shape::Line { start, end, width, .. } => {
                let half = line_half_width(*width);
                let (start, end) = (*start, *end);
                self.fill_where(min, max, color, |x, y| {
                    distance_to_segment(Point2::new(x + 0.5, y + 0.5), start, end) <= half
                });
            }
        }
    }

    /// Rasterize every shape of a draw list in order
    pub fn draw_all(&mut self, list: &DrawList) {
        for shape in list.shapes() {
            self.draw_shape(shape);
        }
    }

    /// Borrow the underlying image
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, returning the image
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Paint pixels inside the bounds for which `covered(x, y)` holds
    fn fill_where(&mut self, min: Point2, max: Point2, color: Rgb, covered: impl Fn(f64, f64) -> bool) {
        let last = f64::from(self.size() - 1);
        if max.x < 0.0 || max.y < 0.0 || min.x > last || min.y > last {
            return;
        }
        let x0 = min.x.floor().clamp(0.0, last) as u32;
        let x1 = max.x.ceil().clamp(0.0, last) as u32;
        let y0 = min.y.floor().clamp(0.0, last) as u32;
        let y1 = max.y.ceil().clamp(0.0, last) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if covered(f64::from(x), f64::from(y)) {
                    self.image.put_pixel(x, y, Pixel(color));
                }
            }
        }
    }
}

/// Save an RGB image as PNG
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Euclidean distance from `p` to the segment `a`-`b`
fn distance_to_segment(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab: Vec2 = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
