//! 2D glyph primitives and the per-scene draw list
//!
//! A scene is described as an ordered list of shapes before anything touches
//! pixels. Later shapes paint over earlier ones.

use crate::core::config::Rgb;
use crate::foundation::math::Point2;

/// Shape primitives the canvas can rasterize
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Line segment from start to end
    Line {
        /// First endpoint
        start: Point2,
        /// Second endpoint
        end: Point2,
        /// Fill color
        color: Rgb,
        /// Stroke width in pixels
        width: f64,
    },

    /// Filled disc at center with radius
    Disc {
        /// Disc center
        center: Point2,
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: Rgb,
    },
}

impl Shape {
    /// Color the shape is filled with
    pub const fn color(&self) -> Rgb {
        match self {
            Self::Line { color, .. } | Self::Disc { color, .. } => *color,
        }
    }

    /// Axis-aligned bounds `(min, max)` including stroke width
    pub fn bounds(&self) -> (Point2, Point2) {
        match self {
            Self::Line { start, end, width, .. } => {
                let pad = line_half_width(*width);
                (
                    Point2::new(start.x.min(end.x) - pad, start.y.min(end.y) - pad),
                    Point2::new(start.x.max(end.x) + pad, start.y.max(end.y) + pad),
                )
            }
            Self::Disc { center, radius, .. } => (
                Point2::new(center.x - radius, center.y - radius),
                Point2::new(center.x + radius, center.y + radius),
            ),
        }
    }
}

/// Half-width of a stroke; thin strokes still cover one pixel
pub fn line_half_width(width: f64) -> f64 {
    (width / 2.0).max(0.5)
}

/// Ordered collection of shapes making up one frame
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line segment
    pub fn draw_line(&mut self, start: Point2, end: Point2, color: Rgb, width: f64) {
        self.shapes.push(Shape::Line { start, end, color, width });
    }

    /// Add a filled disc
    pub fn draw_disc(&mut self, center: Point2, radius: f64, color: Rgb) {
        self.shapes.push(Shape::Disc { center, radius, color });
    }

    /// Shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_keeps_paint_order() {
        let mut list = DrawList::new();
        list.draw_disc(Point2::new(10.0, 10.0), 3.0, [255, 200, 0]);
        list.draw_line(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0), [0, 0, 0], 2.0);

        assert_eq!(list.shapes().len(), 2);
        assert!(matches!(list.shapes()[0], Shape::Disc { .. }));
        assert_eq!(list.shapes()[1].color(), [0, 0, 0]);
    }

    #[test]
    fn test_line_bounds_include_stroke() {
        let line = Shape::Line {
            start: Point2::new(10.0, 20.0),
            end: Point2::new(4.0, 30.0),
            color: [0, 0, 0],
            width: 2.0,
        };
        let (min, max) = line.bounds();
        assert_eq!(min, Point2::new(3.0, 19.0));
        assert_eq!(max, Point2::new(11.0, 31.0));
    }

    #[test]
    fn test_thin_lines_keep_minimum_width() {
        assert_eq!(line_half_width(0.0), 0.5);
        assert_eq!(line_half_width(4.0), 2.0);
    }
}
