//! Drawing surface abstraction and the meters-to-pixels mapping.
//!
//! Bodies never talk to ggez directly. They draw onto a [`Surface`], which
//! exposes the handful of immediate-mode primitives the viewer needs. The
//! real window uses [`CanvasSurface`]; tests substitute a recorder.

use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::{Context, GameResult, glam};

use crate::constants::{SCALE, TRAIL_WIDTH};
use crate::body::Vec2;

/// Screen-space point, as used by ggez for drawing.
pub type Point2 = glam::Vec2;

/// Immediate-mode 2D drawing API.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> GameResult;
    /// Connected segments through `points` in order.
    fn stroke_polyline(&mut self, points: &[Point2], color: Color) -> GameResult;
    fn fill_circle(&mut self, center: Point2, radius: f32, color: Color) -> GameResult;
    fn draw_text(&mut self, position: Point2, text: &str, color: Color) -> GameResult;
}

/// Size of the area being drawn into, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Physical position (meters) to pixel coordinates.
    ///
    /// The mapping is a fixed linear zoom centered on the viewport midpoint:
    /// `pixel = physical * SCALE + dimension / 2`.
    pub fn to_pixel(&self, position: &Vec2) -> Vec2 {
        Vec2::new(
            position.x * SCALE + self.width / 2.0,
            position.y * SCALE + self.height / 2.0,
        )
    }

    /// Same as [`Viewport::to_pixel`], narrowed to ggez's `f32` points.
    pub fn to_screen(&self, position: &Vec2) -> Point2 {
        let pixel = self.to_pixel(position);
        Point2::new(pixel.x as f32, pixel.y as f32)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// [`Surface`] backed by a ggez canvas for the current frame.
pub struct CanvasSurface<'a> {
    ctx: &'a Context,
    canvas: &'a mut Canvas,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a Context, canvas: &'a mut Canvas) -> Self {
        CanvasSurface { ctx, canvas }
    }
}

impl Surface for CanvasSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> GameResult {
        self.canvas
            .draw(&graphics::Quad, DrawParam::new().dest_rect(rect).color(color));
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point2], color: Color) -> GameResult {
        // Consecutive duplicates (a nearly stationary sun) would give lyon a
        // zero-length segment to tessellate.
        let mut path: Vec<Point2> = Vec::with_capacity(points.len());
        for point in points {
            if path.last() != Some(point) {
                path.push(*point);
            }
        }
        if path.len() < 2 {
            return Ok(());
        }

        let line = Mesh::new_line(self.ctx, &path, TRAIL_WIDTH, color)?;
        self.canvas.draw(&line, DrawParam::default());
        Ok(())
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Color) -> GameResult {
        let circle_mesh = Mesh::new_circle(self.ctx, DrawMode::fill(), center, radius, 0.1, color)?;
        self.canvas.draw(&circle_mesh, DrawParam::default());
        Ok(())
    }

    fn draw_text(&mut self, position: Point2, text: &str, color: Color) -> GameResult {
        let text = graphics::Text::new(text);
        self.canvas
            .draw(&text, DrawParam::new().dest(position).color(color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AU;

    #[test]
    fn origin_maps_to_viewport_center() {
        let view = Viewport::new(1000.0, 850.0);
        let pixel = view.to_pixel(&Vec2::zeros());
        assert_eq!(pixel, Vec2::new(500.0, 425.0));
    }

    #[test]
    fn one_au_is_250_pixels() {
        let view = Viewport::new(1000.0, 850.0);
        let pixel = view.to_pixel(&Vec2::new(-AU, AU));
        assert!((pixel.x - 250.0).abs() < 1e-9);
        assert!((pixel.y - 675.0).abs() < 1e-9);
    }
}
