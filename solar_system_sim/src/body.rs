//! A single point mass: its state, its pull on others, and how it draws itself.

use std::collections::VecDeque;

use ggez::GameResult;
use ggez::graphics::Color;
use nalgebra::Vector2;

use crate::constants::{AU, G, LABEL_OFFSET, MIN_DISTANCE, TIMESTEP, TRAIL_LENGTH};
use crate::render::{Point2, Surface, Viewport};

// Define a type alias for better readability
pub type Vec2 = Vector2<f64>;

/// Trails with fewer samples than this are not drawn.
const MIN_TRAIL_SAMPLES: usize = 3;

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    mass: f64,     // kg
    radius: u32,   // pixels, drawing only
    color: Color,
    is_sun: bool,
    position: Vec2, // m
    velocity: Vec2, // m/s
    distance_to_sun: f64,
    trail: VecDeque<Vec2>, // oldest first
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: u32,
        color: Color,
        position: Vec2,
        velocity: Vec2,
    ) -> Self {
        Body {
            name: name.into(),
            mass,
            radius,
            color,
            is_sun: false,
            position,
            velocity,
            distance_to_sun: 0.0,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Marks this body as the central mass whose distance gets labelled.
    pub fn sun(mut self) -> Self {
        self.is_sun = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_sun(&self) -> bool {
        self.is_sun
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Last measured distance to the sun in meters, 0 until first measured.
    pub fn distance_to_sun(&self) -> f64 {
        self.distance_to_sun
    }

    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    /// Gravitational force exerted BY `other` ON `self`.
    ///
    /// Records the separation into `distance_to_sun` when `other` is the sun.
    pub fn attraction(&mut self, other: &Body) -> Vec2 {
        let distance_vec = other.position - self.position;
        let mut distance = distance_vec.norm();

        if other.is_sun {
            self.distance_to_sun = distance;
        }

        // Coincident bodies would otherwise divide by zero
        if distance < MIN_DISTANCE {
            distance = MIN_DISTANCE;
        }

        let force_magnitude = G * self.mass * other.mass / (distance * distance);

        distance_vec * force_magnitude / distance
    }

    /// Sum of the attractions from every body in `others`, in iteration order.
    pub fn net_force<'a>(&mut self, others: impl IntoIterator<Item = &'a Body>) -> Vec2 {
        let mut total_force = Vec2::zeros();
        for other in others {
            total_force += self.attraction(other);
        }
        total_force
    }

    /// Advances one timestep under `total_force` using explicit Euler, then
    /// records the new position in the trail.
    pub fn apply_force(&mut self, total_force: Vec2) {
        self.velocity += total_force / self.mass * TIMESTEP;
        self.position += self.velocity * TIMESTEP;

        self.trail.push_back(self.position);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// One full step against every other body. `others` must not contain `self`.
    pub fn update_position<'a>(&mut self, others: impl IntoIterator<Item = &'a Body>) {
        let total_force = self.net_force(others);
        self.apply_force(total_force);
    }

    pub fn draw(&self, surface: &mut impl Surface, viewport: &Viewport) -> GameResult {
        if self.trail.len() >= MIN_TRAIL_SAMPLES {
            let points: Vec<Point2> = self.trail.iter().map(|p| viewport.to_screen(p)).collect();
            surface.stroke_polyline(&points, self.color)?;
        }

        let screen_pos = viewport.to_screen(&self.position);
        surface.fill_circle(screen_pos, self.radius as f32, self.color)?;

        if !self.is_sun {
            let label = format!("{:.2} AU", self.distance_to_sun / AU);
            let label_pos = screen_pos + Point2::new(LABEL_OFFSET, 0.0);
            surface.draw_text(label_pos, &label, Color::WHITE)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_mass(mass: f64, x: f64) -> Body {
        Body::new("test", mass, 1, Color::WHITE, Vec2::new(x, 0.0), Vec2::zeros())
    }

    #[test]
    fn trail_starts_empty_and_grows_per_step() {
        let mut body = point_mass(1.0, 0.0);
        assert!(body.trail().is_empty());

        body.apply_force(Vec2::zeros());
        body.apply_force(Vec2::zeros());
        assert_eq!(body.trail().len(), 2);
    }

    #[test]
    fn no_force_means_constant_velocity() {
        let mut body = Body::new("drifter", 1.0, 1, Color::WHITE, Vec2::zeros(), Vec2::new(1.0, 0.0));
        body.apply_force(Vec2::zeros());
        assert_eq!(body.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(body.position(), Vec2::new(TIMESTEP, 0.0));
    }
}
