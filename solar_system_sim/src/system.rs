//! The owned body collection and the per-frame physics step.

use clap::ValueEnum;
use ggez::GameResult;
use ggez::graphics::Color;
use log::debug;
use serde::Deserialize;

use crate::body::{Body, Vec2};
use crate::constants::{STEPS_PER_YEAR, TIMESTEP};
use crate::render::{Surface, Viewport};
use crate::scenario::ScenarioConfig;

pub const BACKGROUND: Color = Color::BLACK;

/// How bodies see each other within a single step.
#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepOrder {
    /// Bodies update one after another in collection order, each against the
    /// live state of the rest. Later bodies see earlier bodies already moved.
    #[default]
    Sequential,
    /// All net forces come from the same snapshot, then every body moves.
    Phased,
}

#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<Body>,
    step_order: StepOrder,
    steps: u64,
}

impl SolarSystem {
    pub fn new(bodies: Vec<Body>, step_order: StepOrder) -> Self {
        SolarSystem { bodies, step_order, steps: 0 }
    }

    /// The default sun and four inner planets.
    pub fn inner_planets() -> Self {
        Self::from_scenario(&ScenarioConfig::inner_planets())
    }

    pub fn from_scenario(scenario: &ScenarioConfig) -> Self {
        Self::new(scenario.build_bodies(), scenario.step_order.unwrap_or_default())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn sun(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_sun())
    }

    pub fn step_order(&self) -> StepOrder {
        self.step_order
    }

    pub fn set_step_order(&mut self, step_order: StepOrder) {
        self.step_order = step_order;
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.steps as f64 * TIMESTEP
    }

    /// Advances every body by one timestep.
    pub fn step(&mut self) {
        match self.step_order {
            StepOrder::Sequential => self.step_sequential(),
            StepOrder::Phased => self.step_phased(),
        }

        self.steps += 1;
        if self.steps % STEPS_PER_YEAR == 0 {
            debug!("simulated {} years", self.steps / STEPS_PER_YEAR);
        }
    }

    fn step_sequential(&mut self) {
        for i in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((current, after)) = rest.split_first_mut() {
                current.update_position(before.iter().chain(after.iter()));
            }
        }
    }

    fn step_phased(&mut self) {
        let mut forces = vec![Vec2::zeros(); self.bodies.len()];
        for (i, force) in forces.iter_mut().enumerate() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((current, after)) = rest.split_first_mut() {
                *force = current.net_force(before.iter().chain(after.iter()));
            }
        }

        for (body, force) in self.bodies.iter_mut().zip(forces) {
            body.apply_force(force);
        }
    }

    /// Clears the viewport and draws every body in collection order.
    pub fn draw(&self, surface: &mut impl Surface, viewport: &Viewport) -> GameResult {
        surface.fill_rect(viewport.rect(), BACKGROUND)?;
        for body in &self.bodies {
            body.draw(surface, viewport)?;
        }
        Ok(())
    }
}
