//! Initial conditions.
//!
//! The built-in table reproduces the inner solar system: a sun at the origin
//! and Mercury, Venus, Earth and Mars placed along the x axis with tangential
//! y velocities. A YAML file with the same shape can replace it:
//!
//! ```yaml
//! step_order: sequential   # or "phased"; optional
//! bodies:
//!   - name: Sun
//!     x_au: 0.0
//!     mass: 1.98892e30
//!     radius: 30
//!     color: [255, 255, 0]
//!     sun: true
//!   - name: Earth
//!     x_au: -1.0
//!     vy: 29783.0
//!     mass: 5.9742e24
//!     radius: 16
//!     color: [0, 0, 255]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use ggez::graphics::Color;
use log::{info, warn};
use serde::Deserialize;

use crate::body::{Body, Vec2};
use crate::constants::AU;
use crate::system::StepOrder;

/// Initial state for one body. Positions are in AU, velocities in m/s.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub x_au: f64,
    #[serde(default)]
    pub y_au: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    pub mass: f64,       // kg
    pub radius: u32,     // pixels
    pub color: [u8; 3],  // rgb
    #[serde(default)]
    pub sun: bool,
}

/// Top-level scenario file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub step_order: Option<StepOrder>,
    pub bodies: Vec<BodyConfig>,
}

impl BodyConfig {
    fn new(name: &str, x_au: f64, vy: f64, mass: f64, radius: u32, color: [u8; 3]) -> Self {
        BodyConfig {
            name: name.to_string(),
            x_au,
            y_au: 0.0,
            vx: 0.0,
            vy,
            mass,
            radius,
            color,
            sun: false,
        }
    }

    pub fn build(&self) -> Body {
        let [r, g, b] = self.color;
        let body = Body::new(
            self.name.clone(),
            self.mass,
            self.radius,
            Color::from_rgb(r, g, b),
            Vec2::new(self.x_au * AU, self.y_au * AU),
            Vec2::new(self.vx, self.vy),
        );
        if self.sun { body.sun() } else { body }
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.mass.is_finite() && self.mass > 0.0,
            "body `{}`: mass must be positive, got {}",
            self.name,
            self.mass
        );
        ensure!(self.radius > 0, "body `{}`: radius must be at least 1 pixel", self.name);
        ensure!(
            [self.x_au, self.y_au, self.vx, self.vy].iter().all(|v| v.is_finite()),
            "body `{}`: position and velocity must be finite",
            self.name
        );
        Ok(())
    }
}

impl ScenarioConfig {
    /// Sun, Mercury, Venus, Earth and Mars.
    pub fn inner_planets() -> Self {
        let mut sun = BodyConfig::new("Sun", 0.0, 0.0, 1.98892e30, 30, [255, 255, 0]);
        sun.sun = true;

        ScenarioConfig {
            step_order: None,
            bodies: vec![
                sun,
                BodyConfig::new("Mercury", 0.387, -47.4 * 1000.0, 3.30e23, 8, [128, 128, 128]),
                BodyConfig::new("Venus", 0.723, -35.02 * 1000.0, 4.8685e24, 14, [255, 255, 255]),
                BodyConfig::new("Earth", -1.0, 29.783 * 1000.0, 5.9742e24, 16, [0, 0, 255]),
                BodyConfig::new("Mars", -1.524, 24.077 * 1000.0, 6.39e23, 12, [255, 0, 0]),
            ],
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let scenario: ScenarioConfig =
            serde_yaml::from_str(source).context("invalid scenario yaml")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let scenario: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        scenario.validate()?;
        info!("loaded scenario {} with {} bodies", path.display(), scenario.bodies.len());
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.bodies.is_empty(), "scenario has no bodies");
        for body in &self.bodies {
            body.validate()?;
        }

        // Not required by the physics, only by the distance labels
        let suns = self.bodies.iter().filter(|b| b.sun).count();
        if suns != 1 {
            warn!("scenario has {suns} bodies flagged as sun, distance labels assume exactly one");
        }
        Ok(())
    }

    pub fn build_bodies(&self) -> Vec<Body> {
        self.bodies.iter().map(BodyConfig::build).collect()
    }
}
