//! Physical and rendering constants shared by the simulation and the viewer.

// --- Simulation Constants ---
// Units: meters, kilograms, seconds
pub const AU: f64 = 149.6e6 * 1000.0; // Astronomical unit in meters
pub const G: f64 = 6.67428e-11; // Gravitational constant in m^3 / (kg * s^2)
pub const TIMESTEP: f64 = 3600.0 * 24.0; // One simulated day per step
pub const MIN_DISTANCE: f64 = 1e-10; // Floor for pair separation (prevents division by zero)
pub const TRAIL_LENGTH: usize = 680; // Past positions kept per body
pub const STEPS_PER_YEAR: u64 = 365;

// --- Graphics Constants ---
pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 850.0;
// 1 AU = 250 pixels, centered on the viewport midpoint
pub const SCALE: f64 = 250.0 / AU;
pub const TARGET_FPS: u32 = 60; // ~16ms per physics step
pub const WINDOW_TITLE: &str = "Solar System Simulation";
pub const TRAIL_WIDTH: f32 = 1.0;
pub const LABEL_OFFSET: f32 = 28.0; // Gap between a body's center and its distance label
