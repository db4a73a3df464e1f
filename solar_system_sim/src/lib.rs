pub mod app;
pub mod body;
pub mod constants;
pub mod render;
pub mod scenario;
pub mod system;

pub use body::{Body, Vec2};
pub use render::{CanvasSurface, Point2, Surface, Viewport};
pub use scenario::{BodyConfig, ScenarioConfig};
pub use system::{SolarSystem, StepOrder};
