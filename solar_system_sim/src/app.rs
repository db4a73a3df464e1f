use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::graphics::Canvas;
use ggez::{Context, ContextBuilder, GameError, GameResult};
use log::info;

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};
use crate::render::{CanvasSurface, Viewport};
use crate::system::{BACKGROUND, SolarSystem};

// --- Game State ---
pub struct GameState {
    system: SolarSystem,
}

impl GameState {
    pub fn new(system: SolarSystem) -> GameState {
        GameState { system }
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }
}

impl EventHandler<GameError> for GameState {
    // One simulated day per 1/60 s of wall clock, independent of draw rate
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TARGET_FPS) {
            self.system.step();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let (width, height) = ctx.gfx.drawable_size();
        let viewport = Viewport::new(width as f64, height as f64);

        let mut canvas = Canvas::from_frame(ctx, BACKGROUND);
        {
            let mut surface = CanvasSurface::new(ctx, &mut canvas);
            self.system.draw(&mut surface, &viewport)?;
        }
        canvas.finish(ctx)?;

        Ok(())
    }
}

/// Opens the window and hands control to the ggez event loop. Never returns
/// on success.
pub fn run(system: SolarSystem) -> GameResult {
    let (ctx, event_loop) = ContextBuilder::new("solar_system_sim", "solar_system_sim")
        .window_setup(WindowSetup::default().title(WINDOW_TITLE))
        .window_mode(
            WindowMode::default()
                .dimensions(SCREEN_WIDTH, SCREEN_HEIGHT)
                .resizable(true),
        )
        .build()?;

    info!(
        "starting viewer with {} bodies ({:?} step order)",
        system.bodies().len(),
        system.step_order()
    );

    let state = GameState::new(system);
    event::run(ctx, event_loop, state)
}

