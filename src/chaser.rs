// The render loop: one owning context for the window, the bitmaps and the
// animation state.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::animation::AnimationState;
use crate::assets::Assets;
use crate::constants::{
    BACKGROUND, CROSS_COLOR, CROSS_HALF_LENGTH, CROSS_WIDTH, DISTANCE, LABEL_FILE, N_CIRCLES,
    RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH, SPRITE_FILE,
};
use crate::draw::{draw_lilac_circle, SceneStyle, Surface};
use crate::error::Error;
use crate::input::{dispatch_all, Flow};
use crate::types::FrameBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaserConfig {
    pub width: usize,
    pub height: usize,
    pub sprite_path: PathBuf,
    /// None turns the help label off.
    pub label_path: Option<PathBuf>,
    pub n_circles: usize,
    /// Nominal disk radius; the drawn footprint is the sprite's own size.
    pub radius: i32,
    pub distance: i32,
}

impl Default for ChaserConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            sprite_path: PathBuf::from(SPRITE_FILE),
            label_path: Some(PathBuf::from(LABEL_FILE)),
            n_circles: N_CIRCLES,
            radius: RADIUS,
            distance: DISTANCE,
        }
    }
}

impl ChaserConfig {
    fn style(&self) -> SceneStyle {
        SceneStyle {
            n_circles: self.n_circles,
            distance: self.distance,
            background: BACKGROUND,
            cross_half_length: CROSS_HALF_LENGTH,
            cross_width: CROSS_WIDTH,
            cross_color: CROSS_COLOR,
        }
    }
}

pub struct Chaser<S: Surface> {
    surface: S,
    assets: Assets,
    screen: FrameBuffer,
    style: SceneStyle,
    state: AnimationState,
}

impl<S: Surface> Chaser<S> {
    /// Load the bitmaps for an already-open surface.
    pub fn new(surface: S, config: &ChaserConfig) -> Result<Self, Error> {
        let state = AnimationState::new(config.n_circles)?;
        let assets = Assets::load(&config.sprite_path, config.label_path.as_deref())?;

        let diameter = 2 * config.radius;
        if assets.sprite.width as i32 != diameter || assets.sprite.height as i32 != diameter {
            warn!(
                "sprite is {}x{}, ring is laid out for {}px disks",
                assets.sprite.width, assets.sprite.height, diameter
            );
        }

        Ok(Self {
            surface,
            assets,
            screen: FrameBuffer::new(config.width, config.height, BACKGROUND),
            style: config.style(),
            state,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[cfg(test)]
    pub fn screen(&self) -> &FrameBuffer {
        &self.screen
    }

    /// One iteration: draw, present, advance, drain input.
    /// Returns whether the loop should keep going.
    pub fn step(&mut self) -> Result<Flow, Error> {
        draw_lilac_circle(
            &mut self.screen,
            &self.assets.sprite,
            self.assets.label.as_ref(),
            &self.style,
            self.state.mask_pos(),
        );
        self.surface.present(&self.screen)?;

        self.state.advance();

        let events = self.surface.poll_events();
        Ok(dispatch_all(&events, &mut self.state))
    }

    /// Run until Escape or the window closes. `sleep` holds each frame on
    /// screen for the current period.
    pub fn run(&mut self, mut sleep: impl FnMut(Duration)) -> Result<(), Error> {
        let mut running = true;
        while running {
            let start = Instant::now();

            running = self.step()? == Flow::Continue;
            sleep(self.state.frame_period());

            let delta_time = start.elapsed().as_secs_f64() * 1000.0;
            println!("delta_time = {:.1}", delta_time);
        }
        info!("stopped at frame period {} ms", self.state.frame_period_ms());
        Ok(())
    }

    /// Give the surface back, dropping the bitmaps.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
