// Which ring slot is blank, and how long each frame stays on screen.

use std::time::Duration;

use log::debug;

use crate::constants::{FRAME_PERIOD_STEP_MS, INITIAL_FRAME_PERIOD_MS, MIN_FRAME_PERIOD_MS};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    n_circles: usize,
    mask_pos: usize,
    frame_period_ms: u64,
}

impl AnimationState {
    /// Start with slot 0 blanked and the default period.
    pub fn new(n_circles: usize) -> Result<Self, Error> {
        if n_circles == 0 {
            return Err(Error::Config("ring needs at least one slot".into()));
        }
        Ok(Self { n_circles, mask_pos: 0, frame_period_ms: INITIAL_FRAME_PERIOD_MS })
    }

    pub fn mask_pos(&self) -> usize {
        self.mask_pos
    }

    pub fn frame_period_ms(&self) -> u64 {
        self.frame_period_ms
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_period_ms)
    }

    /// Move the blank one slot along, wrapping.
    pub fn advance(&mut self) {
        self.mask_pos = (self.mask_pos + 1) % self.n_circles;
    }

    /// Shorter period. A step that would go below one refresh tick is
    /// ignored, so the period only ever moves in whole steps.
    pub fn speed_up(&mut self) {
        if self.frame_period_ms >= MIN_FRAME_PERIOD_MS + FRAME_PERIOD_STEP_MS {
            self.frame_period_ms -= FRAME_PERIOD_STEP_MS;
        }
        debug!("frame period {} ms", self.frame_period_ms);
    }

    /// Longer period, no upper bound.
    pub fn slow_down(&mut self) {
        self.frame_period_ms = self.frame_period_ms.saturating_add(FRAME_PERIOD_STEP_MS);
        debug!("frame period {} ms", self.frame_period_ms);
    }
}
