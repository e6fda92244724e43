// Keyboard/window input: filter the raw platform input down to what the
// chaser reacts to, then apply each event to the animation state.

use std::cell::RefCell;
use std::rc::Rc;

use minifb::{InputCallback, Key};

use crate::animation::AnimationState;

/// The only events the loop ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close button.
    Quit,
    /// Key went down (including auto-repeat).
    KeyDown(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Key-down queue fed by minifb as the platform reports presses, so a tap
/// that goes down and up between two polls is still seen once.
/// Clones share the same queue: one goes to the window, one stays with us.
#[derive(Clone, Default)]
pub struct KeyQueue {
    pressed: Rc<RefCell<Vec<Key>>>,
}

impl KeyQueue {
    /// Take everything pressed since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Key> {
        std::mem::take(&mut *self.pressed.borrow_mut())
    }
}

impl InputCallback for KeyQueue {
    fn add_char(&mut self, _uni_char: u32) {}

    fn set_key_state(&mut self, key: Key, state: bool) {
        if state {
            self.pressed.borrow_mut().push(key);
        }
    }
}

fn is_bound(key: Key) -> bool {
    matches!(key, Key::Escape | Key::Left | Key::Right)
}

/// Turn one poll of the window into relevant events.
/// Close comes first so a quit in the same frame as a key press wins.
pub fn filter_events(window_open: bool, keys_pressed: &[Key]) -> Vec<InputEvent> {
    let mut out = Vec::with_capacity(keys_pressed.len() + 1);
    if !window_open {
        out.push(InputEvent::Quit);
    }
    out.extend(keys_pressed.iter().copied().filter(|k| is_bound(*k)).map(InputEvent::KeyDown));
    out
}

/// Apply one event.
pub fn dispatch(event: InputEvent, state: &mut AnimationState) -> Flow {
    match event {
        InputEvent::Quit => Flow::Stop,
        InputEvent::KeyDown(Key::Escape) => Flow::Stop,
        InputEvent::KeyDown(Key::Right) => {
            state.speed_up();
            Flow::Continue
        }
        InputEvent::KeyDown(Key::Left) => {
            state.slow_down();
            Flow::Continue
        }
        InputEvent::KeyDown(_) => Flow::Continue,
    }
}

/// Drain a whole batch. Every event is applied even after a stop, matching
/// a queue that is always emptied before the frame sleep.
pub fn dispatch_all(events: &[InputEvent], state: &mut AnimationState) -> Flow {
    let mut flow = Flow::Continue;
    for ev in events {
        if dispatch(*ev, state) == Flow::Stop {
            flow = Flow::Stop;
        }
    }
    flow
}
