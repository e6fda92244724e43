// What you SEE:
// • A white 1024x1024 window with a black "+" in the middle.
// • Twelve blurred lilac disks in a ring around it, one of them missing.
// • The gap jumps one slot per frame; stare at the "+" and a green disk
//   appears to chase around the ring.
// • Right arrow: faster. Left arrow: slower. ESC quits.

mod animation;
mod assets;
mod chaser;
mod constants;
mod draw;
mod error;
mod geometry;
mod input;
mod types;

use std::process::ExitCode;

use chaser::{Chaser, ChaserConfig};
use draw::Drawer;
use error::Error;
use log::{error, info};

fn run(config: &ChaserConfig) -> Result<(), Error> {
    /* --- Window, then bitmaps ---
       Visual: the window opens before anything is loaded into it. */
    let drawer = Drawer::new(constants::WINDOW_TITLE, config.width, config.height)?;
    let mut chaser = Chaser::new(drawer, config)?;

    /* --- Main loop ---
       Visual: one frame per period until ESC or the close button. */
    chaser.run(std::thread::sleep)?;

    // bitmaps go first, then the window
    let drawer = chaser.into_surface();
    drop(drawer);
    info!("window closed");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&ChaserConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
