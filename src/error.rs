// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing the frame buffer to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Reading or decoding an image file failed.
    #[error("Problem loading \"{}\": {source}", .path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A setting the loop cannot run with.
    #[error("Config error: {0}")]
    Config(String),

    /// The image decoded fine but has nothing to draw.
    #[error("Problem loading \"{}\": image is empty", .path.display())]
    EmptyAsset { path: PathBuf },
}
