// Loads the bitmaps the scene is drawn from.
// The `image` crate picks the decoder from the file contents, so BMP is the
// expected format but PNG etc. load the same way.

use std::path::Path;

use log::info;

use crate::error::Error;
use crate::types::Sprite;

/// Read and decode one image file into a sprite.
pub fn load_sprite(path: &Path) -> Result<Sprite, Error> {
    let img = image::open(path)
        .map_err(|source| Error::AssetLoad { path: path.to_path_buf(), source })?
        .to_rgba8();

    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyAsset { path: path.to_path_buf() });
    }

    let sprite = Sprite::from_rgba(&img);
    info!("loaded {} ({}x{})", path.display(), sprite.width, sprite.height);
    Ok(sprite)
}

/// The sprite plus the optional help label.
pub struct Assets {
    pub sprite: Sprite,
    pub label: Option<Sprite>,
}

impl Assets {
    pub fn load(sprite_path: &Path, label_path: Option<&Path>) -> Result<Self, Error> {
        let sprite = load_sprite(sprite_path)?;
        let label = label_path.map(load_sprite).transpose()?;
        Ok(Self { sprite, label })
    }
}
