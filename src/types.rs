// Core pixel types shared by the loader, the renderer and the window.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // canvas width in pixels
    pub height: usize,     // canvas height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Fill every pixel with one colour.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Colour at (x,y), or None outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// An immutable bitmap, decoded once and blitted many times per frame.
/// Pixels are packed 0xAARRGGBB; BMP files without alpha come out opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,  // length = width * height, row-major
}

impl Sprite {
    /// Pack a decoded RGBA image.
    pub fn from_rgba(img: &image::RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
            })
            .collect();
        Self { width: w as usize, height: h as usize, pixels }
    }
}
