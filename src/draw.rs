// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the frame buffer.
// 2) Thick lines for the fixation cross.
// 3) Sprite blits (the blurred disks and the help label).
// 4) The whole Lilac Chaser scene, built from the three above.

use log::info;
use minifb::{Window, WindowOptions};

use crate::error::Error;
use crate::geometry::ring_positions;
use crate::input::{filter_events, InputEvent, KeyQueue};
use crate::types::{FrameBuffer, Sprite};

/// What the chaser loop needs from a window.
pub trait Surface {
    /// Push the pixels for this frame to the screen.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error>;

    /// Everything relevant that happened since the last poll. Never blocks.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    keys: KeyQueue, // key-downs reported by the window since the last poll
}

impl Drawer {
    /// Create a fixed-size window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        let keys = KeyQueue::default();
        window.set_input_callback(Box::new(keys.clone()));
        info!("opened {width}x{height} window \"{title}\"");
        Ok(Self { window, keys })
    }
}

impl Surface for Drawer {
    /// Visual: the window immediately displays the new frame.
    /// This is also where minifb pumps the platform event queue.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Drains the key-down queue; the platform events themselves were
    /// pumped by the last `present`.
    fn poll_events(&mut self) -> Vec<InputEvent> {
        filter_events(self.window.is_open(), &self.keys.drain())
    }
}

/* ---------- Software drawing: pixels, lines, sprites ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Mix `src` (0xAARRGGBB) over the pixel at (x,y).
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, src: u32) {
    let a = src >> 24;
    match a {
        0 => {}
        255 => put_pixel(fb, x, y, src & 0x00_FF_FF_FF),
        _ => {
            let Some(dst) = fb.get(x, y) else { return };
            let mix = |shift: u32| {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                ((s * a + d * (255 - a) + 127) / 255) << shift
            };
            put_pixel(fb, x, y, mix(16) | mix(8) | mix(0));
        }
    }
}

/// Fill the rectangle with top-left (x,y) and size w*h, clipped.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Draw a `width`-pixel thick line between (x0,y0) and (x1,y1), both ends
/// included. Horizontal and vertical lines are exact rectangles; anything
/// else is a Bresenham walk with a square brush.
pub fn draw_thick_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: u32) {
    let width = width.max(1);
    let lo = -(width / 2);

    if x0 == x1 {
        // vertical
        fill_rect(fb, x0 + lo, y0.min(y1), width, (y1 - y0).abs() + 1, color);
        return;
    }
    if y0 == y1 {
        // horizontal
        fill_rect(fb, x0.min(x1), y0 + lo, (x1 - x0).abs() + 1, width, color);
        return;
    }

    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        fill_rect(fb, x0 + lo, y0 + lo, width, width, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Fixation cross: a "+" of two thick strokes centred on (cx,cy).
pub fn draw_fixation_cross(fb: &mut FrameBuffer, cx: i32, cy: i32, half_length: i32, width: i32, color: u32) {
    draw_thick_line(fb, cx, cy - half_length, cx, cy + half_length, width, color);
    draw_thick_line(fb, cx - half_length, cy, cx + half_length, cy, width, color);
}

/// Copy a sprite with its top-left corner at (x,y), clipped to the canvas.
pub fn blit(fb: &mut FrameBuffer, sprite: &Sprite, x: i32, y: i32) {
    for sy in 0..sprite.height {
        let row = &sprite.pixels[sy * sprite.width..(sy + 1) * sprite.width];
        for (sx, &px) in row.iter().enumerate() {
            blend_pixel(fb, x + sx as i32, y + sy as i32, px);
        }
    }
}

/// Copy a sprite so its centre lands on (cx,cy).
pub fn blit_centered(fb: &mut FrameBuffer, sprite: &Sprite, cx: i32, cy: i32) {
    let x = cx - sprite.width as i32 / 2;
    let y = cy - sprite.height as i32 / 2;
    blit(fb, sprite, x, y);
}

/* ---------- The scene ---------- */

/// Ring layout and look of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStyle {
    pub n_circles: usize,
    pub distance: i32,
    pub background: u32,
    pub cross_half_length: i32,
    pub cross_width: i32,
    pub cross_color: u32,
}

/// Draw one full frame with slot `mask_pos` left empty.
/// Pure: same inputs, same pixels.
pub fn draw_lilac_circle(
    fb: &mut FrameBuffer,
    sprite: &Sprite,
    label: Option<&Sprite>,
    style: &SceneStyle,
    mask_pos: usize,
) {
    // 1) white background
    fb.clear(style.background);

    // 2) fixation cross at the canvas centre
    let cx = (fb.width / 2) as i32;
    let cy = (fb.height / 2) as i32;
    draw_fixation_cross(fb, cx, cy, style.cross_half_length, style.cross_width, style.cross_color);

    // 3) every ring slot except the masked one
    for (k, (x, y)) in ring_positions(style.n_circles, style.distance, cx, cy) {
        if k != mask_pos {
            blit_centered(fb, sprite, x, y);
        }
    }

    // 4) help text, centred near the bottom edge
    if let Some(label) = label {
        let x = (fb.width as i32 - label.width as i32) / 2;
        let y = fb.height as i32 - 2 * label.height as i32;
        blit(fb, label, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0x00_FF_FF_FF;
    const BLACK: u32 = 0x00_00_00_00;
    const LILAC: u32 = 0xFF_C8_A2_C8;

    fn style() -> SceneStyle {
        SceneStyle {
            n_circles: 12,
            distance: 300,
            background: WHITE,
            cross_half_length: 20,
            cross_width: 5,
            cross_color: BLACK,
        }
    }

    fn solid(w: usize, h: usize, px: u32) -> Sprite {
        Sprite { width: w, height: h, pixels: vec![px; w * h] }
    }

    #[test]
    fn cross_is_five_pixels_thick_and_forty_one_long() {
        let mut fb = FrameBuffer::new(101, 101, WHITE);
        draw_fixation_cross(&mut fb, 50, 50, 20, 5, BLACK);

        // vertical stroke
        for y in 30..=70 {
            for x in 48..=52 {
                assert_eq!(fb.get(x, y), Some(BLACK), "({x},{y})");
            }
        }
        assert_eq!(fb.get(47, 40), Some(WHITE));
        assert_eq!(fb.get(53, 40), Some(WHITE));
        assert_eq!(fb.get(50, 29), Some(WHITE));
        assert_eq!(fb.get(50, 71), Some(WHITE));

        // horizontal stroke
        for x in 30..=70 {
            assert_eq!(fb.get(x, 50), Some(BLACK));
        }
        assert_eq!(fb.get(29, 50), Some(WHITE));
        assert_eq!(fb.pixels.iter().filter(|&&p| p == BLACK).count(), 2 * 5 * 41 - 25);
    }

    #[test]
    fn reversed_endpoints_draw_the_same_stroke() {
        let mut a = FrameBuffer::new(20, 20, WHITE);
        let mut b = FrameBuffer::new(20, 20, WHITE);
        draw_thick_line(&mut a, 3, 10, 16, 10, 3, BLACK);
        draw_thick_line(&mut b, 16, 10, 3, 10, 3, BLACK);
        assert_eq!(a, b);
        assert_eq!(a.pixels.iter().filter(|&&p| p == BLACK).count(), 14 * 3);
    }

    #[test]
    fn diagonal_line_touches_both_ends() {
        let mut fb = FrameBuffer::new(20, 20, WHITE);
        draw_thick_line(&mut fb, 2, 2, 15, 9, 1, BLACK);
        assert_eq!(fb.get(2, 2), Some(BLACK));
        assert_eq!(fb.get(15, 9), Some(BLACK));
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut fb = FrameBuffer::new(10, 10, WHITE);
        blit_centered(&mut fb, &solid(6, 6, 0xFF_00_00_FF), 0, 9);
        assert_eq!(fb.get(0, 9), Some(0x00_00_00_FF));
        assert_eq!(fb.get(2, 6), Some(0x00_00_00_FF));
        assert_eq!(fb.get(3, 9), Some(WHITE));
        assert_eq!(fb.get(0, 5), Some(WHITE));
    }

    #[test]
    fn alpha_is_blended_over_background() {
        let mut fb = FrameBuffer::new(3, 1, WHITE);
        let sprite = Sprite { width: 3, height: 1, pixels: vec![0x00_00_00_00, 0x80_00_00_00, 0xFF_00_00_00] };
        blit(&mut fb, &sprite, 0, 0);
        assert_eq!(fb.get(0, 0), Some(WHITE));
        assert_eq!(fb.get(1, 0), Some(0x00_7F_7F_7F));
        assert_eq!(fb.get(2, 0), Some(BLACK));
    }

    #[test]
    fn masked_slot_is_left_blank() {
        let mut fb = FrameBuffer::new(1024, 1024, 0);
        let sprite = solid(9, 9, LILAC);
        draw_lilac_circle(&mut fb, &sprite, None, &style(), 0);

        // slot 0 is at (812,512): omitted
        assert_eq!(fb.get(812, 512), Some(WHITE));
        // slot 3 at (512,812) and slot 9 at (512,212): drawn
        assert_eq!(fb.get(512, 812), Some(LILAC & 0x00_FF_FF_FF));
        assert_eq!(fb.get(512, 212), Some(LILAC & 0x00_FF_FF_FF));
        // cross centre
        assert_eq!(fb.get(512, 512), Some(BLACK));
    }

    #[test]
    fn exactly_one_slot_missing_for_every_mask() {
        let sprite = solid(5, 5, LILAC);
        let st = style();
        let mut fb = FrameBuffer::new(1024, 1024, 0);
        for mask in 0..st.n_circles {
            draw_lilac_circle(&mut fb, &sprite, None, &st, mask);
            let filled: Vec<usize> = ring_positions(st.n_circles, st.distance, 512, 512)
                .filter(|(_, (x, y))| fb.get(*x, *y) == Some(LILAC & 0x00_FF_FF_FF))
                .map(|(k, _)| k)
                .collect();
            assert_eq!(filled.len(), st.n_circles - 1);
            assert!(!filled.contains(&mask));
        }
    }

    #[test]
    fn label_sits_centred_near_bottom() {
        let mut fb = FrameBuffer::new(1024, 1024, 0);
        let label = solid(200, 30, 0xFF_00_00_00);
        draw_lilac_circle(&mut fb, &solid(1, 1, LILAC), Some(&label), &style(), 0);

        // x in 412..612, y in 964..994
        assert_eq!(fb.get(412, 964), Some(BLACK));
        assert_eq!(fb.get(611, 993), Some(BLACK));
        assert_eq!(fb.get(411, 964), Some(WHITE));
        assert_eq!(fb.get(612, 964), Some(WHITE));
        assert_eq!(fb.get(500, 963), Some(WHITE));
        assert_eq!(fb.get(500, 994), Some(WHITE));
    }

    #[test]
    fn rendering_is_idempotent() {
        let sprite = solid(40, 40, LILAC);
        let label = solid(100, 10, 0xFF_33_33_33);
        let mut a = FrameBuffer::new(1024, 1024, 0);
        let mut b = FrameBuffer::new(1024, 1024, 0x00_AB_CD_EF);
        draw_lilac_circle(&mut a, &sprite, Some(&label), &style(), 5);
        draw_lilac_circle(&mut b, &sprite, Some(&label), &style(), 5);
        assert_eq!(a, b);
        draw_lilac_circle(&mut a, &sprite, Some(&label), &style(), 5);
        assert_eq!(a, b);
    }
}
