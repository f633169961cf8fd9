//! Window + software drawing utilities.
//! 1) A window that shows the composited camera + canvas image.
//! 2) Raster primitives (lines, thick brush lines, discs, rectangles).
//! 3) A tiny 5x7 bitmap font for the HUD.

use crate::error::Error;
use crate::source::PointerInput;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
    width: usize,
    height: usize,
}

impl Drawer {
    /// Create a window sized to the frame.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Paces the loop when no camera is blocking on frames.
        window.set_target_fps(60);
        Ok(Self { window, width, height })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// ESC or Q.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape) || self.window.is_key_down(Key::Q)
    }

    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    pub fn save_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    /// Mouse and keys mapped onto a simulated hand.
    /// Left mouse = point, F = fist, T = thumb out, right mouse = hide hand.
    pub fn pointer_input(&self) -> PointerInput {
        let position = self.window.get_mouse_pos(MouseMode::Discard).map(|(x, y)| {
            (x / self.width as f32, y / self.height as f32)
        });
        PointerInput {
            position,
            point_button: self.window.get_mouse_down(MouseButton::Left),
            fist_key: self.window.is_key_down(Key::F),
            thumb_key: self.window.is_key_down(Key::T),
            hide_hand: self.window.get_mouse_down(MouseButton::Right),
        }
    }
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
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

/// Bresenham walk from (x0,y0) to (x1,y1), both ends included.
fn for_each_line_point(x0: i32, y0: i32, x1: i32, y1: i32, mut f: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        f(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Thin 1-pixel line.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    for_each_line_point(x0, y0, x1, y1, |x, y| put_pixel(fb, x, y, color));
}

/// Solid disc of `radius` pixels centered at (cx,cy).
pub fn fill_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let r2 = radius * radius;
    for y in -radius..=radius {
        for x in -radius..=radius {
            if x * x + y * y <= r2 {
                put_pixel(fb, cx + x, cy + y, color);
            }
        }
    }
}

/// Round-capped line `thickness` pixels wide: a disc stamped at every step.
pub fn draw_thick_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: u32) {
    let radius = thickness / 2;
    for_each_line_point(x0, y0, x1, y1, |x, y| fill_disc(fb, x, y, radius, color));
}

/// Filled rectangle with its top-left at (x,y).
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// Rectangle outline `thickness` pixels wide, drawn inward from the edges
/// (x,y)-(x+w,y+h) inclusive.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: u32) {
    for t in 0..thickness.max(1) {
        let (l, r, top, bot) = (x + t, x + w - t, y + t, y + h - t);
        draw_line(fb, l, top, r, top, color);
        draw_line(fb, l, bot, r, bot, color);
        draw_line(fb, l, top, l, bot, color);
        draw_line(fb, r, top, r, bot, color);
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// Return a 5x7 glyph bitmap. Lowercase letters render as uppercase.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '/' => g!(0b00001,0b00001,0b00010,0b00100,0b01000,0b10000,0b10000),

        _ => None,
    }
}

/// Draw one glyph at (x,y), each font pixel a `scale` x `scale` block,
/// with a black drop shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, c) in [(scale.max(1) / 2 + 1, 0x00000000), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fill_rect(fb, x + rx * scale + offset, y + ry as i32 * scale + offset, scale, scale, c);
                }
            }
        }
    }
}

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}

/// Draw a text string using 5x7 glyphs; each glyph advances 6 font pixels.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thick_line_width() {
        let mut fb = FrameBuffer::filled(40, 40, 0);
        draw_thick_line(&mut fb, 5, 20, 35, 20, 5, 0xFF);
        // radius 2 around the center row
        assert_eq!(fb.pixel(20, 18), Some(0xFF));
        assert_eq!(fb.pixel(20, 22), Some(0xFF));
        assert_eq!(fb.pixel(20, 23), Some(0));
    }

    #[test]
    fn test_stroke_rect_leaves_inside_untouched() {
        let mut fb = FrameBuffer::filled(20, 20, 0);
        stroke_rect(&mut fb, 2, 2, 10, 10, 1, 0xAA);
        assert_eq!(fb.pixel(2, 2), Some(0xAA));
        assert_eq!(fb.pixel(12, 12), Some(0xAA));
        assert_eq!(fb.pixel(7, 7), Some(0));
    }

    #[test]
    fn test_every_hud_character_has_a_glyph() {
        let text = "COLOR PICKER - Point to select | HOLD FIST... READY TO DRAW Spring Eraser 0123456789:/";
        for ch in text.chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
        }
    }
}
