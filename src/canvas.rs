//! Persistent drawing surface.
//! Strokes accumulate here for the whole session; only `clear` wipes them.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::{debug, info};

use crate::draw::draw_thick_line;
use crate::error::Error;
use crate::types::{FrameBuffer, Segment};

/// Empty canvas color. Painting with it erases.
pub const BACKGROUND: u32 = 0x00_00_00_00;

pub struct CanvasBuffer {
    buffer: FrameBuffer,
    committed: usize, // segments since the last clear
}

impl CanvasBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { buffer: FrameBuffer::filled(width, height, BACKGROUND), committed: 0 }
    }

    pub fn width(&self) -> usize {
        self.buffer.width
    }

    pub fn height(&self) -> usize {
        self.buffer.height
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.buffer.pixel(x, y)
    }

    /// Number of segments drawn since creation or the last clear.
    pub fn committed_segments(&self) -> usize {
        self.committed
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.pixels.iter().all(|&p| p == BACKGROUND)
    }

    /// Rasterize one segment into the buffer.
    pub fn commit(&mut self, seg: &Segment) {
        draw_thick_line(
            &mut self.buffer,
            seg.from.x,
            seg.from.y,
            seg.to.x,
            seg.to.y,
            seg.thickness,
            seg.color,
        );
        self.committed += 1;
        debug!("segment ({}, {}) -> ({}, {}) color {:06X}", seg.from.x, seg.from.y, seg.to.x, seg.to.y, seg.color);
    }

    pub fn clear(&mut self) {
        self.buffer.pixels.fill(BACKGROUND);
        self.committed = 0;
        info!("canvas cleared");
    }

    /// Copy the canvas into an RGB image.
    pub fn to_image(&self) -> RgbImage {
        let w = self.buffer.width as u32;
        ImageBuffer::from_fn(w, self.buffer.height as u32, |x, y| {
            let px = self.buffer.pixels[(y * w + x) as usize];
            Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
        })
    }

    /// Write the canvas to `path`; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        self.to_image()
            .save(path)
            .map_err(|e| Error::Save(format!("{}: {e}", path.display())))?;
        info!("drawing saved as: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelPoint;

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32, color: u32) -> Segment {
        Segment { from: PixelPoint::new(x0, y0), to: PixelPoint::new(x1, y1), color, thickness: 5 }
    }

    #[test]
    fn test_commit_paints_endpoints_and_middle() {
        let mut c = CanvasBuffer::new(200, 200);
        c.commit(&seg(10, 10, 110, 10, 0x00_FF_00_00));
        assert_eq!(c.pixel(10, 10), Some(0x00_FF_00_00));
        assert_eq!(c.pixel(60, 10), Some(0x00_FF_00_00));
        assert_eq!(c.pixel(110, 10), Some(0x00_FF_00_00));
        // Thickness spreads across the line.
        assert_eq!(c.pixel(60, 12), Some(0x00_FF_00_00));
        assert_eq!(c.pixel(60, 20), Some(BACKGROUND));
        assert_eq!(c.committed_segments(), 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut c = CanvasBuffer::new(50, 50);
        c.commit(&seg(0, 0, 49, 49, 0x00_FF_FF_FF));
        assert!(!c.is_blank());
        c.clear();
        assert!(c.is_blank());
        assert_eq!(c.committed_segments(), 0);
    }

    #[test]
    fn test_segment_off_canvas_is_clipped() {
        let mut c = CanvasBuffer::new(20, 20);
        c.commit(&seg(-30, 5, 50, 5, 0x00_00_00_FF));
        assert_eq!(c.pixel(0, 5), Some(0x00_00_00_FF));
        assert_eq!(c.pixel(19, 5), Some(0x00_00_00_FF));
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut c = CanvasBuffer::new(40, 30);
        c.commit(&seg(5, 5, 30, 20, 0x00_12_34_56));
        let path = std::env::temp_dir().join(format!("air_canvas_test_{}.png", std::process::id()));
        c.save(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (40, 30));
        assert_eq!(img.get_pixel(5, 5), &Rgb([0x12, 0x34, 0x56]));
        assert_eq!(img.get_pixel(39, 0), &Rgb([0, 0, 0]));
        let _ = std::fs::remove_file(&path);
    }
}
