//! Pen-down / pen-up stroke building.
//!
//! While drawing is active, each frame's fingertip connects to the previous
//! one. Any inactive frame lifts the pen, so the next active frame starts a
//! new stroke instead of joining across the gap.

use crate::canvas::CanvasBuffer;
use crate::types::{PixelPoint, Segment};

#[derive(Debug, Clone)]
pub struct StrokeAccumulator {
    cursor: Option<PixelPoint>,
    thickness: i32,
}

impl StrokeAccumulator {
    pub fn new(thickness: i32) -> Self {
        Self { cursor: None, thickness }
    }

    /// Previous pen position, if the pen is down.
    pub fn cursor(&self) -> Option<PixelPoint> {
        self.cursor
    }

    /// Pen down at `point`. Commits a segment from the previous point, if any.
    pub fn advance(&mut self, canvas: &mut CanvasBuffer, point: PixelPoint, color: u32) -> Option<Segment> {
        let committed = self.cursor.map(|from| {
            let seg = Segment { from, to: point, color, thickness: self.thickness };
            canvas.commit(&seg);
            seg
        });
        self.cursor = Some(point);
        committed
    }

    /// Pen up.
    pub fn lift(&mut self) {
        self.cursor = None;
    }
}
