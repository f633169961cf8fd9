//! One drawing session: all state that outlives a frame, and the per-frame pass.
//!
//! ```text
//! landmarks ─▶ GestureSnapshot ─▶ ModeController ─┬─▶ PaletteSelector  (palette open)
//!                                                 └─▶ StrokeAccumulator (drawing)
//! ```

use std::path::PathBuf;
use std::time::Instant;

use crate::canvas::CanvasBuffer;
use crate::config::{DEFAULT_COLOR, SessionConfig};
use crate::error::Error;
use crate::gesture::{GestureSnapshot, INDEX_TIP};
use crate::mode::{Mode, ModeController, ModeUpdate};
use crate::palette::{Palette, PaletteSelector};
use crate::stroke::StrokeAccumulator;
use crate::types::{HandLandmarks, PixelPoint, Segment};

/// External commands (keyboard or equivalent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Wipe the canvas and lift the pen.
    Clear,
    /// Export the canvas as an image at this path.
    Save(PathBuf),
}

/// Everything the renderer needs to know about one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub update: ModeUpdate,
    /// `None` when no hand was detected.
    pub gestures: Option<GestureSnapshot>,
    /// Index fingertip in pixels, present while pointing.
    pub finger: Option<PixelPoint>,
    /// True when this frame was a pen-down drawing frame.
    pub drawing_active: bool,
    /// Palette label picked this frame.
    pub selected: Option<&'static str>,
    /// Segment committed to the canvas this frame.
    pub segment: Option<Segment>,
}

impl FrameReport {
    pub fn mode(&self) -> Mode {
        self.update.mode
    }
}

pub struct Session {
    palette: Palette,
    modes: ModeController,
    color: u32,
    canvas: CanvasBuffer,
    stroke: StrokeAccumulator,
}

impl Session {
    /// A fresh session with a blank `width` x `height` canvas.
    pub fn new(config: &SessionConfig, width: usize, height: usize) -> Self {
        Self {
            palette: Palette::standard(),
            modes: ModeController::new(config),
            color: DEFAULT_COLOR,
            canvas: CanvasBuffer::new(width, height),
            stroke: StrokeAccumulator::new(config.brush_thickness),
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn canvas(&self) -> &CanvasBuffer {
        &self.canvas
    }

    pub fn stroke_cursor(&self) -> Option<PixelPoint> {
        self.stroke.cursor()
    }

    /// Run one frame. `hand` is `None` when the detector found no hand.
    pub fn process_frame(&mut self, hand: Option<&HandLandmarks>, now: Instant) -> FrameReport {
        let gestures = hand.map(GestureSnapshot::classify);
        let update = self.modes.update(gestures.as_ref(), now);
        let mode = update.mode;

        let finger = match (hand, gestures) {
            (Some(h), Some(g)) if g.is_pointing => {
                Some(h.to_pixel(INDEX_TIP, self.canvas.width(), self.canvas.height()))
            }
            _ => None,
        };

        let mut report = FrameReport {
            update,
            gestures,
            finger,
            drawing_active: false,
            selected: None,
            segment: None,
        };

        match finger {
            Some(p) if mode.palette_open => {
                self.stroke.lift();
                report.selected = PaletteSelector::new(&self.palette)
                    .select(p, &mut self.color)
                    .map(|e| e.label);
            }
            Some(p) if mode.drawing_enabled => {
                report.drawing_active = true;
                report.segment = self.stroke.advance(&mut self.canvas, p, self.color);
            }
            _ => self.stroke.lift(),
        }

        report
    }

    pub fn execute(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::Clear => {
                self.canvas.clear();
                self.stroke.lift();
                Ok(())
            }
            Command::Save(path) => self.canvas.save(&path),
        }
    }
}
