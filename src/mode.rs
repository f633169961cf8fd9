//! Top-level mode: drawing on/off and palette open/closed.
//!
//! Two [`DebouncedToggle`]s are combined here. The fist gesture always drives
//! the palette toggle. The thumb gesture drives the drawing toggle only while
//! the palette is closed, so holding a thumb out while picking a color can
//! never switch drawing off.

use std::time::Instant;

use tracing::info;

use crate::config::SessionConfig;
use crate::gesture::GestureSnapshot;
use crate::toggle::DebouncedToggle;

/// Composite application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub drawing_enabled: bool,
    pub palette_open: bool,
}

impl Default for Mode {
    fn default() -> Self {
        Self { drawing_enabled: true, palette_open: false }
    }
}

/// What the controller produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeUpdate {
    pub mode: Mode,
    /// Hold progress of the thumb (drawing) toggle, 0..=1.
    pub drawing_progress: f32,
    /// Hold progress of the fist (palette) toggle, 0..=1.
    pub palette_progress: f32,
    pub drawing_flipped: bool,
    pub palette_flipped: bool,
}

#[derive(Debug, Clone)]
pub struct ModeController {
    drawing: DebouncedToggle,
    palette: DebouncedToggle,
}

impl ModeController {
    pub fn new(config: &SessionConfig) -> Self {
        let initial = Mode::default();
        Self {
            drawing: DebouncedToggle::new(
                "drawing",
                initial.drawing_enabled,
                config.hold_duration,
                config.firing_window,
            ),
            palette: DebouncedToggle::new(
                "palette",
                initial.palette_open,
                config.hold_duration,
                config.firing_window,
            ),
        }
    }

    pub fn mode(&self) -> Mode {
        Mode { drawing_enabled: self.drawing.value(), palette_open: self.palette.value() }
    }

    pub fn drawing_toggle(&self) -> &DebouncedToggle {
        &self.drawing
    }

    pub fn palette_toggle(&self) -> &DebouncedToggle {
        &self.palette
    }

    /// Advance both toggles for one frame. `None` means no hand was detected,
    /// which cancels any hold in progress.
    pub fn update(&mut self, gestures: Option<&GestureSnapshot>, now: Instant) -> ModeUpdate {
        let mut drawing_flipped = false;
        let mut palette_flipped = false;

        match gestures {
            None => {
                self.drawing.reset();
                self.palette.reset();
            }
            Some(g) => {
                palette_flipped = self.palette.update(g.is_fist, now);
                if palette_flipped {
                    info!("color picker {}", if self.palette.value() { "opened" } else { "closed" });
                }

                if self.palette.value() {
                    // Thumb input is ignored while picking; no timer accrues.
                    self.drawing.reset();
                } else {
                    drawing_flipped = self.drawing.update(g.is_thumb_extended, now);
                    if drawing_flipped {
                        info!("drawing {}", if self.drawing.value() { "enabled" } else { "disabled" });
                    }
                }
            }
        }

        ModeUpdate {
            mode: self.mode(),
            drawing_progress: self.drawing.progress(now),
            palette_progress: self.palette.progress(now),
            drawing_flipped,
            palette_flipped,
        }
    }
}
