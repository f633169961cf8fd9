//! Fixed tuning for a drawing session.

use std::time::Duration;

/// Default hold time before a gesture toggles its mode.
pub const HOLD_DURATION: Duration = Duration::from_millis(500);
/// How long after the hold time a pending toggle is still honored.
pub const FIRING_WINDOW: Duration = Duration::from_millis(100);
/// Stroke width on the canvas, in pixels.
pub const BRUSH_THICKNESS: i32 = 5;
/// Starting ink: green.
pub const DEFAULT_COLOR: u32 = 0x00_00_FF_00;

/// Timing and brush settings for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Applies to both the drawing and the palette toggle.
    pub hold_duration: Duration,
    pub firing_window: Duration,
    pub brush_thickness: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hold_duration: HOLD_DURATION,
            firing_window: FIRING_WINDOW,
            brush_thickness: BRUSH_THICKNESS,
        }
    }
}
