//! HUD and composition: turns session state into the image shown in the window.
//! Read-only with respect to the session; nothing here feeds back into the core.

use crate::draw::{draw_line, draw_text_5x7, fill_disc, fill_rect, stroke_rect, text_width};
use crate::gamma::GammaLut;
use crate::gesture::*;
use crate::palette::{PANEL_HEIGHT, PANEL_X, PANEL_Y, Palette, SWATCH_ORIGIN};
use crate::session::{FrameReport, Session};
use crate::types::{FrameBuffer, HandLandmarks};

const WHITE: u32 = 0x00_FF_FF_FF;
const PANEL_GRAY: u32 = 0x00_32_32_32;
const BAR_TRACK: u32 = 0x00_32_32_32;
const GREEN: u32 = 0x00_00_FF_00;
const YELLOW: u32 = 0x00_FF_FF_00;
const ORANGE: u32 = 0x00_FF_A5_00;
const RED: u32 = 0x00_FF_00_00;
const CYAN: u32 = 0x00_00_FF_FF;
const SKELETON: u32 = 0x00_C8_C8_C8;

/// Bone pairs drawn over the hand.
const HAND_BONES: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

pub struct Renderer {
    lut: GammaLut,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { lut: GammaLut::new() }
    }

    /// Build the window image for this frame into `screen`.
    pub fn render(
        &self,
        screen: &mut FrameBuffer,
        live: Option<&FrameBuffer>,
        hand: Option<&HandLandmarks>,
        session: &Session,
        report: &FrameReport,
    ) {
        let canvas = session.canvas().buffer();
        match live {
            // Camera under canvas, 70/30.
            Some(live) => {
                screen.pixels.copy_from_slice(&live.pixels);
                self.lut.blend_into(screen, canvas, 0.7, 0.3);
            }
            None => screen.pixels.copy_from_slice(&canvas.pixels),
        }

        if let Some(hand) = hand {
            draw_skeleton(screen, hand);
        }

        let mode = report.mode();
        if let Some(p) = report.finger {
            let marker = if mode.palette_open { CYAN } else { session.color() };
            if mode.palette_open || report.drawing_active {
                fill_disc(screen, p.x, p.y, 10, marker);
            }
        }

        // Hold-progress bars, only while a hold is running.
        let modes = session.modes();
        if !modes.drawing_toggle().is_idle() {
            let y = if mode.palette_open { 210 } else { 60 };
            progress_bar(screen, y, report.update.drawing_progress, YELLOW, "Hold thumb...");
        }
        if !modes.palette_toggle().is_idle() {
            let y = if mode.palette_open { 240 } else { 90 };
            progress_bar(screen, y, report.update.palette_progress, ORANGE, "Hold fist...");
        }

        if mode.palette_open {
            self.draw_palette(screen, session.palette(), session.color());
        }

        let (status, color, y) = if mode.palette_open {
            ("COLOR PICKER MODE", ORANGE, 178)
        } else if mode.drawing_enabled {
            if report.drawing_active { ("DRAWING", GREEN, 8) } else { ("READY TO DRAW", YELLOW, 8) }
        } else {
            ("DRAWING DISABLED", RED, 8)
        };
        draw_text_5x7(screen, 10, y, status, 3, color);

        if !mode.palette_open {
            let w = screen.width as i32;
            fill_rect(screen, w - 70, 10, 60, 60, session.color());
            stroke_rect(screen, w - 70, 10, 60, 60, 2, WHITE);
        }

        let bottom = screen.height as i32 - 16;
        draw_text_5x7(screen, 10, bottom, "C: CLEAR  S: SAVE  Q: QUIT", 1, WHITE);
    }

    fn draw_palette(&self, screen: &mut FrameBuffer, palette: &Palette, current: u32) {
        let w = screen.width as i32;
        self.lut.shade_rect(screen, PANEL_X, PANEL_Y, w - 2 * PANEL_X, PANEL_HEIGHT, PANEL_GRAY, 0.7);
        draw_text_5x7(screen, SWATCH_ORIGIN.0, PANEL_Y + 10, "COLOR PICKER - Point to select", 2, WHITE);

        for entry in palette.entries() {
            let r = entry.swatch;
            fill_rect(screen, r.x, r.y, r.w + 1, r.h + 1, entry.color);
            stroke_rect(screen, r.x, r.y, r.w, r.h, 2, WHITE);
            if entry.is_eraser() {
                // Black on a dark panel; cross it out so it reads as an eraser.
                draw_line(screen, r.x + 6, r.y + 6, r.x + r.w - 6, r.y + r.h - 6, RED);
                draw_line(screen, r.x + r.w - 6, r.y + 6, r.x + 6, r.y + r.h - 6, RED);
            }
            if entry.color == current {
                stroke_rect(screen, r.x - 3, r.y - 3, r.w + 6, r.h + 6, 3, GREEN);
            }
            let label_x = r.x + (r.w - text_width(entry.label, 1)) / 2;
            draw_text_5x7(screen, label_x, r.y + r.h + 5, entry.label, 1, WHITE);
        }
    }
}

fn progress_bar(screen: &mut FrameBuffer, y: i32, progress: f32, color: u32, label: &str) {
    let filled = (200.0 * progress.clamp(0.0, 1.0)) as i32;
    fill_rect(screen, 10, y, 200, 20, BAR_TRACK);
    fill_rect(screen, 10, y, filled, 20, color);
    draw_text_5x7(screen, 10, y - 10, label, 1, WHITE);
}

fn draw_skeleton(screen: &mut FrameBuffer, hand: &HandLandmarks) {
    let (w, h) = (screen.width, screen.height);
    for (a, b) in HAND_BONES {
        let pa = hand.to_pixel(a, w, h);
        let pb = hand.to_pixel(b, w, h);
        draw_line(screen, pa.x, pa.y, pb.x, pb.y, SKELETON);
    }
    for i in 0..hand.points.len() {
        let p = hand.to_pixel(i, w, h);
        fill_disc(screen, p.x, p.y, 2, RED);
    }
}
