//! Synthetic hands for running without a landmark detector.
//!
//! Each [`Pose`] is a template of 21 landmarks laid out like a right hand
//! seen from the camera, fingers up. [`hand_at`] translates the template so
//! the (extended) index fingertip lands on the requested position, which is
//! what the mouse drives in simulation mode.

use crate::error::Error;
use crate::gesture::*;
use crate::source::{LandmarkSource, PointerInput, Sample};
use crate::types::{HandLandmarks, LANDMARK_COUNT, Landmark};

/// Hand shapes the simulator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// All fingers extended, thumb tucked. Triggers nothing.
    Open,
    /// Index extended, others curled.
    Point,
    /// All fingers curled.
    Fist,
    /// Fingers extended, thumb held far out to the side.
    ThumbOut,
}

// Offsets from the wrist, normalized units, y grows downward.
const FINGER_MCP: [(usize, f32, f32); 4] = [
    (INDEX_MCP, -0.02, -0.12),
    (MIDDLE_MCP, 0.01, -0.125),
    (RING_MCP, 0.035, -0.12),
    (PINKY_MCP, 0.06, -0.105),
];
const EXTENDED: [f32; 3] = [-0.05, -0.08, -0.11]; // pip, dip, tip relative to mcp
const CURLED: [f32; 3] = [-0.04, -0.01, 0.01];

const THUMB_TUCKED: [(f32, f32); 2] = [(-0.05, -0.085), (-0.04, -0.10)]; // ip, tip
const THUMB_OUT: [(f32, f32); 2] = [(-0.12, -0.07), (-0.22, -0.08)];

/// Index tip offset from the wrist when extended; the anchor for positioning.
const ANCHOR: (f32, f32) = (-0.02, -0.23);

/// Build a hand in `pose` whose extended index tip would sit at (`x`, `y`).
pub fn hand_at(pose: Pose, x: f32, y: f32) -> HandLandmarks {
    let mut pts = [Landmark::default(); LANDMARK_COUNT];
    let wx = x - ANCHOR.0;
    let wy = y - ANCHOR.1;
    let mut put = |i: usize, dx: f32, dy: f32| pts[i] = Landmark::new(wx + dx, wy + dy);

    put(WRIST, 0.0, 0.0);
    put(THUMB_CMC, -0.03, -0.03);
    put(THUMB_MCP, -0.05, -0.06);
    let thumb = if pose == Pose::ThumbOut { THUMB_OUT } else { THUMB_TUCKED };
    put(THUMB_IP, thumb[0].0, thumb[0].1);
    put(THUMB_TIP, thumb[1].0, thumb[1].1);

    for (finger, &(mcp, mx, my)) in FINGER_MCP.iter().enumerate() {
        let extended = match pose {
            Pose::Open | Pose::ThumbOut => true,
            Pose::Point => finger == 0,
            Pose::Fist => false,
        };
        let joints = if extended { EXTENDED } else { CURLED };
        put(mcp, mx, my);
        // pip, dip and tip follow the mcp index in the topology
        for (k, dy) in joints.iter().enumerate() {
            put(mcp + 1 + k, mx, my + dy);
        }
    }

    HandLandmarks::new(pts)
}

/// Landmark source driven by the mouse and keyboard of the window.
///
/// No pointer (outside the window or right button held) means no hand.
#[derive(Debug, Default)]
pub struct SimulatedSource;

impl SimulatedSource {
    pub fn new() -> Self {
        Self
    }
}

impl LandmarkSource for SimulatedSource {
    fn poll(&mut self, input: &PointerInput) -> Result<Option<Sample>, Error> {
        let hand = match (input.position, input.hide_hand) {
            (Some((x, y)), false) => {
                let pose = if input.fist_key {
                    Pose::Fist
                } else if input.thumb_key {
                    Pose::ThumbOut
                } else if input.point_button {
                    Pose::Point
                } else {
                    Pose::Open
                };
                Some(hand_at(pose, x, y))
            }
            _ => None,
        };
        Ok(Some(Sample { offset: None, hand }))
    }
}
