//! Gesture classification from one frame of hand landmarks.
//!
//! Everything here is pure: a [`GestureSnapshot`] is computed fresh from the
//! current landmarks every frame and never carried over.

use crate::types::HandLandmarks;

// ── Landmark indices (standard 21-point hand topology) ─────

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// (tip, pip) pairs for the four non-thumb fingers.
const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ── Thresholds ─────────────────────────────────────────────

/// Minimum thumb-tip distance from the palm center, in normalized units.
pub const THUMB_PALM_DISTANCE: f32 = 0.2;
/// Thumb tip-to-IP length must exceed this fraction of the index tip-to-MCP length.
pub const THUMB_EXTENSION_RATIO: f32 = 0.6;

// ── Snapshot ───────────────────────────────────────────────

/// Gesture predicates for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSnapshot {
    pub is_fist: bool,
    pub is_pointing: bool,
    pub is_thumb_extended: bool,
}

impl GestureSnapshot {
    /// Classify one detected hand.
    pub fn classify(hand: &HandLandmarks) -> Self {
        Self {
            is_fist: is_fist(hand),
            is_pointing: is_pointing(hand),
            is_thumb_extended: is_thumb_extended(hand),
        }
    }
}

// ── Predicates ─────────────────────────────────────────────

/// True when a fingertip sits below (greater y than) its PIP joint.
#[inline]
fn is_curled(hand: &HandLandmarks, tip: usize, pip: usize) -> bool {
    hand.get(tip).y > hand.get(pip).y
}

/// All four non-thumb fingers curled. The thumb is not considered.
pub fn is_fist(hand: &HandLandmarks) -> bool {
    FINGER_TIP_PIP.iter().all(|&(tip, pip)| is_curled(hand, tip, pip))
}

/// Index extended and middle curled. Ring, pinky and thumb are ignored.
pub fn is_pointing(hand: &HandLandmarks) -> bool {
    let index_up = hand.get(INDEX_TIP).y < hand.get(INDEX_PIP).y;
    let middle_down = is_curled(hand, MIDDLE_TIP, MIDDLE_PIP);
    index_up && middle_down
}

/// Thumb held well away from the palm and straightened.
///
/// The palm center is the centroid of wrist, index MCP and pinky MCP. The
/// thumb's own extension (tip to IP) is compared against the index finger's
/// tip-to-MCP length of the same hand, so a large hand close to the camera
/// does not pass on the absolute distance alone.
pub fn is_thumb_extended(hand: &HandLandmarks) -> bool {
    let wrist = hand.get(WRIST);
    let index_mcp = hand.get(INDEX_MCP);
    let pinky_mcp = hand.get(PINKY_MCP);
    let palm = crate::types::Landmark::new(
        (wrist.x + index_mcp.x + pinky_mcp.x) / 3.0,
        (wrist.y + index_mcp.y + pinky_mcp.y) / 3.0,
    );

    let thumb_tip = hand.get(THUMB_TIP);
    let thumb_distance = thumb_tip.distance(&palm);
    let thumb_extension = thumb_tip.distance(&hand.get(THUMB_IP));
    let index_distance = hand.get(INDEX_TIP).distance(&index_mcp);

    thumb_distance > THUMB_PALM_DISTANCE
        && thumb_extension > THUMB_EXTENSION_RATIO * index_distance
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::{Pose, hand_at};
    use crate::types::Landmark;

    fn set(hand: &mut HandLandmarks, index: usize, x: f32, y: f32) {
        hand.points[index] = Landmark::new(x, y);
    }

    #[test]
    fn test_point_pose() {
        let g = GestureSnapshot::classify(&hand_at(Pose::Point, 0.5, 0.4));
        assert!(g.is_pointing);
        assert!(!g.is_fist);
        assert!(!g.is_thumb_extended);
    }

    #[test]
    fn test_fist_pose() {
        let g = GestureSnapshot::classify(&hand_at(Pose::Fist, 0.5, 0.4));
        assert!(g.is_fist);
        assert!(!g.is_pointing);
        assert!(!g.is_thumb_extended);
    }

    #[test]
    fn test_thumb_out_pose() {
        let g = GestureSnapshot::classify(&hand_at(Pose::ThumbOut, 0.5, 0.4));
        assert!(g.is_thumb_extended);
        assert!(!g.is_fist);
        assert!(!g.is_pointing);
    }

    #[test]
    fn test_open_hand_is_no_gesture() {
        let g = GestureSnapshot::classify(&hand_at(Pose::Open, 0.5, 0.4));
        assert_eq!(g, GestureSnapshot::default());
    }

    #[test]
    fn test_pointing_ignores_ring_pinky_and_thumb() {
        let base = hand_at(Pose::Point, 0.5, 0.5);
        // Try every combination of ring/pinky up or down, thumb anywhere.
        for ring_up in [false, true] {
            for pinky_up in [false, true] {
                for thumb in [(0.1, 0.9), (0.9, 0.1), (0.5, 0.5)] {
                    let mut hand = base;
                    let ring_pip = hand.get(RING_PIP);
                    let pinky_pip = hand.get(PINKY_PIP);
                    let dy = |up: bool| if up { -0.05 } else { 0.05 };
                    set(&mut hand, RING_TIP, ring_pip.x, ring_pip.y + dy(ring_up));
                    set(&mut hand, PINKY_TIP, pinky_pip.x, pinky_pip.y + dy(pinky_up));
                    set(&mut hand, THUMB_TIP, thumb.0, thumb.1);
                    assert!(is_pointing(&hand), "ring_up={ring_up} pinky_up={pinky_up} thumb={thumb:?}");
                }
            }
        }
    }

    #[test]
    fn test_pointing_requires_middle_curled() {
        let mut hand = hand_at(Pose::Point, 0.5, 0.5);
        let pip = hand.get(MIDDLE_PIP);
        set(&mut hand, MIDDLE_TIP, pip.x, pip.y - 0.05);
        assert!(!is_pointing(&hand));
    }

    #[test]
    fn test_fist_ignores_thumb() {
        let mut hand = hand_at(Pose::Fist, 0.5, 0.5);
        set(&mut hand, THUMB_TIP, 0.05, 0.05);
        assert!(is_fist(&hand));
    }

    #[test]
    fn test_fist_needs_every_finger() {
        for (tip, pip) in FINGER_TIP_PIP {
            let mut hand = hand_at(Pose::Fist, 0.5, 0.5);
            let p = hand.get(pip);
            set(&mut hand, tip, p.x, p.y - 0.02);
            assert!(!is_fist(&hand), "finger tip {tip} extended");
        }
    }

    #[test]
    fn test_thumb_far_but_short_is_not_extended() {
        // Thumb tip far from palm, but the tip-to-IP segment is tiny compared
        // with a long index finger.
        let mut hand = hand_at(Pose::ThumbOut, 0.5, 0.5);
        let tip = hand.get(THUMB_TIP);
        set(&mut hand, THUMB_IP, tip.x + 0.005, tip.y);
        assert!(!is_thumb_extended(&hand));
    }

    #[test]
    fn test_thumb_long_but_near_palm_is_not_extended() {
        let mut hand = hand_at(Pose::Open, 0.5, 0.5);
        let wrist = hand.get(WRIST);
        set(&mut hand, THUMB_TIP, wrist.x - 0.05, wrist.y - 0.05);
        set(&mut hand, THUMB_IP, wrist.x + 0.10, wrist.y - 0.05);
        assert!(!is_thumb_extended(&hand));
    }
}
