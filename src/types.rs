//! Core data types shared by the gesture pipeline and the renderer.

/// A full-screen RGB image, one 0x00RRGGBB word per pixel (what minifb shows).
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // pixels per row
    pub height: usize,     // rows
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Color at (x, y), or None outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// One tracked anatomical point in normalized image coordinates (0..1, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Number of landmarks the detector reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// All landmarks of one detected hand, indexed by the standard hand topology
/// (see the index constants in `gesture`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// Landmark `index` converted to pixel coordinates of a `width` x `height` frame.
    /// Truncates toward zero, like the detector's integer pixel convention.
    pub fn to_pixel(&self, index: usize, width: usize, height: usize) -> PixelPoint {
        let p = self.points[index];
        PixelPoint {
            x: (p.x * width as f32) as i32,
            y: (p.y * height as f32) as i32,
        }
    }
}

/// Integer screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A committed line segment on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub color: u32,
    pub thickness: i32,
}
