//! The color palette and pointing-based color selection.

use tracing::info;

use crate::types::PixelPoint;

/// Axis-aligned box in screen pixels, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn contains(&self, p: PixelPoint) -> bool {
        self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.w
            && other.x <= self.x + self.w
            && self.y <= other.y + other.h
            && other.y <= self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: u32, // 0x00RRGGBB
    pub label: &'static str,
    pub swatch: Rect,
}

impl PaletteEntry {
    /// The eraser paints with the canvas background.
    pub fn is_eraser(&self) -> bool {
        self.color == crate::canvas::BACKGROUND
    }
}

// Layout of the picker panel.
pub const PANEL_X: i32 = 10;
pub const PANEL_Y: i32 = 10;
pub const PANEL_HEIGHT: i32 = 120;
pub const SWATCH_SIZE: i32 = 50;
pub const SWATCH_SPACING: i32 = 8;
pub const SWATCHES_PER_ROW: usize = 8;
pub const SWATCH_ORIGIN: (i32, i32) = (20, PANEL_Y + 40);
/// Extra vertical room under each row for the label.
pub const LABEL_ROOM: i32 = 15;

const COLORS: [(u32, &str); 15] = [
    (0x00_00_00_FF, "Blue"),
    (0x00_FF_80_00, "Orange"),
    (0x00_00_FF_00, "Green"),
    (0x00_00_FF_80, "Spring"),
    (0x00_00_FF_FF, "Cyan"),
    (0x00_FF_00_80, "Pink"),
    (0x00_FF_00_FF, "Magenta"),
    (0x00_80_00_FF, "Purple"),
    (0x00_FF_00_00, "Red"),
    (0x00_80_80_00, "Olive"),
    (0x00_00_80_80, "Teal"),
    (0x00_FF_FF_00, "Yellow"),
    (0x00_FF_FF_FF, "White"),
    (0x00_80_80_80, "Gray"),
    (0x00_00_00_00, "Eraser"),
];

/// Fixed, ordered list of palette entries with their on-screen swatches.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// The 15-color palette laid out in rows of eight.
    pub fn standard() -> Self {
        let (x0, y0) = SWATCH_ORIGIN;
        let entries = COLORS
            .iter()
            .enumerate()
            .map(|(i, &(color, label))| {
                let row = (i / SWATCHES_PER_ROW) as i32;
                let col = (i % SWATCHES_PER_ROW) as i32;
                PaletteEntry {
                    color,
                    label,
                    swatch: Rect {
                        x: x0 + col * (SWATCH_SIZE + SWATCH_SPACING),
                        y: y0 + row * (SWATCH_SIZE + SWATCH_SPACING + LABEL_ROOM),
                        w: SWATCH_SIZE,
                        h: SWATCH_SIZE,
                    },
                }
            })
            .collect();
        let palette = Self { entries };
        debug_assert!(palette.is_disjoint(), "palette swatches overlap");
        palette
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// First entry whose swatch contains `p`.
    pub fn hit_test(&self, p: PixelPoint) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.swatch.contains(p))
    }

    /// True when no two swatches share a pixel.
    pub fn is_disjoint(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, a)| {
            self.entries[i + 1..].iter().all(|b| !a.swatch.overlaps(&b.swatch))
        })
    }
}

/// Applies palette hits to the current drawing color.
pub struct PaletteSelector<'a> {
    palette: &'a Palette,
}

impl<'a> PaletteSelector<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Point at `finger`; on a hit set `color` and return the chosen entry.
    /// A miss leaves `color` untouched.
    pub fn select(&self, finger: PixelPoint, color: &mut u32) -> Option<&'a PaletteEntry> {
        let entry = self.palette.hit_test(finger)?;
        if *color != entry.color {
            info!("color changed to: {}", entry.label);
        }
        *color = entry.color;
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_shape() {
        let p = Palette::standard();
        assert_eq!(p.entries().len(), 15);
        assert_eq!(p.entries().iter().filter(|e| e.is_eraser()).count(), 1);
        assert_eq!(p.entries().last().map(|e| e.label), Some("Eraser"));
        assert!(p.is_disjoint());
    }

    #[test]
    fn test_second_row_layout() {
        let p = Palette::standard();
        let e = p.get(8).unwrap();
        assert_eq!(e.label, "Red");
        assert_eq!(e.swatch, Rect { x: 20, y: 50 + 73, w: 50, h: 50 });
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let p = Palette::standard();
        let s = p.get(3).unwrap().swatch;
        assert_eq!(p.hit_test(PixelPoint::new(s.x, s.y)).unwrap().label, "Spring");
        assert_eq!(p.hit_test(PixelPoint::new(s.x + s.w, s.y + s.h)).unwrap().label, "Spring");
        // The gap between swatches belongs to nobody.
        assert!(p.hit_test(PixelPoint::new(s.x + s.w + 1, s.y)).is_none());
    }

    #[test]
    fn test_select_sets_color_only_on_hit() {
        let p = Palette::standard();
        let selector = PaletteSelector::new(&p);
        let mut color = crate::config::DEFAULT_COLOR;

        let s = p.get(0).unwrap().swatch;
        let hit = selector.select(PixelPoint::new(s.x + 10, s.y + 10), &mut color);
        assert_eq!(hit.map(|e| e.label), Some("Blue"));
        assert_eq!(color, 0x00_00_00_FF);

        assert!(selector.select(PixelPoint::new(900, 600), &mut color).is_none());
        assert_eq!(color, 0x00_00_00_FF);
    }
}
