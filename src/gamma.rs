//! Gamma-correct mixing of 0x00RRGGBB pixels via lookup tables.
//! Used to lay the canvas over the camera image and to shade the picker panel.

use crate::types::FrameBuffer;

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1) as f32
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255) via 4096-step quantization
    linear_to_srgb: [u8; 4096],
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, out) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *out = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, out) in l2s.iter_mut().enumerate() {
            let l = (i as f32) / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *out = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// `wa * a + wb * b` per channel in linear light, saturating at white.
    pub fn mix(&self, a: u32, b: u32, wa: f32, wb: f32) -> u32 {
        let mut out = 0u32;
        for shift in [16, 8, 0] {
            let ca = self.srgb_u8_to_linear(((a >> shift) & 0xFF) as u8);
            let cb = self.srgb_u8_to_linear(((b >> shift) & 0xFF) as u8);
            let c = self.linear_to_srgb_u8(wa * ca + wb * cb) as u32;
            out |= c << shift;
        }
        out
    }

    /// `dst = wd * dst + ws * src` over whole buffers of the same size.
    pub fn blend_into(&self, dst: &mut FrameBuffer, src: &FrameBuffer, wd: f32, ws: f32) {
        debug_assert_eq!((dst.width, dst.height), (src.width, src.height));
        for (d, &s) in dst.pixels.iter_mut().zip(&src.pixels) {
            *d = self.mix(*d, s, wd, ws);
        }
    }

    /// Shade the rectangle (x,y,w,h) toward `color` with weight `alpha`.
    pub fn shade_rect(&self, fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32, alpha: f32) {
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = ((x + w).max(0) as usize).min(fb.width);
        let y1 = ((y + h).max(0) as usize).min(fb.height);
        for yy in y0..y1 {
            for xx in x0..x1 {
                let idx = yy * fb.width + xx;
                fb.pixels[idx] = self.mix(color, fb.pixels[idx], alpha, 1.0 - alpha);
            }
        }
    }
}
