// Table-driven sRGB <-> linear conversion for blending marker edges.
// Visual: overlapping discs and their feathered rims mix without dark halos.

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), index = (linear * 4095).round()
    to_srgb: [u8; 4096],
}

impl GammaLut {
    pub fn new() -> Self {
        let to_linear = std::array::from_fn(|v| {
            let c = v as f32 / 255.0;
            if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        });

        let to_srgb = std::array::from_fn(|i| {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            (s * 255.0).round().clamp(0.0, 255.0) as u8
        });

        Self { to_linear, to_srgb }
    }

    #[inline]
    fn linear(&self, v: u32) -> f32 {
        self.to_linear[(v & 0xFF) as usize]
    }

    #[inline]
    fn srgb(&self, l: f32) -> u32 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.to_srgb[idx] as u32
    }

    /// Mix `src` over `dst` (both 0x00RRGGBB) with coverage `alpha` in [0,1].
    pub fn blend(&self, dst: u32, src: u32, alpha: f32) -> u32 {
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return dst;
        }
        if a >= 1.0 {
            return src & 0x00FF_FFFF;
        }

        let mut out = 0u32;
        for shift in [16u32, 8, 0] {
            let d = self.linear(dst >> shift);
            let s = self.linear(src >> shift);
            out |= self.srgb(d + (s - d) * a) << shift;
        }
        out
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let lut = GammaLut::new();
        assert_eq!(lut.blend(0x00_10_20_30, 0x00_FF_00_80, 0.0), 0x00_10_20_30);
        assert_eq!(lut.blend(0x00_10_20_30, 0x00_FF_00_80, 1.0), 0x00_FF_00_80);
    }

    #[test]
    fn half_mix_is_brighter_than_naive_average() {
        let lut = GammaLut::new();
        let mixed = lut.blend(0x00_00_00_00, 0x00_FF_FF_FF, 0.5);
        let r = (mixed >> 16) & 0xFF;
        // Linear-light midpoint of black and white is ~188 in sRGB, not 128.
        assert!(r > 180 && r < 195, "r = {r}");
    }
}
