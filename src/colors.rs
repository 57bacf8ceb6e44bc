//! Color handling for the framebuffer and shaders.
//!
//! Shaders work with floating-point channels in [0, 1]; the framebuffer
//! stores packed 32-bit ARGB. This module converts between the two and
//! emits the B,G,R byte order the BMP writer needs.

/// An RGB color with floating-point channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    /// Creates a color, clamping each channel to [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Packs into 0xAARRGGBB with full alpha.
    #[inline]
    pub fn pack(self) -> u32 {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        0xFF00_0000 | (r << 16) | (g << 8) | b
    }

    /// Unpacks from 0xAARRGGBB, discarding alpha.
    #[inline]
    pub fn unpack(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
        }
    }

    /// Emits the 3-byte B,G,R sequence used by 24-bit BMP pixel data.
    #[inline]
    pub fn to_bgr_bytes(self) -> [u8; 3] {
        [
            (self.b * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.r * 255.0) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trip() {
        let c = Color::new(0.25, 0.5, 1.0);
        let back = Color::unpack(c.pack());
        assert!((back.r - c.r).abs() < 1.0 / 255.0);
        assert!((back.g - c.g).abs() < 1.0 / 255.0);
        assert!((back.b - c.b).abs() < 1.0 / 255.0);
    }

    #[test]
    fn bgr_bytes_order() {
        assert_eq!(Color::RED.to_bgr_bytes(), [0, 0, 255]);
        assert_eq!(Color::BLUE.to_bgr_bytes(), [255, 0, 0]);
    }

    #[test]
    fn new_clamps_channels() {
        let c = Color::new(-0.5, 2.0, 0.5);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 0.5);
    }
}
