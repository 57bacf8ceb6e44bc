use std::path::Path;

use crate::colors::Color;

/// A 2D texture sampled by the fragment stage.
///
/// The rasterizer treats textures as opaque handles; only the fragment
/// shader queries them, by normalized UV.
#[derive(Debug)]
pub struct Texture {
    data: Vec<u32>, // pixel data in packed ARGB
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (BMP, PNG, JPG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a texture from packed ARGB pixels.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_pixels(data: Vec<u32>, width: u32, height: u32) -> Self {
        assert_eq!(data.len(), (width * height) as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Sample the texture at normalized UV coordinates using
    /// nearest-neighbor filtering.
    ///
    /// UVs outside [0, 1] wrap (repeat mode). V is flipped because OBJ
    /// texture coordinates use a bottom-left origin while image rows are
    /// stored top-down.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = u.rem_euclid(1.0);
        let v = (1.0 - v).rem_euclid(1.0);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        Color::unpack(self.data[(y * self.width + x) as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_picks_expected_texel() {
        // 2x2 texture: top row red|green, bottom row blue|white.
        let data = vec![
            Color::RED.pack(),
            Color::GREEN.pack(),
            Color::BLUE.pack(),
            Color::WHITE.pack(),
        ];
        let tex = Texture::from_pixels(data, 2, 2);

        // v=1 maps to the top image row after the flip.
        assert_eq!(tex.sample(0.0, 0.99), Color::unpack(Color::RED.pack()));
        assert_eq!(tex.sample(0.99, 0.99), Color::unpack(Color::GREEN.pack()));
        assert_eq!(tex.sample(0.0, 0.01), Color::unpack(Color::BLUE.pack()));
    }

    #[test]
    fn sample_wraps_outside_unit_range() {
        let tex = Texture::from_pixels(vec![Color::RED.pack(); 4], 2, 2);
        let inside = tex.sample(0.25, 0.25);
        assert_eq!(tex.sample(1.25, -0.75), inside);
    }
}
