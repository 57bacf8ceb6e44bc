//! Owning frame buffer with a parallel depth buffer.
//!
//! # Depth convention
//!
//! The depth buffer clears to negative infinity ("nothing drawn") and a
//! fragment is accepted only when its interpolated depth is **strictly
//! greater** than the stored value. With this pipeline's projection and
//! viewport z-remap, greater depth means closer under the demo camera
//! convention; the strict comparison makes ties keep the first-drawn
//! fragment.

/// Color and depth grids for one frame, sized once at construction.
pub struct FrameBuffer {
    color: Vec<u32>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a buffer cleared to the given packed color.
    pub fn new(width: u32, height: u32, clear_color: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color: vec![clear_color; size],
            depth: vec![f32::NEG_INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to `color` and every depth to negative infinity.
    pub fn clear(&mut self, color: u32) {
        self.color.fill(color);
        self.depth.fill(f32::NEG_INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Writes a pixel without depth testing (wireframe and line drawing).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color[idx] = color;
        }
    }

    /// Stored depth at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth[idx])
    }

    /// Writes a pixel with depth testing.
    ///
    /// The write happens only when `depth` is strictly greater than the
    /// stored value. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if depth > self.depth[idx] {
                self.depth[idx] = depth;
                self.color[idx] = color;
            }
        }
    }

    /// Packed color at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color[idx])
    }

    /// Raw packed pixels, row-major with row 0 at the bottom.
    pub fn pixels(&self) -> &[u32] {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_color_and_depth() {
        let mut fb = FrameBuffer::new(4, 4, 0);
        fb.set_pixel_with_depth(1, 1, 0.5, 0xFFFF_FFFF);
        fb.clear(0xFF00_0000);
        assert_eq!(fb.pixel(1, 1), Some(0xFF00_0000));
        assert_eq!(fb.depth_at(1, 1), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn greater_depth_wins() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        fb.set_pixel_with_depth(0, 0, -1.0, 1);
        fb.set_pixel_with_depth(0, 0, 2.0, 2);
        assert_eq!(fb.pixel(0, 0), Some(2));
        // Lesser depth is rejected.
        fb.set_pixel_with_depth(0, 0, 0.0, 3);
        assert_eq!(fb.pixel(0, 0), Some(2));
    }

    #[test]
    fn equal_depth_keeps_first_fragment() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        fb.set_pixel_with_depth(1, 1, 0.25, 7);
        fb.set_pixel_with_depth(1, 1, 0.25, 9);
        assert_eq!(fb.pixel(1, 1), Some(7));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        fb.set_pixel(-1, 0, 5);
        fb.set_pixel(0, 2, 5);
        fb.set_pixel_with_depth(2, 0, 1.0, 5);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }
}
