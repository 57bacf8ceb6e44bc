//! Uncompressed 24-bit BMP serialization.
//!
//! Fixed layout: 14-byte file header, 40-byte DIB header, then pixel rows
//! bottom-to-top with 3 bytes per pixel in B,G,R order. No row padding is
//! emitted, so widths should be multiples of 4 for strict readers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::colors::Color;
use crate::render::FrameBuffer;

const FILE_HEADER_SIZE: u32 = 14;
const DIB_HEADER_SIZE: u32 = 40;
const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

/// Writes the framebuffer to `path` as an uncompressed 24-bit BMP.
///
/// I/O failures propagate; no partial-file cleanup beyond dropping the
/// file handle.
pub fn write_bmp<P: AsRef<Path>>(fb: &FrameBuffer, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    let width = fb.width();
    let height = fb.height();
    let image_size = 3 * width * height;

    // File header.
    out.write_all(b"BM")?;
    out.write_all(&(PIXEL_DATA_OFFSET + image_size).to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // reserved
    out.write_all(&PIXEL_DATA_OFFSET.to_le_bytes())?;

    // DIB header (BITMAPINFOHEADER).
    out.write_all(&DIB_HEADER_SIZE.to_le_bytes())?;
    out.write_all(&width.to_le_bytes())?;
    out.write_all(&height.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // planes
    out.write_all(&24u16.to_le_bytes())?; // bits per pixel
    out.write_all(&0u32.to_le_bytes())?; // compression: none
    out.write_all(&image_size.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // x pixels per meter
    out.write_all(&0u32.to_le_bytes())?; // y pixels per meter
    out.write_all(&0u32.to_le_bytes())?; // colors used
    out.write_all(&0u32.to_le_bytes())?; // important colors

    // Pixel rows bottom-to-top; framebuffer row 0 is already the bottom.
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let packed = fb.pixel(x, y).unwrap_or_default();
            out.write_all(&Color::unpack(packed).to_bgr_bytes())?;
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn two_by_two_red_frame_matches_fixed_layout() {
        let fb = FrameBuffer::new(2, 2, Color::RED.pack());
        let path = temp_path("softgl_bmp_layout_test.bmp");
        write_bmp(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(bytes.len(), 66); // 54-byte header + 12 pixel bytes

        // File header.
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 66);
        assert_eq!(u32::from_le_bytes(bytes[6..10].try_into().unwrap()), 0);
        assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 54);

        // DIB header.
        assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 40);
        assert_eq!(u32::from_le_bytes(bytes[18..22].try_into().unwrap()), 2);
        assert_eq!(u32::from_le_bytes(bytes[22..26].try_into().unwrap()), 2);
        assert_eq!(u16::from_le_bytes(bytes[26..28].try_into().unwrap()), 1);
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 24);
        assert_eq!(u32::from_le_bytes(bytes[30..34].try_into().unwrap()), 0);
        assert_eq!(u32::from_le_bytes(bytes[34..38].try_into().unwrap()), 12);
        assert!(bytes[38..54].iter().all(|&b| b == 0));

        // Pixel data: red as B,G,R four times.
        assert_eq!(&bytes[54..], &[0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 255]);
    }

    #[test]
    fn rows_are_written_bottom_to_top() {
        let mut fb = FrameBuffer::new(2, 2, Color::BLACK.pack());
        fb.set_pixel(0, 0, Color::BLUE.pack()); // bottom-left
        fb.set_pixel(0, 1, Color::GREEN.pack()); // top-left

        let path = temp_path("softgl_bmp_roworder_test.bmp");
        write_bmp(&fb, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // First emitted pixel is the framebuffer's bottom-left.
        assert_eq!(&bytes[54..57], &[255, 0, 0]); // blue in B,G,R
        assert_eq!(&bytes[60..63], &[0, 255, 0]); // green starts row two
    }
}
