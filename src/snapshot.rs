// Writes a frame to disk as PNG.
// Visual: the saved image looks exactly like the last frame the window would show.

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Unpack 0x00RRGGBB pixels into an RGB image buffer.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    })
}

pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_in_order() {
        let mut fb = FrameBuffer::filled(3, 2, 0x00_00_00_00);
        fb.pixels[5] = 0x00_12_34_56;
        let img = to_rgb_image(&fb);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &Rgb([0x12, 0x34, 0x56]));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn writes_png_file() {
        let fb = FrameBuffer::filled(8, 8, 0x00_FF_00_00);
        let path = std::env::temp_dir().join(format!("cursor-trail-{}.png", std::process::id()));
        save_png(&fb, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_snapshot_error() {
        let fb = FrameBuffer::filled(2, 2, 0);
        let path = Path::new("/nonexistent-dir/for/sure/out.png");
        assert!(matches!(save_png(&fb, path), Err(Error::Snapshot(_))));
    }
}
