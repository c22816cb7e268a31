//! PNG encoding helpers. The render pipeline only hands back in-memory
//! surfaces; these wrappers are for callers that want bytes or files.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Error;

/// Encodes a surface as PNG bytes.
pub fn png_bytes(img: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Encodes a surface and writes it to `path`.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), Error> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_bytes_carry_the_signature() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]));
        let bytes = png_bytes(&img).expect("encode");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn save_png_writes_a_readable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        let img = RgbaImage::from_pixel(4, 2, Rgba([0, 128, 255, 255]));
        save_png(&img, &path).expect("save");
        let reloaded = image::open(&path).expect("reload").to_rgba8();
        assert_eq!(reloaded.dimensions(), (4, 2));
    }
}
