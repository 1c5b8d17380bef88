// src/encoder.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::ColorType;

use crate::error::{KaosError, Result};
use crate::renderer::PixelBuffer;

/// Writes a finished pixel buffer somewhere. Any error is fatal to the run.
pub trait PixelEncoder: Send + Sync {
    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BmpFileEncoder;

impl BmpFileEncoder {
    /// Encodes `buffer` as a 24-bit BMP into any writer.
    pub fn encode_to<W: Write>(&self, buffer: &PixelBuffer, writer: &mut W) -> Result<()> {
        let bytes = buffer.as_bytes();
        let expected = buffer.width() as usize * buffer.height() as usize * 3;
        if bytes.len() != expected {
            return Err(KaosError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        BmpEncoder::new(writer).encode(bytes, buffer.width(), buffer.height(), ColorType::Rgb8)?;
        Ok(())
    }
}

impl PixelEncoder for BmpFileEncoder {
    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.encode_to(buffer, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{rasterize, BACKGROUND_COLOR, POINT_COLOR};
    use crate::geometry::Point2D;

    #[test]
    fn writes_a_bmp_header() {
        let buffer = rasterize(4, 3, &[Point2D::new(1.0, 1.0)], 0).unwrap();
        let mut bytes = Vec::new();
        BmpFileEncoder.encode_to(&buffer, &mut bytes).unwrap();

        assert_eq!(&bytes[..2], b"BM");
        let file_size = u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
        assert_eq!(file_size as usize, bytes.len());
    }

    #[test]
    fn decodes_back_to_the_same_pixels() {
        let buffer = rasterize(5, 4, &[Point2D::new(2.0, 1.0), Point2D::new(4.0, 3.0)], 0).unwrap();
        let mut bytes = Vec::new();
        BmpFileEncoder.encode_to(&buffer, &mut bytes).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded.get_pixel(2, 1).0, [POINT_COLOR.r, POINT_COLOR.g, POINT_COLOR.b]);
        assert_eq!(decoded.get_pixel(4, 3).0, [POINT_COLOR.r, POINT_COLOR.g, POINT_COLOR.b]);
        assert_eq!(
            decoded.get_pixel(0, 0).0,
            [BACKGROUND_COLOR.r, BACKGROUND_COLOR.g, BACKGROUND_COLOR.b]
        );
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let buffer = rasterize(2, 2, &[], 0).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("kaos_0.bmp");
        let err = BmpFileEncoder.encode(&buffer, &path).unwrap_err();
        assert!(matches!(err, KaosError::Io(_)));
    }
}
