//! 1-bit-per-pixel bitmap encoding and numbered output files.
//!
//! The `image` crate's BMP encoder only emits 8-bit data, so the monochrome
//! serialisation lives here: a classic `BITMAPFILEHEADER` + 40-byte
//! `BITMAPINFOHEADER`, a two-entry black/white palette, and pixel rows packed
//! at one bit per pixel. [`BitmapWriter`] pairs the encoder with the
//! deterministic `{prefix}_{sequence:04}.{ext}` naming scheme.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::GrayImage;

use crate::error::FramestripError;

/// `BITMAPFILEHEADER` (14) + `BITMAPINFOHEADER` (40) + 2-entry palette (8).
const PIXEL_DATA_OFFSET: u32 = 62;

/// Bytes per stored row: pixels packed at 1 bpp, rows padded to a 4-byte
/// boundary.
fn mono_row_stride(width: u32) -> usize {
    ((width as usize + 31) / 32) * 4
}

/// Encode a two-level raster as a 1-bit-per-pixel BMP file image.
///
/// Any pixel value above zero is stored as white (palette index 1); zero is
/// stored as black (index 0). Rows are written bottom-up with MSB-first bit
/// order, as conventional for positive-height BMPs. The result is the
/// complete file content, ready to be written to disk.
///
/// # Example
///
/// ```
/// use image::GrayImage;
///
/// let raster = GrayImage::new(576, 136);
/// let encoded = framestrip::encode_mono_bmp(&raster);
/// assert_eq!(&encoded[0..2], b"BM");
/// ```
pub fn encode_mono_bmp(raster: &GrayImage) -> Vec<u8> {
    let width = raster.width();
    let height = raster.height();
    let row_stride = mono_row_stride(width);
    let image_size = row_stride * height as usize;
    let file_size = PIXEL_DATA_OFFSET as usize + image_size;

    let mut out = Vec::with_capacity(file_size);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    // Positive height selects bottom-up row order.
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, uncompressed
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes()); // 72 DPI
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes()); // palette entries used
    out.extend_from_slice(&0u32.to_le_bytes());

    // Palette: index 0 = black, index 1 = white, stored as BGRA.
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    out.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0x00]);

    // Pixel rows, bottom-up, bits packed MSB-first.
    for y in (0..height).rev() {
        let mut row = vec![0u8; row_stride];
        for x in 0..width {
            if raster.get_pixel(x, y).0[0] > 0 {
                row[(x / 8) as usize] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&row);
    }

    out
}

/// Writes binarized rasters as sequentially numbered bitmap files.
///
/// Bound to an output directory, a filename prefix, and an extension at
/// construction. Filenames are deterministic (`{prefix}_{sequence:04}.{ext}`)
/// and existing files are silently overwritten, so re-running a pipeline into
/// the same directory replaces its previous output.
///
/// # Example
///
/// ```no_run
/// use image::GrayImage;
/// use framestrip::BitmapWriter;
///
/// let writer = BitmapWriter::new("frames", "frame", "bmp");
/// let raster = GrayImage::new(576, 136);
/// let path = writer.write(&raster, 0)?;
/// assert_eq!(path.file_name().unwrap(), "frame_0000.bmp");
/// # Ok::<(), framestrip::FramestripError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitmapWriter {
    directory: PathBuf,
    prefix: String,
    extension: String,
}

impl BitmapWriter {
    /// Create a writer targeting `directory` with the given filename scheme.
    ///
    /// The directory is not created here; the pipeline creates it before the
    /// scan starts.
    pub fn new<P: AsRef<Path>>(directory: P, prefix: &str, extension: &str) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            extension: extension.to_string(),
        }
    }

    /// The path a given sequence number maps to.
    pub fn frame_path(&self, sequence: u64) -> PathBuf {
        self.directory
            .join(format!("{}_{:04}.{}", self.prefix, sequence, self.extension))
    }

    /// Encode `raster` and write it to the file for `sequence`.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`FramestripError::Io`] when the directory is not writable or
    /// the disk write fails. Write failures propagate; the pipeline aborts
    /// rather than skipping frames.
    pub fn write(&self, raster: &GrayImage, sequence: u64) -> Result<PathBuf, FramestripError> {
        let path = self.frame_path(sequence);
        fs::write(&path, encode_mono_bmp(raster))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};

    use super::{BitmapWriter, PIXEL_DATA_OFFSET, encode_mono_bmp, mono_row_stride};

    fn header_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn header_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn row_stride_is_four_byte_aligned() {
        assert_eq!(mono_row_stride(1), 4);
        assert_eq!(mono_row_stride(32), 4);
        assert_eq!(mono_row_stride(33), 8);
        assert_eq!(mono_row_stride(64), 8);
        assert_eq!(mono_row_stride(576), 72);
    }

    #[test]
    fn header_fields() {
        let encoded = encode_mono_bmp(&GrayImage::new(576, 136));
        assert_eq!(&encoded[0..2], b"BM");
        assert_eq!(header_u32(&encoded, 10), PIXEL_DATA_OFFSET);
        assert_eq!(header_u32(&encoded, 14), 40); // info header size
        assert_eq!(header_u32(&encoded, 18), 576); // width
        assert_eq!(header_u32(&encoded, 22), 136); // height
        assert_eq!(header_u16(&encoded, 26), 1); // planes
        assert_eq!(header_u16(&encoded, 28), 1); // bits per pixel
        assert_eq!(header_u32(&encoded, 30), 0); // uncompressed
        assert_eq!(header_u32(&encoded, 46), 2); // palette entries
        let expected_size = PIXEL_DATA_OFFSET as usize + 72 * 136;
        assert_eq!(encoded.len(), expected_size);
        assert_eq!(header_u32(&encoded, 2) as usize, expected_size);
    }

    #[test]
    fn bits_pack_msb_first_bottom_up() {
        // Top row: white, black. Bottom row: black, white.
        let mut raster = GrayImage::new(2, 2);
        raster.put_pixel(0, 0, Luma([255]));
        raster.put_pixel(1, 1, Luma([255]));

        let encoded = encode_mono_bmp(&raster);
        let pixels = &encoded[PIXEL_DATA_OFFSET as usize..];
        // First stored row is the bottom image row.
        assert_eq!(pixels[0..4], [0b0100_0000, 0, 0, 0]);
        assert_eq!(pixels[4..8], [0b1000_0000, 0, 0, 0]);
    }

    #[test]
    fn writer_filenames_are_zero_padded() {
        let writer = BitmapWriter::new("out", "frame", "bmp");
        assert_eq!(writer.frame_path(0).file_name().unwrap(), "frame_0000.bmp");
        assert_eq!(writer.frame_path(19).file_name().unwrap(), "frame_0019.bmp");
        assert_eq!(
            writer.frame_path(12345).file_name().unwrap(),
            "frame_12345.bmp",
        );
    }
}
