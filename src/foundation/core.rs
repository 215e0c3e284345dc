use crate::foundation::error::{ResizeError, ResizeResult};

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Largest accepted source width or height.
///
/// Packed kernel records store source offsets as `i16`. Destination sizes are only
/// bounded by the buffer length fitting in `usize`.
pub const MAX_DIMENSION: u32 = i16::MAX as u32;

/// Width and height of an RGBA8 pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Pixels per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl ImageSize {
    /// Build a size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> ResizeResult<Self> {
        if width == 0 || height == 0 {
            return Err(ResizeError::validation(format!(
                "image dimensions must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Rejects sizes that packed kernels cannot address as a source.
    pub(crate) fn check_source_range(self) -> ResizeResult<()> {
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ResizeError::validation(format!(
                "source dimensions must be <= {MAX_DIMENSION} (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> ResizeResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| ResizeError::validation("rgba8 buffer size overflow"))
    }

    /// Bytes per row.
    pub fn row_stride(self) -> usize {
        self.width as usize * CHANNELS
    }

    pub(crate) fn check_buffer(self, buf: &[u8], what: &str) -> ResizeResult<()> {
        let expected = self.byte_len()?;
        if buf.len() != expected {
            return Err(ResizeError::validation(format!(
                "{what} buffer has {} bytes, expected {expected} for {}x{} rgba8",
                buf.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}
