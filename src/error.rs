use crate::bitmap::{BitmapFormat, HostError};

/// Pixel memory does not match the geometry it was described with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Contiguous buffer length is not a multiple of 4 bytes.
    #[error("buffer length is not a whole number of 4-byte pixels")]
    NotPixelAligned,

    /// `stride` is shorter than one row of pixels, or the geometry overflows.
    #[error("stride is smaller than width × 4 or the image size overflows")]
    InvalidStride,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

/// Why a host entry point gave up without touching the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    #[error("AndroidBitmap_getInfo() failed ! error={}", .0.code())]
    InfoQuery(HostError),

    #[error("Bitmap format is not RGBA_8888 ! (got {0:?})")]
    UnsupportedFormat(BitmapFormat),

    #[error("AndroidBitmap_lockPixels() failed ! error={}", .0.code())]
    Lock(HostError),

    #[error("locked pixels do not match the bitmap info: {0}")]
    Size(#[from] SizeError),
}
