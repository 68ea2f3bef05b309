// ---------------------------------------------------------------------------
// In-place pixel filters over raw 4bpp ARGB memory.
//
// Public functions validate geometry, then hand whole rows to the loops in
// scalar.rs. Strided variants slice each row to exactly width × 4 bytes, so
// row padding never reaches a row loop.
// ---------------------------------------------------------------------------

use rand::Rng;

use crate::SizeError;

mod scalar;
use scalar::*;


/// Bytes per pixel for the one supported layout.
pub const BYTES_PER_PIXEL: usize = 4;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if !len.is_multiple_of(BYTES_PER_PIXEL) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

/// An empty image (zero width or height) is valid for any buffer.
#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    let row_bytes = width
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    if width == 0 || height == 0 {
        return Ok(());
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < needed {
        return Err(SizeError::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(())
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Complement red, green and blue of every 4bpp pixel in-place. Alpha is kept.
///
/// Applying it twice restores the original bytes.
pub fn invert_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    invert_row(buf);
    Ok(())
}

/// Add independent `0..=25` noise to red, green and blue of every 4bpp pixel,
/// saturating at 255. Alpha is kept.
///
/// Draws three samples from `rng` per pixel, red first.
pub fn add_noise_inplace<R: Rng + ?Sized>(buf: &mut [u8], rng: &mut R) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    add_noise_row(buf, rng);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Complement red, green and blue in-place for a strided 4bpp image.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * 4` bytes.
pub fn invert_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    for_each_row(buf, width, height, stride, invert_row);
    Ok(())
}

/// Add per-channel noise in-place for a strided 4bpp image.
///
/// Same geometry rules as [`invert_inplace_strided`]. Pixels are visited row
/// by row, left to right, so a given `rng` state always yields the same image.
pub fn add_noise_inplace_strided<R: Rng + ?Sized>(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    rng: &mut R,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    for_each_row(buf, width, height, stride, |row| add_noise_row(row, rng));
    Ok(())
}

#[inline]
fn for_each_row(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    mut f: impl FnMut(&mut [u8]),
) {
    if width == 0 || height == 0 {
        return;
    }
    let row_bytes = width * BYTES_PER_PIXEL;
    for y in 0..height {
        f(&mut buf[y * stride..][..row_bytes]);
    }
}
