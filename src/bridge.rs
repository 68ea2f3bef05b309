//! Host-facing entry points.
//!
//! Each entry point runs the same linear sequence against a [`HostBitmap`]:
//!
//! 1. query the bitmap info,
//! 2. refuse anything but [`BitmapFormat::Rgba8888`],
//! 3. lock the pixels,
//! 4. check the locked memory against the reported geometry,
//! 5. filter in place,
//! 6. unlock.
//!
//! Any failure stops the sequence before a single pixel byte is touched, and
//! the lock (if one was taken) is always released. The plain entry points log
//! the failure and return nothing, which is all a foreign caller can consume;
//! the `try_` variants hand the [`FilterError`] back instead.
//!
//! ```rust
//! use smudge::bridge;
//! use smudge::{Argb, BitmapFormat, MemoryBitmap};
//!
//! let mut bmp = MemoryBitmap::new(2, 1, BitmapFormat::Rgba8888).unwrap();
//! bmp.set_pixel(0, 0, Argb::new(0xFF, 0x00, 0x80, 0xFF));
//! bridge::invert_color(&mut bmp);
//! assert_eq!(bmp.pixel(0, 0), Some(Argb::new(0xFF, 0xFF, 0x7F, 0x00)));
//! ```

use rand::Rng;

use crate::bitmap::{BitmapFormat, BitmapInfo, HostBitmap, PixelLock};
use crate::{FilterError, SizeError};

/// Log target for every diagnostic this crate emits.
pub const LOG_TAG: &str = "PIXEL MANIPULATING";

/// Complement the red, green and blue channels of `bitmap` in place.
///
/// Failures are logged and leave the bitmap unchanged.
pub fn invert_color<B: HostBitmap + ?Sized>(bitmap: &mut B) {
    if let Err(e) = try_invert_color(bitmap) {
        log::error!(target: LOG_TAG, "{e}");
    }
}

/// Add per-channel noise to `bitmap` in place, drawing from `rng`.
///
/// Failures are logged and leave the bitmap unchanged.
pub fn add_noise<B, R>(bitmap: &mut B, rng: &mut R)
where
    B: HostBitmap + ?Sized,
    R: Rng + ?Sized,
{
    if let Err(e) = try_add_noise(bitmap, rng) {
        log::error!(target: LOG_TAG, "{e}");
    }
}

/// [`invert_color`], reporting why nothing happened.
pub fn try_invert_color<B: HostBitmap + ?Sized>(bitmap: &mut B) -> Result<(), FilterError> {
    with_locked_pixels(bitmap, |buf, info| {
        crate::invert_inplace_strided(
            buf,
            info.width as usize,
            info.height as usize,
            info.stride as usize,
        )
    })
}

/// [`add_noise`], reporting why nothing happened.
pub fn try_add_noise<B, R>(bitmap: &mut B, rng: &mut R) -> Result<(), FilterError>
where
    B: HostBitmap + ?Sized,
    R: Rng + ?Sized,
{
    with_locked_pixels(bitmap, |buf, info| {
        crate::add_noise_inplace_strided(
            buf,
            info.width as usize,
            info.height as usize,
            info.stride as usize,
            rng,
        )
    })
}

fn with_locked_pixels<B, F>(bitmap: &mut B, filter: F) -> Result<(), FilterError>
where
    B: HostBitmap + ?Sized,
    F: FnOnce(&mut [u8], &BitmapInfo) -> Result<(), SizeError>,
{
    let info = bitmap.info().map_err(FilterError::InfoQuery)?;
    if info.format != BitmapFormat::Rgba8888 {
        return Err(FilterError::UnsupportedFormat(info.format));
    }
    log::trace!(
        target: LOG_TAG,
        "filtering {}x{} bitmap, stride {}",
        info.width,
        info.height,
        info.stride
    );

    let mut lock = PixelLock::acquire(bitmap).map_err(FilterError::Lock)?;
    // Geometry is checked before the first write, so a mismatch leaves the
    // pixels as they were.
    filter(lock.pixels(), &info)?;
    Ok(())
}
