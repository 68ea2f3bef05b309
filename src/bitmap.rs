//! The host bitmap seam.
//!
//! A host platform owns the bitmap: it reports the geometry, grants
//! exclusive access to the raw pixels, and takes that access back.
//! [`HostBitmap`] models those three calls; [`PixelLock`] makes sure every
//! successful lock is paired with exactly one unlock.

use alloc::vec;
use alloc::vec::Vec;

use crate::SizeError;
use crate::pixel::Argb;

/// Pixel formats a host may report. Values match the platform's format codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    None,
    /// 4 bytes per pixel, 8 bits per channel. The only format the filters accept.
    Rgba8888,
    Rgb565,
    Rgba4444,
    A8,
    RgbaF16,
    Rgba1010102,
    Unknown(i32),
}

impl BitmapFormat {
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0 => BitmapFormat::None,
            1 => BitmapFormat::Rgba8888,
            4 => BitmapFormat::Rgb565,
            7 => BitmapFormat::Rgba4444,
            8 => BitmapFormat::A8,
            9 => BitmapFormat::RgbaF16,
            10 => BitmapFormat::Rgba1010102,
            other => BitmapFormat::Unknown(other),
        }
    }

    pub const fn to_raw(self) -> i32 {
        match self {
            BitmapFormat::None => 0,
            BitmapFormat::Rgba8888 => 1,
            BitmapFormat::Rgb565 => 4,
            BitmapFormat::Rgba4444 => 7,
            BitmapFormat::A8 => 8,
            BitmapFormat::RgbaF16 => 9,
            BitmapFormat::Rgba1010102 => 10,
            BitmapFormat::Unknown(code) => code,
        }
    }

    /// Storage size of one pixel, or 0 when the format has no defined layout.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            BitmapFormat::Rgba8888 | BitmapFormat::Rgba1010102 => 4,
            BitmapFormat::Rgb565 | BitmapFormat::Rgba4444 => 2,
            BitmapFormat::A8 => 1,
            BitmapFormat::RgbaF16 => 8,
            BitmapFormat::None | BitmapFormat::Unknown(_) => 0,
        }
    }
}

/// Geometry of a host bitmap, as reported before locking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes from the start of one row to the start of the next.
    pub stride: u32,
    pub format: BitmapFormat,
    /// Host-specific flags, carried through untouched.
    pub flags: u32,
}

impl BitmapInfo {
    /// Tightly packed geometry (`stride = width × bytes_per_pixel`).
    ///
    /// Fails with [`SizeError::InvalidStride`] if a row does not fit a `u32`
    /// stride.
    pub fn packed(width: u32, height: u32, format: BitmapFormat) -> Result<Self, SizeError> {
        let stride = width
            .checked_mul(format.bytes_per_pixel() as u32)
            .ok_or(SizeError::InvalidStride)?;
        Ok(BitmapInfo {
            width,
            height,
            stride,
            format,
            flags: 0,
        })
    }

    /// Bytes of pixel memory this geometry addresses: full strides for every
    /// row but the last, which only needs its pixels.
    pub fn byte_len(&self) -> Result<usize, SizeError> {
        let row_bytes = (self.width as usize)
            .checked_mul(self.format.bytes_per_pixel())
            .ok_or(SizeError::InvalidStride)?;
        if row_bytes > self.stride as usize {
            return Err(SizeError::InvalidStride);
        }
        if self.width == 0 || self.height == 0 {
            return Ok(0);
        }
        (self.height as usize - 1)
            .checked_mul(self.stride as usize)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(SizeError::InvalidStride)
    }
}

/// Failure codes a host reports from its bitmap calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostError {
    BadParameter,
    JniException,
    AllocationFailed,
    Other(i32),
}

impl HostError {
    /// Map a host result code. Non-negative codes are success.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0.. => None,
            -1 => Some(HostError::BadParameter),
            -2 => Some(HostError::JniException),
            -3 => Some(HostError::AllocationFailed),
            other => Some(HostError::Other(other)),
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            HostError::BadParameter => -1,
            HostError::JniException => -2,
            HostError::AllocationFailed => -3,
            HostError::Other(code) => code,
        }
    }
}

/// A bitmap whose pixel memory belongs to a host platform.
///
/// Implementations forward to the platform's info / lock / unlock calls.
/// The filters only ever reach the pixels through a [`PixelLock`].
pub trait HostBitmap {
    fn info(&self) -> Result<BitmapInfo, HostError>;

    /// Ask the host for exclusive access to the pixels.
    fn lock_pixels(&mut self) -> Result<(), HostError>;

    /// The locked pixel memory. Only called between a successful
    /// [`lock_pixels`](Self::lock_pixels) and the matching
    /// [`unlock_pixels`](Self::unlock_pixels).
    fn locked_pixels(&mut self) -> &mut [u8];

    fn unlock_pixels(&mut self) -> Result<(), HostError>;
}

/// Exclusive access to a host bitmap's pixels, released on drop.
pub struct PixelLock<'a, B: HostBitmap + ?Sized> {
    bitmap: &'a mut B,
}

impl<'a, B: HostBitmap + ?Sized> PixelLock<'a, B> {
    /// Lock the bitmap. On failure nothing is held and nothing will be unlocked.
    pub fn acquire(bitmap: &'a mut B) -> Result<Self, HostError> {
        bitmap.lock_pixels()?;
        Ok(PixelLock { bitmap })
    }

    pub fn pixels(&mut self) -> &mut [u8] {
        self.bitmap.locked_pixels()
    }
}

impl<B: HostBitmap + ?Sized> Drop for PixelLock<'_, B> {
    fn drop(&mut self) {
        if let Err(e) = self.bitmap.unlock_pixels() {
            log::warn!(
                target: crate::bridge::LOG_TAG,
                "AndroidBitmap_unlockPixels() failed ! error={}",
                e.code()
            );
        }
    }
}

/// A bitmap that lives in ordinary memory.
///
/// Useful for hosts without a platform bitmap API, and for exercising the
/// entry points without one.
#[derive(Clone, Debug)]
pub struct MemoryBitmap {
    info: BitmapInfo,
    pixels: Vec<u8>,
    locked: bool,
}

impl MemoryBitmap {
    /// A zeroed, tightly packed bitmap.
    pub fn new(width: u32, height: u32, format: BitmapFormat) -> Result<Self, SizeError> {
        let info = BitmapInfo::packed(width, height, format)?;
        let len = info.byte_len()?;
        Ok(MemoryBitmap {
            info,
            pixels: vec![0; len],
            locked: false,
        })
    }

    /// A zeroed bitmap with `stride` bytes per row. Row padding is zeroed too.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: u32,
        format: BitmapFormat,
    ) -> Result<Self, SizeError> {
        let info = BitmapInfo {
            stride,
            ..BitmapInfo::packed(width, height, format)?
        };
        let len = (height as usize)
            .checked_mul(stride as usize)
            .ok_or(SizeError::InvalidStride)?
            .max(info.byte_len()?);
        Ok(MemoryBitmap {
            info,
            pixels: vec![0; len],
            locked: false,
        })
    }

    /// Wrap existing pixel memory described by `info`.
    pub fn from_bytes(info: BitmapInfo, pixels: Vec<u8>) -> Result<Self, SizeError> {
        let needed = info.byte_len()?;
        if pixels.len() < needed {
            return Err(SizeError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(MemoryBitmap {
            info,
            pixels,
            locked: false,
        })
    }

    pub fn bitmap_info(&self) -> BitmapInfo {
        self.info
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if self.info.format != BitmapFormat::Rgba8888
            || x >= self.info.width
            || y >= self.info.height
        {
            return None;
        }
        Some(y as usize * self.info.stride as usize + x as usize * 4)
    }

    /// The pixel at `(x, y)`; `None` when out of bounds or not `Rgba8888`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        let at = self.pixel_offset(x, y)?;
        let px: &[u8; 4] = self.pixels.get(at..at + 4)?.try_into().ok()?;
        Some(Argb::from_bytes(px))
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` if it does not exist.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Argb) -> bool {
        let Some(at) = self.pixel_offset(x, y) else {
            return false;
        };
        match self.pixels.get_mut(at..at + 4) {
            Some(dst) => {
                dst.copy_from_slice(&px.to_bytes());
                true
            }
            None => false,
        }
    }
}

impl HostBitmap for MemoryBitmap {
    fn info(&self) -> Result<BitmapInfo, HostError> {
        Ok(self.info)
    }

    fn lock_pixels(&mut self) -> Result<(), HostError> {
        if self.locked {
            return Err(HostError::BadParameter);
        }
        self.locked = true;
        Ok(())
    }

    fn locked_pixels(&mut self) -> &mut [u8] {
        debug_assert!(self.locked, "pixels accessed without a lock");
        &mut self.pixels
    }

    fn unlock_pixels(&mut self) -> Result<(), HostError> {
        if !self.locked {
            return Err(HostError::BadParameter);
        }
        self.locked = false;
        Ok(())
    }
}
