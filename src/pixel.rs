//! Packed 32-bit ARGB pixels and 8-bit channel arithmetic.

/// Saturate an intermediate channel value into `0..=255`.
///
/// ```rust
/// use smudge::clamp_channel;
///
/// assert_eq!(clamp_channel(-12), 0);
/// assert_eq!(clamp_channel(128), 128);
/// assert_eq!(clamp_channel(300), 255);
/// ```
#[inline(always)]
pub const fn clamp_channel(value: i32) -> u8 {
    if value > 255 {
        255
    } else if value < 0 {
        0
    } else {
        value as u8
    }
}

/// One pixel as the host stores it: a native-endian `u32` with alpha,
/// red, green and blue at bit offsets 24, 16, 8 and 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    #[inline(always)]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline(always)]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline(always)]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline(always)]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline(always)]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Read a pixel from 4 bytes of host memory.
    #[inline(always)]
    pub fn from_bytes(px: &[u8; 4]) -> Self {
        Argb(u32::from_ne_bytes(*px))
    }

    #[inline(always)]
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }

    /// Rebuild the pixel with new color channels, keeping alpha.
    #[inline(always)]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Argb::new(self.alpha(), r, g, b)
    }
}
