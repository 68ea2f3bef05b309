//! Typed filters over [`rgb`] pixels and, with the `imgref` feature, strided
//! [`imgref`] images.
//!
//! Channel semantics match the byte-level filters exactly: red, green and
//! blue change, alpha never does. Rows are visited top to bottom, pixels left
//! to right, and noise is drawn red, green, blue per pixel.
//!
//! ```rust
//! # #[cfg(feature = "imgref")] {
//! use imgref::ImgVec;
//! use rgb::Rgba;
//! use smudge::img;
//!
//! let mut image = ImgVec::new(vec![Rgba::new(0u8, 128, 255, 255); 4], 2, 2);
//! img::invert_img(image.as_mut());
//! assert_eq!(image.buf()[0], Rgba::new(255, 127, 0, 255));
//! # }
//! ```

#[cfg(feature = "imgref")]
use imgref::ImgRefMut;
use rand::Rng;
use rgb::Rgba;

use crate::noise;
use crate::pixel::clamp_channel;

/// Complement red, green and blue of every pixel. Alpha is kept.
pub fn invert_rgba(pixels: &mut [Rgba<u8>]) {
    for px in pixels {
        px.r = clamp_channel(i32::from(px.r ^ 0xFF));
        px.g = clamp_channel(i32::from(px.g ^ 0xFF));
        px.b = clamp_channel(i32::from(px.b ^ 0xFF));
    }
}

/// Add independent per-channel noise to every pixel. Alpha is kept.
pub fn add_noise_rgba<R: Rng + ?Sized>(pixels: &mut [Rgba<u8>], rng: &mut R) {
    for px in pixels {
        px.r = clamp_channel(i32::from(px.r) + noise::sample(rng));
        px.g = clamp_channel(i32::from(px.g) + noise::sample(rng));
        px.b = clamp_channel(i32::from(px.b) + noise::sample(rng));
    }
}

#[cfg(feature = "imgref")]
/// [`invert_rgba`] over every row of a strided image. Padding is untouched.
pub fn invert_img(mut img: ImgRefMut<'_, Rgba<u8>>) {
    for row in img.rows_mut() {
        invert_rgba(row);
    }
}

#[cfg(feature = "imgref")]
/// [`add_noise_rgba`] over every row of a strided image. Padding is untouched.
pub fn add_noise_img<R: Rng + ?Sized>(mut img: ImgRefMut<'_, Rgba<u8>>, rng: &mut R) {
    for row in img.rows_mut() {
        add_noise_rgba(row, rng);
    }
}

/// Reinterpret raw host memory as typed pixels.
///
/// `Rgba<u8>` is byte-addressed, so any 4-byte-multiple slice works. Returns
/// `None` if the length is not a whole number of pixels.
pub fn as_rgba_mut(buf: &mut [u8]) -> Option<&mut [Rgba<u8>]> {
    bytemuck::try_cast_slice_mut(buf).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::rngs::mock::StepRng;

    #[test]
    fn invert_keeps_alpha() {
        let mut px = vec![Rgba::new(0u8, 0x80, 0xFF, 0x12), Rgba::new(1, 2, 3, 0xFF)];
        invert_rgba(&mut px);
        assert_eq!(px, [Rgba::new(0xFF, 0x7F, 0x00, 0x12), Rgba::new(254, 253, 252, 0xFF)]);
    }

    #[test]
    fn noise_saturates() {
        let mut px = vec![Rgba::new(250u8, 0, 255, 7); 3];
        add_noise_rgba(&mut px, &mut StepRng::new(u64::MAX, 0));
        assert!(px.iter().all(|p| *p == Rgba::new(255, 25, 255, 7)));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn strided_image_padding_untouched() {
        use imgref::ImgVec;

        let pad = Rgba::new(0xAB, 0xAB, 0xAB, 0xAB);
        // 2x2 image inside a 3-pixel stride; column 2 is padding.
        let mut image = ImgVec::new_stride(vec![pad; 3 * 2], 2, 2, 3);
        invert_img(image.as_mut());
        add_noise_img(image.as_mut(), &mut StepRng::new(0, 0));
        let buf = image.buf();
        assert_eq!(buf[2], pad);
        for i in [0, 1, 3, 4] {
            assert_eq!(buf[i], Rgba::new(0x54, 0x54, 0x54, 0xAB), "i={i}");
        }
    }

    #[test]
    fn typed_and_byte_filters_agree() {
        let mut bytes: vec::Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
        let mut typed = bytes.clone();
        crate::add_noise_inplace(&mut bytes, &mut noise::seeded_rng(9)).unwrap();
        // Byte filters work on native-endian ARGB words; on little-endian
        // hosts that is the same memory order as Rgba<u8>.
        if cfg!(target_endian = "little") {
            let px = as_rgba_mut(&mut typed).unwrap();
            // Packed red sits at byte 2, typed red at byte 0: swap to compare.
            for p in px.iter_mut() {
                core::mem::swap(&mut p.r, &mut p.b);
            }
            add_noise_rgba(px, &mut noise::seeded_rng(9));
            for p in px.iter_mut() {
                core::mem::swap(&mut p.r, &mut p.b);
            }
            assert_eq!(typed, bytes);
        }
    }

    #[test]
    fn cast_rejects_partial_pixels() {
        let mut buf = vec![0u8; 7];
        assert!(as_rgba_mut(&mut buf).is_none());
        let mut buf = vec![0u8; 8];
        assert_eq!(as_rgba_mut(&mut buf).map(|p| p.len()), Some(2));
    }
}
