use rand::Rng;

use crate::noise;
use crate::pixel::{Argb, clamp_channel};

// ===========================================================================
// Row implementations
// ===========================================================================

pub(super) fn invert_row(row: &mut [u8]) {
    for px in row.as_chunks_mut::<4>().0 {
        let p = Argb::from_bytes(px);
        let r = clamp_channel(i32::from(p.red() ^ 0xFF));
        let g = clamp_channel(i32::from(p.green() ^ 0xFF));
        let b = clamp_channel(i32::from(p.blue() ^ 0xFF));
        *px = p.with_rgb(r, g, b).to_bytes();
    }
}

pub(super) fn add_noise_row<R: Rng + ?Sized>(row: &mut [u8], rng: &mut R) {
    for px in row.as_chunks_mut::<4>().0 {
        let p = Argb::from_bytes(px);
        let nr = noise::sample(rng);
        let ng = noise::sample(rng);
        let nb = noise::sample(rng);
        let r = clamp_channel(i32::from(p.red()) + nr);
        let g = clamp_channel(i32::from(p.green()) + ng);
        let b = clamp_channel(i32::from(p.blue()) + nb);
        *px = p.with_rgb(r, g, b).to_bytes();
    }
}
