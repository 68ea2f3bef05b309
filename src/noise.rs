//! Noise model for [`add_noise_inplace`](crate::add_noise_inplace).
//!
//! Every color channel of every pixel gets its own draw:
//! `round(u * NOISE_MAGNITUDE + NOISE_MEAN)` with `u` uniform in `[0, 1)`,
//! so offsets land in `0..=25` and only ever brighten.
//!
//! The random source is always passed in by the caller. Seed one generator
//! when the host starts (or per call, for reproducible output) rather than
//! reseeding from the clock on every request.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Offset added to every scaled sample.
pub const NOISE_MEAN: f64 = 0.0;

/// Scale applied to each uniform `[0, 1)` sample.
pub const NOISE_MAGNITUDE: f64 = 25.0;

/// Draw one rounded noise offset for a single channel.
#[inline]
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let u: f64 = rng.r#gen();
    round_half_away(u * NOISE_MAGNITUDE + NOISE_MEAN)
}

// core has no f64::round without std.
#[inline(always)]
fn round_half_away(x: f64) -> i32 {
    let t = x as i32;
    let frac = x - f64::from(t);
    if frac >= 0.5 {
        t + 1
    } else if frac <= -0.5 {
        t - 1
    } else {
        t
    }
}

/// A fast generator with a fixed seed. Same seed, same noise.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A fast generator seeded from the wall clock.
///
/// Create it once and keep it; two generators built within the same clock
/// tick produce identical noise.
#[cfg(feature = "std")]
pub fn clock_seeded_rng() -> SmallRng {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ (u64::from(d.subsec_nanos()) << 32))
        .unwrap_or(0);
    log::trace!(target: crate::bridge::LOG_TAG, "seeding noise generator with {seed:#x}");
    seeded_rng(seed)
}
