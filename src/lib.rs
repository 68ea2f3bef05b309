//! # smudge
//!
//! *Rough up your bitmap a little.*
//!
//! Two fixed, in-place filters for 4-byte ARGB bitmaps that a host platform
//! hands over as locked pixel memory: color inversion and additive noise.
//! Alpha is never touched, and row padding between `width × 4` and `stride`
//! is never read or written.
//!
//! ## Core operations (always available)
//!
//! The functions in the crate root operate on raw `&mut [u8]` pixel memory,
//! either contiguous or strided. Each pixel is a native-endian `u32` with
//! alpha in bits 24..32, red 16..24, green 8..16 and blue 0..8.
//!
//! ## Host entry points
//!
//! [`bridge::invert_color`] and [`bridge::add_noise`] drive a
//! [`HostBitmap`] through the query → validate → lock → filter → unlock
//! sequence. Failures are logged through the [`log`] facade under the
//! [`bridge::LOG_TAG`] target and leave the bitmap untouched.
//!
//! ## Feature flags
//!
//! - **`std`** (default) — [`noise::clock_seeded_rng`] for seeding from the
//!   wall clock.
//! - **`rgb`** — Typed filters over [`rgb`] `Rgba<u8>` slices ([`img`]).
//! - **`imgref`** — Whole-image filters over strided [`imgref`] images.
//!   Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod filter;

pub mod bitmap;
pub mod bridge;
pub mod noise;
pub mod pixel;

pub use bitmap::{BitmapFormat, BitmapInfo, HostBitmap, HostError, MemoryBitmap, PixelLock};
pub use error::{FilterError, SizeError};
pub use filter::*;
pub use pixel::{Argb, clamp_channel};

#[cfg(feature = "rgb")]
pub mod img;
