//! Sources of uniform random values used for scale jitter.
//!
//! The generator never calls a global RNG. It draws from a [`RandomSource`], which is
//! implemented for every [`rand::Rng`] and by [`ScriptedSource`] for exact sequences.
use rand::Rng;

pub mod scripted;

pub use scripted::ScriptedSource;

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next(&mut self) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next(&mut self) -> f32 {
        unit_f32(self.next_u32())
    }
}

/// Map a raw 32-bit draw onto `[0, 1)`.
///
/// Only the top 24 bits are used so every result is exactly representable and
/// strictly below 1.0.
#[inline]
pub(crate) fn unit_f32(bits: u32) -> f32 {
    (bits >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Largest `f32` strictly below 1.0.
pub(crate) const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;
