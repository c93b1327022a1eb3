//! Bounded random color offsets with an exact-match ignore rule
//!
//! The jitter engine is total over valid channel values: every input
//! produces a clamped in-range output, and no error can originate here.

use image::Rgba;
use rand::Rng;

/// Produce a value near `value`, offset by a random variance
///
/// The variance is drawn uniformly from `[0, threshold)` (zero when the
/// threshold itself is zero) and a fair coin decides its sign. The result
/// is clamped into `[min, max]` inclusive.
pub fn nearby_value<R: Rng + ?Sized>(rng: &mut R, value: u8, threshold: u8, min: u8, max: u8) -> u8 {
    let variance = if threshold == 0 {
        0
    } else {
        rng.random_range(0..i32::from(threshold))
    };
    let offset = if rng.random_bool(0.5) { -variance } else { variance };

    (i32::from(value) + offset).clamp(i32::from(min), i32::from(max)) as u8
}

/// Produce a randomized color near `color`
///
/// Red, green, and blue are jittered independently over the full channel
/// range; alpha is copied through unchanged.
pub fn nearby_color<R: Rng + ?Sized>(rng: &mut R, color: Rgba<u8>, threshold: u8) -> Rgba<u8> {
    let Rgba([red, green, blue, alpha]) = color;

    Rgba([
        nearby_value(rng, red, threshold, u8::MIN, u8::MAX),
        nearby_value(rng, green, threshold, u8::MIN, u8::MAX),
        nearby_value(rng, blue, threshold, u8::MIN, u8::MAX),
        alpha,
    ])
}

/// Color equality on the red, green, and blue channels only
///
/// The ignore rule deliberately disregards alpha so sources with varying
/// transparency still match the sentinel.
pub const fn same_rgb(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    let Rgba([a_red, a_green, a_blue, _]) = a;
    let Rgba([b_red, b_green, b_blue, _]) = b;

    a_red == b_red && a_green == b_green && a_blue == b_blue
}
