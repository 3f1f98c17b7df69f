//! Pure per-channel arithmetic for the pixel operations.
//!
//! All functions here are pure and testable without any I/O or images.

use image::Primitive;

/// Channel types the operations know how to threshold.
///
/// `image` decodes into 8-bit, 16-bit or 32-bit float buffers; the solarize
/// threshold is 128 on the 0–255 scale, rescaled to each type's range.
pub trait Channel: Primitive {
    const SOLARIZE_THRESHOLD: Self;
}

impl Channel for u8 {
    const SOLARIZE_THRESHOLD: Self = 128;
}

impl Channel for u16 {
    // 65535 / 255 = 257
    const SOLARIZE_THRESHOLD: Self = 128 * 257;
}

impl Channel for f32 {
    const SOLARIZE_THRESHOLD: Self = 128.0 / 255.0;
}

/// Invert a channel value: `max - v`.
///
/// # Examples
/// ```
/// # use ibet::imaging::invert_value;
/// assert_eq!(invert_value(0u8), 255);
/// assert_eq!(invert_value(200u8), 55);
/// assert_eq!(invert_value(1000u16), 64535);
/// ```
pub fn invert_value<T: Channel>(v: T) -> T {
    T::DEFAULT_MAX_VALUE - v
}

/// Solarize a channel value: values below the threshold pass through,
/// everything else is inverted.
///
/// # Examples
/// ```
/// # use ibet::imaging::solarize_value;
/// assert_eq!(solarize_value(127u8), 127);
/// assert_eq!(solarize_value(128u8), 127);
/// assert_eq!(solarize_value(255u8), 0);
/// ```
pub fn solarize_value<T: Channel>(v: T) -> T {
    if v < T::SOLARIZE_THRESHOLD {
        v
    } else {
        invert_value(v)
    }
}
