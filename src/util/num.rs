/// Promotes an integer operand to a float.
///
/// Integers beyond 2^24 in magnitude round to the nearest representable
/// float, as they would in any 32-bit mixed arithmetic.
///
/// ## Example
/// ```
/// use xscript::util::num::i32_to_f32;
///
/// assert_eq!(i32_to_f32(3), 3.0);
/// assert_eq!(i32_to_f32(-7), -7.0);
/// assert_eq!(i32_to_f32(16_777_217), 16_777_216.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i32_to_f32(value: i32) -> f32 {
    value as f32
}

/// Widens a character to its Unicode code point.
///
/// Every code point is below `0x11_0000`, so the conversion never fails.
///
/// ## Example
/// ```
/// use xscript::util::num::char_to_i32;
///
/// assert_eq!(char_to_i32('a'), 97);
/// assert_eq!(char_to_i32('\u{10FFFF}'), 0x10_FFFF);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn char_to_i32(value: char) -> i32 {
    value as u32 as i32
}
