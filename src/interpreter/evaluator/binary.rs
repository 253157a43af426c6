/// Operator dispatch over operand kinds.
///
/// Routes each pair of operand kinds to its handler, promoting mixed numeric
/// operands, and reports a type mismatch for unsupported combinations.
pub mod core;

/// Integer and float arithmetic.
///
/// Wrapping 32-bit integer arithmetic, float arithmetic and exponentiation.
pub mod arithmetic;

/// Comparisons, concatenation and type tests.
///
/// Ordering and equality for numbers, characters, strings and type tags, and
/// the `is` operator.
pub mod comparison;

/// Boolean operators.
///
/// `and`, `or`, `xor` and boolean equality.
pub mod logic;
