/// Numeric conversion helpers.
///
/// This module provides the conversions used when operands of different kinds
/// meet in one operation: integers promoted to floats, and characters widened
/// to their code points.
pub mod num;
