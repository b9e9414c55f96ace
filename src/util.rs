/// Numeric conversion helpers.
///
/// This module provides safe functions for parsing decimal literals and for
/// converting between floating-point intermediates and the machine's `i64`
/// value type without silent truncation surprises. Use these helpers
/// whenever literal text or a trigonometric intermediate has to become an
/// integer.
pub mod num;
