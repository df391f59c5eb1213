/// Numeric range helpers.
///
/// Arithmetic is carried out in `i64` and every result is narrowed back to
/// `i32` through this module, which turns out-of-range values into overflow
/// or underflow errors instead of wrapping.
pub mod num;
