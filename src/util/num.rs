use std::fmt::Display;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Narrows a widened arithmetic result back to `i32`.
///
/// Values above `i32::MAX` are an overflow and values below `i32::MIN` an
/// underflow; both errors carry `line` and the rendered `expression`.
///
/// ## Errors
/// - `RuntimeError::Overflow` if `value > i32::MAX`.
/// - `RuntimeError::Underflow` if `value < i32::MIN`.
///
/// ## Example
/// ```
/// use core_lang::{error::RuntimeError, util::num::i64_to_i32_checked};
///
/// assert_eq!(i64_to_i32_checked(2_147_483_647, 1, &"X").unwrap(), i32::MAX);
///
/// let err = i64_to_i32_checked(2_147_483_648, 4, &"X + 1").unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4, .. }));
///
/// let err = i64_to_i32_checked(-2_147_483_649, 4, &"X - 1").unwrap_err();
/// assert!(matches!(err, RuntimeError::Underflow { line: 4, .. }));
/// ```
pub fn i64_to_i32_checked(value: i64, line: usize, expression: &dyn Display) -> EvalResult<i32> {
    if value > i64::from(i32::MAX) {
        return Err(RuntimeError::Overflow { expression: expression.to_string(),
                                            line });
    }
    if value < i64::from(i32::MIN) {
        return Err(RuntimeError::Underflow { expression: expression.to_string(),
                                             line });
    }
    i32::try_from(value).map_err(|_| RuntimeError::Overflow { expression: expression.to_string(),
                                                              line })
}
