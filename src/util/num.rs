use crate::error::RuntimeError;

/// Parses a decimal integer literal, mapping any failure to `error`.
///
/// The same literal text is validated once at parse time and once more when
/// the machine executes the corresponding push, so the error type is left
/// generic.
///
/// ## Errors
/// Returns `Err(error)` if `text` is not a decimal integer or does not fit
/// into an `i64`.
///
/// ## Parameters
/// - `text`: The literal spelling to parse.
/// - `error`: The error to return if parsing fails.
///
/// ## Example
/// ```
/// use opslang::util::num::parse_i64_checked;
///
/// let value = parse_i64_checked("42", "too big!");
/// assert_eq!(value.unwrap(), 42);
///
/// let err = parse_i64_checked("99999999999999999999", "too big!");
/// assert!(err.is_err());
/// ```
pub fn parse_i64_checked<E>(text: &str, error: E) -> Result<i64, E> {
    text.parse::<i64>().map_err(|_| error)
}

/// Truncates a floating-point intermediate toward zero and converts it to
/// `i64` if the result is representable.
///
/// The trigonometric opcodes compute in `f64` and immediately collapse the
/// result back to the integer value domain; `sin(1)` therefore yields `0`.
///
/// ## Errors
/// Returns `Err(RuntimeError::Overflow { line })` for non-finite values or
/// values outside the `i64` range.
///
/// ## Parameters
/// - `value`: The floating-point value to truncate and convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use opslang::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(0.841_470_984_807_896_5, 1).unwrap(), 0);
/// assert_eq!(f64_to_i64_trunc(-1.9, 1).unwrap(), -1);
/// assert!(f64_to_i64_trunc(f64::INFINITY, 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_trunc(value: f64, line: usize) -> Result<i64, RuntimeError> {
    if !value.is_finite() {
        return Err(RuntimeError::Overflow { line });
    }

    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}
