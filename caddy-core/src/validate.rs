//! Entry guard for operations over parallel club columns.

use crate::ValidationError;

/// Check that parallel columns are well-formed before any calculation.
///
/// `lengths` holds the length of every column in argument order.
///
/// # Errors
/// Returns [`ValidationError::LengthMismatch`] when the lengths differ and
/// [`ValidationError::EmptyInput`] when every column is empty.
///
/// # Examples
/// ```
/// use caddy_core::{ValidationError, validate_parallel};
///
/// assert!(validate_parallel("demo", &[3, 3]).is_ok());
/// assert_eq!(
///     validate_parallel("demo", &[0, 0]),
///     Err(ValidationError::EmptyInput { operation: "demo" })
/// );
/// ```
pub fn validate_parallel(
    operation: &'static str,
    lengths: &[usize],
) -> Result<(), ValidationError> {
    let Some((&first, rest)) = lengths.split_first() else {
        return Err(ValidationError::EmptyInput { operation });
    };
    if rest.iter().any(|&len| len != first) {
        return Err(ValidationError::LengthMismatch {
            operation,
            lengths: lengths.to_vec(),
        });
    }
    if first == 0 {
        return Err(ValidationError::EmptyInput { operation });
    }
    Ok(())
}
