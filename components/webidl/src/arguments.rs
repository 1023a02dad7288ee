//! Argument count checks for operations.

use crate::error::{make_exception, ErrorCode, WebIdlResult};
use crate::options::ConversionOptions;

/// Fail with `ERR_MISSING_ARGS` when fewer than `required` arguments were
/// passed.
///
/// The message carries no context label, only the options' prefix.
///
/// # Examples
///
/// ```
/// use webidl::{required_arguments, ConversionOptions};
///
/// let opts = ConversionOptions::default().with_prefix("Failed to execute 'append'");
/// assert!(required_arguments(2, 2, &opts).is_ok());
///
/// let err = required_arguments(1, 2, &opts).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Failed to execute 'append': 2 arguments required, but only 1 present."
/// );
/// ```
pub fn required_arguments(
    length: usize,
    required: usize,
    options: &ConversionOptions,
) -> WebIdlResult<()> {
    if length < required {
        let plural = if required == 1 { "" } else { "s" };
        let message = format!(
            "{required} argument{plural} required, but only {length} present."
        );
        let options = options
            .clone()
            .with_context("")
            .with_code(ErrorCode::MissingArgs);
        return Err(make_exception(&message, &options));
    }
    Ok(())
}
