//! Currency display formatting.
//!
//! Amounts are whole rubles. The output is the currency symbol followed by the
//! digits grouped in threes from the right:
//!
//! | amount    | output       |
//! |-----------|--------------|
//! | `999`     | `₽999`       |
//! | `1000`    | `₽1,000`     |
//! | `123456`  | `₽123,456`   |
//! | `1234567` | `₽1,234,567` |
//!
//! [`format_price`] is the primary entry point. [`format_price_str`] exists for
//! callers that only have an already (partially) formatted string.

use rust_decimal::Decimal;

/// Currency symbol prepended to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₽";

/// Thousands separator.
const SEPARATOR: char = ',';

/// Digits per group.
const GROUP_SIZE: usize = 3;

/// Errors that can occur when reformatting a price string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceFormatError {
    /// Nothing is left after stripping separators and symbols.
    #[error("price cannot be empty")]
    Empty,
    /// A character other than a digit survived normalisation.
    #[error("price contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Format a whole-ruble amount for display.
///
/// Negative amounts put the sign in front of the symbol (`-₽1,500`).
///
/// ```
/// use eduskills_core::format_price;
///
/// assert_eq!(format_price(0), "₽0");
/// assert_eq!(format_price(123_456), "₽123,456");
/// assert_eq!(format_price(1_234_567), "₽1,234,567");
/// ```
#[must_use]
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    render(amount < 0, &digits)
}

/// Format a decimal amount for display.
///
/// Only the whole part is shown; any fraction is truncated toward zero.
#[must_use]
pub fn format_decimal(amount: Decimal) -> String {
    let whole = amount.trunc();
    let digits = whole.abs().normalize().to_string();
    render(whole.is_sign_negative() && !whole.is_zero(), &digits)
}

/// Remove whitespace, commas, periods and the currency symbol from `input`.
///
/// ```
/// use eduskills_core::strip_formatting;
///
/// assert_eq!(strip_formatting("₽1,234,567"), "1234567");
/// assert_eq!(strip_formatting(" 12 500 "), "12500");
/// ```
#[must_use]
pub fn strip_formatting(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '.')
        .collect::<String>()
        .replace(CURRENCY_SYMBOL, "")
}

/// Reformat a price that arrived as a string.
///
/// The input may already carry separators or the currency symbol; they are
/// stripped before grouping, so formatting is idempotent. Digits are kept
/// verbatim, leading zeros included.
///
/// # Errors
///
/// Returns `PriceFormatError::Empty` if nothing but formatting characters were
/// given, or `PriceFormatError::InvalidCharacter` for any other non-digit.
///
/// ```
/// use eduskills_core::{format_price, format_price_str};
///
/// let shown = format_price(15_000);
/// assert_eq!(format_price_str(&shown).unwrap(), shown);
/// ```
pub fn format_price_str(input: &str) -> Result<String, PriceFormatError> {
    let stripped = strip_formatting(input);
    let (negative, digits) = stripped
        .strip_prefix('-')
        .map_or((false, stripped.as_str()), |rest| (true, rest));

    if digits.is_empty() {
        return Err(PriceFormatError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(PriceFormatError::InvalidCharacter(bad));
    }

    Ok(render(negative, digits))
}

fn render(negative: bool, digits: &str) -> String {
    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_digits(digits))
}

/// Insert a separator every three digits counting from the right.
///
/// `digits` must be ASCII.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    if len <= GROUP_SIZE {
        return digits.to_owned();
    }

    let mut grouped = String::with_capacity(len + len / GROUP_SIZE);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
