//! Strict, locale-independent conversions between numbers and decimal text.
//!
//! Every function here is pure. Parse failures come back as a
//! [`ParseNumberError`] from the call that failed; there is no shared error
//! state to inspect afterwards.

use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt::Write;

use crate::error::{CursorError, ParseNumberError};

/// Digits after the decimal point produced by [`high_precision_to_text`].
pub const FIXED_FRACTION_DIGITS: usize = 13;

/// Upper bound on the digit count [`format_significant`] honors. Seventeen
/// significant digits identify any `f64` exactly.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Returns `true` for bytes that may appear in a numeric run: signs, digits,
/// the decimal point and exponent markers.
///
/// No positional rules apply; `"e+-."` is all numeric bytes.
#[inline]
#[must_use]
pub fn is_numeric_byte(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'0'..=b'9' | b'.' | b'e' | b'E')
}

/// Formats `value` as decimal text without leading zeros.
///
/// # Errors
///
/// [`CursorError::Allocation`] if the output string cannot be allocated.
pub fn integer_to_text(value: i64) -> Result<String, CursorError> {
    let len = decimal_len(value);
    let mut out = reserve(len)?;
    write!(out, "{value}").map_err(|_| CursorError::Allocation {
        requested: len,
        capacity: 0,
    })?;
    Ok(out)
}

/// Parses decimal text as a signed integer. Leading ASCII whitespace is
/// skipped; everything after it must be consumed.
///
/// # Errors
///
/// See [`ParseNumberError`].
pub fn text_to_integer(text: &str) -> Result<i64, ParseNumberError> {
    parse_integer(text).inspect_err(|err| log::debug!("rejected integer text {text:?}: {err}"))
}

fn parse_integer(text: &str) -> Result<i64, ParseNumberError> {
    let (skipped, rest) = skip_leading_space(text);
    if rest.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    let bytes = rest.as_bytes();
    let sign = usize::from(matches!(bytes[0], b'+' | b'-'));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return Err(ParseNumberError::Malformed);
    }
    let end = sign + digits;
    if end < bytes.len() {
        return Err(ParseNumberError::TrailingCharacters {
            offset: skipped + end,
        });
    }
    rest.parse::<i64>().map_err(|_| ParseNumberError::OutOfRange)
}

/// Formats `value` in fixed-point notation with exactly
/// [`FIXED_FRACTION_DIGITS`] digits after the decimal point.
///
/// ```rust
/// # use strcursor::numeric::high_precision_to_text;
/// assert_eq!(high_precision_to_text(-118.0472176809648).unwrap(), "-118.0472176809648");
/// ```
///
/// # Errors
///
/// [`CursorError::Allocation`] if the output string cannot be allocated.
pub fn high_precision_to_text(value: f64) -> Result<String, CursorError> {
    if value.is_nan() {
        return Ok("nan".to_string());
    }
    if value.is_infinite() {
        return Ok(if value < 0.0 { "-inf" } else { "inf" }.to_string());
    }
    // sign, a few integer digits, the point and the fraction; longer values
    // grow the string while writing.
    let hint = FIXED_FRACTION_DIGITS + 8;
    let mut out = reserve(hint)?;
    write!(out, "{value:.prec$}", prec = FIXED_FRACTION_DIGITS).map_err(|_| {
        CursorError::Allocation {
            requested: hint,
            capacity: 0,
        }
    })?;
    Ok(out)
}

/// Parses `text` as a floating-point value, requiring that the whole input
/// is consumed.
///
/// Leading ASCII whitespace is skipped. `inf`, `infinity` and `nan` are
/// accepted in any case with an optional sign. A finite decimal that rounds
/// to infinity, to zero or into the subnormal range is reported as
/// [`ParseNumberError::OutOfRange`].
///
/// ```rust
/// # use strcursor::{numeric::text_to_high_precision, ParseNumberError};
/// assert_eq!(text_to_high_precision("2.5"), Ok(2.5));
/// assert_eq!(text_to_high_precision("invalid"), Err(ParseNumberError::Malformed));
/// assert_eq!(
///     text_to_high_precision("2.5kg"),
///     Err(ParseNumberError::TrailingCharacters { offset: 3 })
/// );
/// ```
///
/// # Errors
///
/// See [`ParseNumberError`].
pub fn text_to_high_precision(text: &str) -> Result<f64, ParseNumberError> {
    parse_high_precision(text)
        .inspect_err(|err| log::debug!("rejected numeric text {text:?}: {err}"))
}

fn parse_high_precision(text: &str) -> Result<f64, ParseNumberError> {
    let (skipped, rest) = skip_leading_space(text);
    if rest.is_empty() {
        return Err(ParseNumberError::Empty);
    }
    let bytes = rest.as_bytes();
    let special = special_len(bytes);
    let Some((value, len)) = leading_number(bytes) else {
        return Err(ParseNumberError::Malformed);
    };
    if len < bytes.len() {
        return Err(ParseNumberError::TrailingCharacters {
            offset: skipped + len,
        });
    }
    if special.is_none() {
        let underflow = value.is_subnormal() || (value == 0.0 && has_nonzero_mantissa(bytes));
        if value.is_infinite() || underflow {
            return Err(ParseNumberError::OutOfRange);
        }
    }
    Ok(value)
}

/// `true` if any digit before the exponent marker is nonzero.
fn has_nonzero_mantissa(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .take_while(|&&b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

/// Formats `value` in `%g` style: `digits` significant digits, fixed
/// notation when the decimal exponent lies in `[-4, digits)`, scientific
/// (`1.5e+07`) otherwise, trailing zeros removed.
///
/// A `digits` of `0` is treated as `1`, and anything above
/// [`MAX_SIGNIFICANT_DIGITS`] as that bound.
///
/// ```rust
/// # use strcursor::numeric::format_significant;
/// assert_eq!(format_significant(3.14159265, 6), "3.14159");
/// assert_eq!(format_significant(1.0e7, 6), "1e+07");
/// assert_eq!(format_significant(0.0001, 6), "0.0001");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Let the scientific formatter do the rounding, then read back the
    // exponent of the rounded value.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let limit = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_fraction_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let precision = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        let fixed = format!("{value:.precision$}");
        strip_fraction_zeros(&fixed).to_string()
    }
}

/// Reads the longest numeric prefix of `bytes` and returns its value with the
/// number of bytes used.
pub(crate) fn leading_number(bytes: &[u8]) -> Option<(f64, usize)> {
    let len = special_len(bytes).unwrap_or_else(|| decimal_prefix_len(bytes));
    if len == 0 {
        return None;
    }
    let text = core::str::from_utf8(&bytes[..len]).ok()?;
    text.parse::<f64>().ok().map(|value| (value, len))
}

/// Length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of `bytes`,
/// or `0`. At least one mantissa digit is required; an exponent marker with no
/// digits after it is not part of the number.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

/// Length of a signed `infinity`, `inf` or `nan` word at the start of
/// `bytes`.
fn special_len(bytes: &[u8]) -> Option<usize> {
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let body = &bytes[sign..];
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            body.len() >= word.len() && body[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| sign + word.len())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn skip_leading_space(text: &str) -> (usize, &str) {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    (text.len() - rest.len(), rest)
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn decimal_len(value: i64) -> usize {
    let digits = value
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d as usize + 1);
    digits + usize::from(value < 0)
}

fn reserve(len: usize) -> Result<String, CursorError> {
    let mut out = String::new();
    out.try_reserve_exact(len)
        .map_err(|_| CursorError::Allocation {
            requested: len,
            capacity: 0,
        })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(30, "30")]
    #[case(-123, "-123")]
    #[case(456, "456")]
    #[case(6582, "6582")]
    #[case(2_147_483_647, "2147483647")]
    #[case(-2_147_483_648, "-2147483648")]
    #[case(i64::MIN, "-9223372036854775808")]
    fn integer_text(#[case] value: i64, #[case] expected: &str) {
        let text = integer_to_text(value).unwrap();
        assert_eq!(text, expected);
        assert_eq!(text.len(), decimal_len(value));
    }

    #[rstest]
    #[case(" 42", Ok(42))]
    #[case("+7", Ok(7))]
    #[case("", Err(ParseNumberError::Empty))]
    #[case("-", Err(ParseNumberError::Malformed))]
    #[case("12a", Err(ParseNumberError::TrailingCharacters { offset: 2 }))]
    #[case("9223372036854775808", Err(ParseNumberError::OutOfRange))]
    fn integer_parse(#[case] text: &str, #[case] expected: Result<i64, ParseNumberError>) {
        assert_eq!(text_to_integer(text), expected);
    }

    #[rstest]
    #[case(0.0, "0.0000000000000")]
    #[case(-123.456_129_566_378_6, "-123.4561295663786")]
    #[case(789.012_345_678_899_9, "789.0123456788999")]
    #[case(118.047_217_680_964_8, "118.0472176809648")]
    #[case(-118.047_217_680_964_8, "-118.0472176809648")]
    #[case(f64::NEG_INFINITY, "-inf")]
    fn high_precision_text(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(high_precision_to_text(value).unwrap(), expected);
    }

    #[rstest]
    #[case("0.0000000000000", 0.0)]
    #[case("-123.4561295663786", -123.456_129_566_378_6)]
    #[case("789.0123456788999", 789.012_345_678_899_9)]
    #[case("118.0472176809648", 118.047_217_680_964_8)]
    #[case("-118.0472176809648", -118.047_217_680_964_8)]
    #[case("  1e3", 1000.0)]
    #[case(".5", 0.5)]
    #[case("5.", 5.0)]
    #[case("0e-400", 0.0)]
    #[case("-0.000", 0.0)]
    #[case("2.2250738585072014e-308", f64::MIN_POSITIVE)]
    fn high_precision_parse(#[case] text: &str, #[case] expected: f64) {
        let value = text_to_high_precision(text).unwrap();
        assert!((value - expected).abs() < 1e-13, "{text}: {value}");
    }

    #[rstest]
    #[case("invalid", ParseNumberError::Malformed)]
    #[case("", ParseNumberError::Empty)]
    #[case(" \t", ParseNumberError::Empty)]
    #[case("e5", ParseNumberError::Malformed)]
    #[case("1.5 ", ParseNumberError::TrailingCharacters { offset: 3 })]
    #[case("1e", ParseNumberError::TrailingCharacters { offset: 1 })]
    #[case(" 1x", ParseNumberError::TrailingCharacters { offset: 2 })]
    #[case("1e999", ParseNumberError::OutOfRange)]
    #[case("1e-400", ParseNumberError::OutOfRange)]
    #[case("-4e-320", ParseNumberError::OutOfRange)]
    #[case("0.0000001e-320", ParseNumberError::OutOfRange)]
    fn high_precision_rejects(#[case] text: &str, #[case] expected: ParseNumberError) {
        assert_eq!(text_to_high_precision(text), Err(expected));
    }

    #[test]
    fn high_precision_accepts_special_words() {
        assert_eq!(text_to_high_precision("-Infinity"), Ok(f64::NEG_INFINITY));
        assert_eq!(text_to_high_precision("inf"), Ok(f64::INFINITY));
        assert!(text_to_high_precision("NaN").unwrap().is_nan());
        assert_eq!(
            text_to_high_precision("infx"),
            Err(ParseNumberError::TrailingCharacters { offset: 3 })
        );
    }

    #[rstest]
    #[case(3.141_592_65, 6, "3.14159")]
    #[case(2.5, 6, "2.5")]
    #[case(100.0, 6, "100")]
    #[case(123_456.7, 6, "123457")]
    #[case(999_999.7, 6, "1e+06")]
    #[case(1.0e7, 6, "1e+07")]
    #[case(0.0001, 6, "0.0001")]
    #[case(1.5e-5, 6, "1.5e-05")]
    #[case(-42.0, 6, "-42")]
    #[case(-0.0, 6, "-0")]
    #[case(1.0e100, 6, "1e+100")]
    #[case(2.0 / 3.0, 3, "0.667")]
    #[case(7.0, 0, "7")]
    #[case(0.1, 17, "0.10000000000000001")]
    #[case(0.1, 40, "0.10000000000000001")]
    #[case(1.5, 100_000, "1.5")]
    #[case(1.0e300, usize::MAX, "1.0000000000000001e+300")]
    fn significant_digits(#[case] value: f64, #[case] digits: usize, #[case] expected: &str) {
        assert_eq!(format_significant(value, digits), expected);
    }

    #[rstest]
    #[case(&b"-12.5e3abc"[..], 7)]
    #[case(&b"1e+"[..], 1)]
    #[case(&b"+."[..], 0)]
    #[case(&b"..1"[..], 0)]
    #[case(&b"1.2.3"[..], 3)]
    #[case(&b"-"[..], 0)]
    fn decimal_prefix(#[case] bytes: &[u8], #[case] expected: usize) {
        assert_eq!(decimal_prefix_len(bytes), expected);
    }

    #[test]
    fn numeric_byte_set() {
        let accepted: String = (0u8..=127)
            .filter(|b| is_numeric_byte(*b))
            .map(char::from)
            .collect();
        assert_eq!(accepted, "+-.0123456789Ee");
    }
}
