//! Field rules of the registration form: input-time normalization and the
//! checks run on submit.
//!
//! Character classes are spelled `[0-9]` rather than `\d` so only ASCII
//! digits are accepted, as in the browser form.

use std::sync::LazyLock;

use regex::Regex;

use super::path::FieldKind;
use crate::error::Rejection;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("number pattern"));
static COORDINATE_INPUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("coordinate pattern"));
static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("complete coordinate pattern")
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("date pattern")
});

/// Maximum number of digits in a phone number or a `DDMMYYYY` date.
pub const PHONE_DIGITS: usize = 10;
pub const DATE_DIGITS: usize = 8;

/// Ten digits, the first one 6 to 9.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Empty, or digits with at most one decimal point.
pub fn validate_number(value: &str) -> bool {
    NUMBER_RE.is_match(value)
}

/// Blank, or a complete signed decimal such as `19.07` or `-73.8`.
pub fn validate_coordinate(value: &str) -> bool {
    value.is_empty() || COORDINATE_RE.is_match(value)
}

/// Loose `something@something.something` check.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Blank, or `DD/MM/YYYY` with day 1-31, month 1-12 and year 1900-2100.
/// Month lengths and leap years are not checked.
pub fn validate_date(date: &str) -> bool {
    if date.trim().is_empty() {
        return true;
    }
    let Some(caps) = DATE_RE.captures(date) else {
        return false;
    };
    let part = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
    let (day, month, year) = (part(1), part(2), part(3));

    (1..=12).contains(&month) && (1..=31).contains(&day) && (1900..=2100).contains(&year)
}

/// Reformats whatever was typed into `DD`, `DD/MM` or `DD/MM/YYYY`, keeping
/// only the first eight digits.
pub fn format_date_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(DATE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Applies the input rule of `kind` to a raw edit.
///
/// Returns the value to store, or the reason the edit is dropped. A dropped
/// edit leaves the previous value in place.
pub fn normalize_input(kind: FieldKind, raw: &str) -> Result<String, Rejection> {
    match kind {
        FieldKind::Phone => {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            if digits.len() > PHONE_DIGITS {
                Err(Rejection::PhoneTooLong)
            } else {
                Ok(digits)
            }
        }
        FieldKind::Numeric => {
            if validate_number(raw) {
                Ok(raw.to_string())
            } else {
                Err(Rejection::NotNumeric)
            }
        }
        FieldKind::Coordinate => {
            if COORDINATE_INPUT_RE.is_match(raw) {
                Ok(raw.to_string())
            } else {
                Err(Rejection::NotNumeric)
            }
        }
        FieldKind::Date => Ok(format_date_input(raw)),
        FieldKind::Text | FieldKind::Choice => Ok(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn date_input_is_formatted_progressively() {
        assert_eq!(format_date_input("01022024"), "01/02/2024");
        assert_eq!(format_date_input("0102"), "01/02");
        assert_eq!(format_date_input("01"), "01");
        assert_eq!(format_date_input("010"), "01/0");
        assert_eq!(format_date_input("010220"), "01/02/20");
        assert_eq!(format_date_input("0102202499"), "01/02/2024");
        assert_eq!(format_date_input("01/02/2024"), "01/02/2024");
        assert_eq!(format_date_input("ab"), "");
    }

    #[test]
    fn date_ranges_are_checked() {
        assert!(!validate_date("31/13/2024"));
        assert!(!validate_date("31/01/1899"));
        assert!(!validate_date("00/01/2000"));
        assert!(!validate_date("1/1/2000"));
        assert!(validate_date("01/01/2000"));
        assert!(validate_date("31/02/2024"));
        assert!(validate_date(""));
        assert!(validate_date("   "));
    }

    #[test]
    fn email_is_loose() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@example.org"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("plain"));
    }

    #[test]
    fn phone_input_strips_and_caps() {
        assert_eq!(
            normalize_input(FieldKind::Phone, "98765-43210"),
            Ok("9876543210".to_string())
        );
        assert_eq!(
            normalize_input(FieldKind::Phone, "987654321012"),
            Err(Rejection::PhoneTooLong)
        );
    }

    #[test]
    fn numeric_input_rejects_garbage() {
        assert_eq!(normalize_input(FieldKind::Numeric, "12."), Ok("12.".to_string()));
        assert_eq!(
            normalize_input(FieldKind::Numeric, "1.2.3"),
            Err(Rejection::NotNumeric)
        );
        assert_eq!(normalize_input(FieldKind::Numeric, "5MW"), Err(Rejection::NotNumeric));
    }

    #[test]
    fn coordinate_input_allows_a_sign_but_no_letters() {
        assert_eq!(
            normalize_input(FieldKind::Coordinate, "-18.52"),
            Ok("-18.52".to_string())
        );
        assert_eq!(normalize_input(FieldKind::Coordinate, "-"), Ok("-".to_string()));
        assert_eq!(
            normalize_input(FieldKind::Coordinate, "19.07N"),
            Err(Rejection::NotNumeric)
        );
        assert_eq!(
            normalize_input(FieldKind::Coordinate, "73,79"),
            Err(Rejection::NotNumeric)
        );
        assert_eq!(
            normalize_input(FieldKind::Coordinate, "1-2"),
            Err(Rejection::NotNumeric)
        );
    }

    #[test]
    fn partial_coordinates_do_not_validate() {
        assert!(validate_coordinate(""));
        assert!(validate_coordinate("19.07"));
        assert!(validate_coordinate("-73.8"));
        assert!(validate_coordinate("19."));
        assert!(!validate_coordinate("-"));
        assert!(!validate_coordinate("."));
        assert!(!validate_coordinate("-."));
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert!(!validate_number("١٢"));
        assert!(!validate_phone("९८७६५४३२१०"));
    }

    proptest! {
        #[test]
        fn phones_starting_six_to_nine_are_valid(first in 6u8..=9, rest in "[0-9]{9}") {
            let phone = format!("{first}{rest}");
            prop_assert!(validate_phone(&phone));
        }

        #[test]
        fn phones_starting_zero_to_five_are_invalid(first in 0u8..=5, rest in "[0-9]{9}") {
            let phone = format!("{first}{rest}");
            prop_assert!(!validate_phone(&phone));
        }

        #[test]
        fn phones_of_other_lengths_are_invalid(phone in "[6-9][0-9]{0,8}|[6-9][0-9]{10,14}") {
            prop_assert!(!validate_phone(&phone));
        }

        #[test]
        fn decimal_strings_are_numbers(int in "[0-9]{0,6}", frac in proptest::option::of("[0-9]{0,4}")) {
            let value = match frac {
                Some(frac) => format!("{int}.{frac}"),
                None => int,
            };
            prop_assert!(validate_number(&value));
        }

        #[test]
        fn second_decimal_point_is_not_a_number(a in "[0-9]{0,3}", b in "[0-9]{0,3}", c in "[0-9]{0,3}") {
            let value = format!("{a}.{b}.{c}");
            prop_assert!(!validate_number(&value));
        }

        #[test]
        fn formatted_dates_never_exceed_ten_chars(raw in "[0-9/ -]{0,20}") {
            let formatted = format_date_input(&raw);
            prop_assert!(formatted.len() <= 10);
            prop_assert_eq!(formatted.chars().filter(char::is_ascii_digit).count(),
                raw.chars().filter(char::is_ascii_digit).count().min(DATE_DIGITS));
        }
    }
}
