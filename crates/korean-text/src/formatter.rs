//! Korean number words, amount phrases, and masking formatters

use crate::{KoreanTextError, Result};

/// Korean digit names (0-9, index 0 unused in composition)
const DIGIT_NAMES: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

/// Unit names inside a 4-digit group (ones, tens, hundreds, thousands)
const SMALL_UNITS: [&str; 4] = ["", "십", "백", "천"];

/// Large-scale unit names at each 4-digit group boundary
const LARGE_UNITS: [&str; 5] = ["", "만", "억", "조", "경"];

/// Korean text formatting utilities
pub struct KoreanFormatter;

impl KoreanFormatter {
    /// Format a non-negative integer as Korean number words
    pub fn number_words(n: u64) -> String {
        korean_number_words(n)
    }

    /// Format an amount as a formal Korean currency phrase
    pub fn amount(amount: i64) -> String {
        format_korean_amount(amount)
    }

    /// Format an integer with thousands separators
    pub fn grouped(n: u64) -> String {
        format_number(n)
    }

    /// Mask a phone number with dash separators
    pub fn phone(value: &str) -> String {
        format_phone_number(value)
    }

    /// Mask a business registration number with dash separators
    pub fn biz_no(value: &str) -> String {
        format_biz_no(value)
    }
}

/// Convert a non-negative integer to Korean number words
///
/// The decimal representation is split into 4-digit groups. Within a
/// group, each non-zero digit renders as digit-word plus 십/백/천, with a
/// leading 일 elided before those units (일십 → 십). A leading 일 is kept
/// before the large-scale units 만/억/조/경, so 10,000 reads 일만.
///
/// # Examples
/// ```
/// use korean_text::korean_number_words;
/// assert_eq!(korean_number_words(0), "영");
/// assert_eq!(korean_number_words(10_000), "일만");
/// assert_eq!(korean_number_words(123_456), "십이만삼천사백오십육");
/// ```
pub fn korean_number_words(n: u64) -> String {
    if n == 0 {
        return "영".to_string();
    }

    // 4-digit groups, least significant first
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 10_000) as u16);
        rest /= 10_000;
    }

    let mut result = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group > 0 {
            result.push_str(&group_words(group));
            result.push_str(LARGE_UNITS[scale]);
        }
    }

    result
}

/// Render one 4-digit group (1..=9999) as Korean words
fn group_words(group: u16) -> String {
    let mut out = String::new();
    let mut divisor = 1000;

    for position in (0..4).rev() {
        let digit = (group / divisor % 10) as usize;
        divisor /= 10;

        if digit == 0 {
            continue;
        }
        // Elide the leading 일 before 십/백/천 (일십 → 십)
        if digit != 1 || position == 0 {
            out.push_str(DIGIT_NAMES[digit]);
        }
        out.push_str(SMALL_UNITS[position]);
    }

    out
}

/// Format a non-negative amount as a formal Korean currency phrase
///
/// Returns the fixed shape `일금 {words}원정`, or the bare zero word for 0.
/// Negative amounts are clamped to zero; use [`try_korean_amount`] to
/// reject them instead.
///
/// # Examples
/// ```
/// use korean_text::format_korean_amount;
/// assert_eq!(format_korean_amount(0), "영");
/// assert_eq!(format_korean_amount(33_000), "일금 삼만삼천원정");
/// ```
pub fn format_korean_amount(amount: i64) -> String {
    if amount <= 0 {
        return "영".to_string();
    }
    format!("일금 {}원정", korean_number_words(amount as u64))
}

/// Checked variant of [`format_korean_amount`]
///
/// # Errors
/// Returns [`KoreanTextError::NegativeAmount`] when `amount` is negative.
pub fn try_korean_amount(amount: i64) -> Result<String> {
    if amount < 0 {
        return Err(KoreanTextError::NegativeAmount(amount));
    }
    Ok(format_korean_amount(amount))
}

/// Format a non-negative integer with comma thousands separators
///
/// # Examples
/// ```
/// use korean_text::format_number;
/// assert_eq!(format_number(1_000_000), "1,000,000");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    result
}

/// Mask a phone number with dash separators
///
/// Strips all non-digit characters, then re-inserts dashes by total digit
/// count: fewer than 4 digits stay unformatted, 4-6 split at 3, 7-10
/// split at 3 and 6, 11 or more split at 3 and 7 truncated to 11 digits.
///
/// # Examples
/// ```
/// use korean_text::format_phone_number;
/// assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
/// assert_eq!(format_phone_number("021234567"), "021-234-567");
/// ```
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        7..=10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..11]),
    }
}

/// Mask a business registration number with dash separators
///
/// Strips all non-digit characters, then splits into groups of 3, 2, and
/// up to 5 digits, truncated to 10 digits total.
///
/// # Examples
/// ```
/// use korean_text::format_biz_no;
/// assert_eq!(format_biz_no("1234567890"), "123-45-67890");
/// ```
pub fn format_biz_no(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    match len {
        0..=3 => digits,
        4..=5 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..len.min(10)]),
    }
}
