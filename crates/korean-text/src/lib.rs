//! Korean Text - Korean language text formatting
//!
//! This crate provides:
//! - Korean number-to-words conversion (일, 이, 삼...)
//! - Formal Korean amount phrases for financial documents (일금 ...원정)
//! - Thousands-grouped numeral formatting
//! - Phone number and business-registration-number masking
//!
//! # Example
//!
//! ```
//! use korean_text::{format_korean_amount, format_number, format_phone_number};
//!
//! assert_eq!(format_korean_amount(1_000_000), "일금 백만원정");
//! assert_eq!(format_number(1_000_000), "1,000,000");
//! assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
//! ```

mod formatter;

pub use formatter::KoreanFormatter;

// Re-export commonly used formatting functions
pub use formatter::{
    format_biz_no, format_korean_amount, format_number, format_phone_number, korean_number_words,
    try_korean_amount,
};

use thiserror::Error;

/// Errors that can occur during Korean text formatting
#[derive(Debug, Error)]
pub enum KoreanTextError {
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(i64),
}

/// Result type for Korean text operations
pub type Result<T> = std::result::Result<T, KoreanTextError>;
