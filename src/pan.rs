//! Primary account number (PAN) model.
//!
//! `Pan` normalizes raw card-number input to bare digits and derives brand,
//! validity and a masked display form from it. The full number is never
//! exposed through `Debug` or `Display`, and the digits are zeroed when the
//! value is dropped.

use crate::brand::{detect_brand, CardBrand};
use crate::luhn;
use std::fmt;
use zeroize::Zeroize;

/// A card PAN value.
///
/// Construction strips every non-digit character, so formatted input
/// (`"4242-4242-4242-4242"`) and bare digits produce the same value.
///
/// # Example
///
/// ```
/// use paysource::{CardBrand, Pan};
///
/// let pan = Pan::new("4242-4242-4242-4242");
/// assert_eq!(pan.brand(), Some(CardBrand::Visa));
/// assert!(pan.is_valid());
/// assert_eq!(pan.masked(), "424242XXXXXX4242");
/// assert_eq!(pan.last_digits(), "4242");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Pan {
    digits: String,
}

impl Pan {
    /// Creates a `Pan` from a raw card-number string, stripping all
    /// non-digit characters.
    pub fn new(raw: &str) -> Self {
        Self {
            digits: raw.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }

    /// The number of digits in the PAN.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the PAN holds no digits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The card network brand of this PAN, if any pattern matches.
    pub fn brand(&self) -> Option<CardBrand> {
        detect_brand(&self.digits)
    }

    /// Returns true if this is a valid PAN: a brand was detected, the digit
    /// count is within the brand's valid lengths, and the Luhn checksum
    /// passes.
    pub fn is_valid(&self) -> bool {
        let Some(brand) = self.brand() else {
            return false;
        };

        brand.valid_lengths().contains(&self.digits.len()) && self.validate_luhn()
    }

    /// The masked PAN number.
    ///
    /// Digits in the middle of the PAN are replaced with `X`, leaving at most
    /// the first 6 and the last 4 visible (`NNNNNN-XXXXXX-NNNN`). This helps
    /// prevent an unintentionally leaked PAN in logs.
    ///
    /// Strings shorter than 4 digits are returned unchanged.
    pub fn masked(&self) -> String {
        let len = self.digits.len();
        let start = len.saturating_sub(10);
        let end = len.saturating_sub(4);

        self.digits
            .chars()
            .enumerate()
            .map(|(i, c)| if i >= start && i < end { 'X' } else { c })
            .collect()
    }

    /// The last 4 digits of the PAN number (fewer if the PAN is shorter).
    pub fn last_digits(&self) -> &str {
        let split = self.digits.len().saturating_sub(4);
        &self.digits[split..]
    }

    /// Digit positions after which a space should be displayed when
    /// formatting the number for entry fields (every 4 digits).
    pub fn suggested_space_indexes(&self) -> Vec<usize> {
        (4..19).step_by(4).collect()
    }

    fn validate_luhn(&self) -> bool {
        let digits: Vec<u8> = self.digits.bytes().map(|b| b - b'0').collect();
        luhn::validate(&digits)
    }
}

impl fmt::Debug for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PAN: {}{} - Brand: {}",
            if self.is_valid() { "✓" } else { "⨯" },
            self.masked(),
            self.brand().map_or_else(|| "-".to_string(), |b| b.to_string())
        )
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAN: {}", self.masked())
    }
}

impl Drop for Pan {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_strips_non_digits() {
        assert_eq!(Pan::new("4242-4242-4242-4242").masked(), Pan::new("4242424242424242").masked());
        assert_eq!(Pan::new("4242 4242 4242 4242").last_digits(), "4242");
        assert!(Pan::new("abc-def").is_empty());
        assert_eq!(Pan::new("").len(), 0);
    }

    #[test]
    fn test_valid_pan() {
        assert!(Pan::new("4242424242424242").is_valid());
        assert!(Pan::new("5555555555554444").is_valid());
        assert!(Pan::new("378282246310005").is_valid());
    }

    #[test]
    fn test_invalid_checksum() {
        assert!(!Pan::new("4242424242424243").is_valid());
    }

    #[test]
    fn test_invalid_length_for_brand() {
        // Passes Luhn, detects as Visa, but 13 digits are not a valid Visa
        // length in this model (16 only).
        assert!(!Pan::new("4222222222222").is_valid());
    }

    #[test]
    fn test_unknown_brand_is_invalid() {
        assert!(!Pan::new("1234567890123452").is_valid());
        assert!(!Pan::new("").is_valid());
    }

    #[test]
    fn test_masked() {
        assert_eq!(Pan::new("4242424242424242").masked(), "424242XXXXXX4242");
        assert_eq!(Pan::new("").masked(), "");
        assert_eq!(Pan::new("4242").masked(), "4242");
        // Between 4 and 10 digits: left side masked, last 4 visible.
        assert_eq!(Pan::new("42424").masked(), "X2424");
        assert_eq!(Pan::new("4242424242").masked(), "XXXXXX4242");
        // Amex (15 digits): first 5 and last 4 visible.
        assert_eq!(Pan::new("378282246310005").masked(), "37828XXXXXX0005");
    }

    #[test]
    fn test_last_digits() {
        assert_eq!(Pan::new("4242424242424242").last_digits(), "4242");
        assert_eq!(Pan::new("123").last_digits(), "123");
        assert_eq!(Pan::new("").last_digits(), "");
    }

    #[test]
    fn test_debug_and_display_are_masked() {
        let pan = Pan::new("4242424242424242");
        let debug = format!("{:?}", pan);
        let display = format!("{}", pan);
        assert!(!debug.contains("4242424242424242"));
        assert!(!display.contains("4242424242424242"));
        assert!(display.contains("424242XXXXXX4242"));
    }

    #[test]
    fn test_suggested_space_indexes() {
        assert_eq!(Pan::new("4242424242424242").suggested_space_indexes(), vec![4, 8, 12, 16]);
    }
}
