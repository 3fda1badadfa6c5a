//! Classification of `invalid_card` gateway error messages.
//!
//! The gateway reports card problems as free text ("number can't be blank,
//! and expiration date cannot be in the past"). The classifier turns each
//! message fragment into a typed reason using ordered substring checks;
//! unrecognized text falls through to [`InvalidCardReason::Other`], so
//! classification itself never fails.

use std::fmt;

/// The reason of an invalid-card error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidCardReason {
    /// The card number is invalid.
    InvalidCardNumber,
    /// The card expiration date is invalid.
    InvalidExpirationDate,
    /// The card holder name is empty.
    EmptyCardHolderName,
    /// The card brand is not supported.
    UnsupportedBrand,
    /// Any other invalid-card reason, carrying the original message text.
    Other(String),
}

impl InvalidCardReason {
    /// Classifies a single message fragment. Checks run in order; the first
    /// match wins.
    pub fn from_message(message: &str) -> InvalidCardReason {
        if message.contains("number") {
            Self::InvalidCardNumber
        } else if message.contains("expiration") {
            Self::InvalidExpirationDate
        } else if message.contains("name") {
            Self::EmptyCardHolderName
        } else if message.contains("brand") {
            Self::UnsupportedBrand
        } else {
            Self::Other(message.to_string())
        }
    }

    /// A default descriptive message which a merchant may show to their
    /// user.
    pub fn description(&self) -> &str {
        match self {
            Self::InvalidCardNumber => "Invalid card number",
            Self::InvalidExpirationDate => "Invalid card expiration date",
            Self::EmptyCardHolderName => "Invalid card holder name",
            Self::UnsupportedBrand => "Unsupported card brand",
            Self::Other(message) => message,
        }
    }

    /// A default suggestion for recovering from this error.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidCardNumber => "Please review the card number",
            Self::InvalidExpirationDate => "Please review the card expiration date",
            Self::EmptyCardHolderName => "Please review the card holder name",
            Self::UnsupportedBrand => "Please use another credit card",
            Self::Other(_) => "Please review credit card information",
        }
    }

    /// Rank in the fixed display order. Lower ranks sort first.
    fn rank(&self) -> u8 {
        match self {
            Self::InvalidCardNumber => 0,
            Self::InvalidExpirationDate => 1,
            Self::EmptyCardHolderName => 2,
            Self::UnsupportedBrand => 3,
            Self::Other(_) => 4,
        }
    }
}

impl fmt::Display for InvalidCardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Parses every invalid-card reason out of a combined gateway message.
///
/// The message is split on `", and "` and then `", "`, each fragment is
/// classified, duplicates are removed, and the result is sorted into the
/// fixed display order. When the number itself is invalid, a simultaneous
/// brand complaint is noise and is dropped.
///
/// # Example
///
/// ```
/// use paysource::invalid_card::{parse_reasons, InvalidCardReason};
///
/// let reasons = parse_reasons("number can't be blank and brand not supported (unknown)");
/// assert_eq!(reasons, vec![InvalidCardReason::InvalidCardNumber]);
/// ```
pub fn parse_reasons(message: &str) -> Vec<InvalidCardReason> {
    let mut reasons: Vec<InvalidCardReason> = Vec::new();
    for fragment in message.split(", and ").flat_map(|part| part.split(", ")) {
        let reason = InvalidCardReason::from_message(fragment);
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    if reasons.contains(&InvalidCardReason::InvalidCardNumber) {
        reasons.retain(|r| *r != InvalidCardReason::UnsupportedBrand);
    }

    reasons.sort_by_key(InvalidCardReason::rank);
    reasons
}
