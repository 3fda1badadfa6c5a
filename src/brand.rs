//! Card network brand detection.
//!
//! Brands are detected by matching the digit string against each brand's
//! pattern in a fixed priority order. Several patterns overlap (Maestro's
//! `6304` prefix is also Laser's, Diners' `5[4-5]` sits inside MasterCard's
//! `5[1-5]` range), so the iteration order is part of the contract and is
//! pinned by tests.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Brand of the card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    /// Visa
    #[serde(rename = "Visa")]
    Visa,
    /// MasterCard
    #[serde(rename = "MasterCard")]
    MasterCard,
    /// JCB
    #[serde(rename = "JCB")]
    Jcb,
    /// American Express
    #[serde(rename = "American Express")]
    Amex,
    /// Diners Club
    #[serde(rename = "Diners Club")]
    Diners,
    /// Laser
    #[serde(rename = "Laser")]
    Laser,
    /// Maestro
    #[serde(rename = "Maestro")]
    Maestro,
    /// UnionPay
    #[serde(rename = "UnionPay")]
    UnionPay,
    /// Discover
    #[serde(rename = "Discover")]
    Discover,
}

/// Compiled detection patterns, one per entry of [`CardBrand::ALL`].
static PATTERNS: LazyLock<Vec<(CardBrand, Regex)>> = LazyLock::new(|| {
    CardBrand::ALL
        .iter()
        .map(|brand| {
            let re = Regex::new(brand.pattern()).expect("brand pattern: invalid regex");
            (*brand, re)
        })
        .collect()
});

impl CardBrand {
    /// Detection priority order. Order matters: the first matching pattern
    /// wins, and overlapping ranges rely on it.
    pub const ALL: [CardBrand; 9] = [
        CardBrand::Visa,
        CardBrand::MasterCard,
        CardBrand::Jcb,
        CardBrand::Amex,
        CardBrand::Diners,
        CardBrand::Laser,
        CardBrand::Maestro,
        CardBrand::Discover,
        CardBrand::UnionPay,
    ];

    /// Regular expression pattern that detects card numbers issued by the
    /// brand.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Visa => "^4",
            Self::MasterCard => "^(5[1-5]|2(2(2[1-9]|[3-9])|[3-6]|7(0|1|20)))",
            Self::Jcb => "^35(2[89]|[3-8])",
            Self::Amex => "^3[47]",
            Self::Diners => "^3(0[0-5]|[6,8-9])|^5[4-5]",
            Self::Laser => "^(6304|670[69]|6771)",
            Self::Maestro => "^(5[0,6-8]|6304|6759|676[1-3])",
            Self::UnionPay => "^62\\d{14,17}$",
            Self::Discover => {
                "^(6011\\d{12,15}|65\\d{14,17}|64[4-9]\\d{13,16}|6221[2-9]\\d{11,14}|622[3-9]\\d{12,15})$"
            }
        }
    }

    /// Range of valid card number lengths for cards issued by the brand.
    pub const fn valid_lengths(&self) -> std::ops::RangeInclusive<usize> {
        match self {
            Self::Visa => 16..=16,
            Self::MasterCard => 16..=16,
            Self::Jcb => 16..=16,
            Self::Amex => 15..=15,
            Self::Diners => 14..=14,
            Self::Laser => 16..=19,
            Self::Maestro => 12..=19,
            Self::UnionPay => 16..=19,
            Self::Discover => 16..=19,
        }
    }

    /// Human-readable brand name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Jcb => "JCB",
            Self::Amex => "American Express",
            Self::Diners => "Diners Club",
            Self::Laser => "Laser",
            Self::Maestro => "Maestro",
            Self::UnionPay => "UnionPay",
            Self::Discover => "Discover",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detects the card brand of a digit string.
///
/// Iterates [`CardBrand::ALL`] and returns the first brand whose pattern
/// matches, or `None` if no pattern matches.
///
/// # Example
///
/// ```
/// use paysource::brand::{detect_brand, CardBrand};
///
/// assert_eq!(detect_brand("4242424242424242"), Some(CardBrand::Visa));
/// assert_eq!(detect_brand("6759411100000008"), Some(CardBrand::Maestro));
/// assert_eq!(detect_brand(""), None);
/// ```
pub fn detect_brand(digits: &str) -> Option<CardBrand> {
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(digits))
        .map(|(brand, _)| *brand)
}
