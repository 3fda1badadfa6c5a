//! Classification of `bad_request` gateway error messages.
//!
//! Bad-request messages mix amount limits, currency problems and customer
//! field complaints in one free-text string. Fragments are classified by
//! ordered substring and regex checks. The branch order is load-bearing:
//! "name" appears in several triggers and the amount phrasing describes the
//! limit being violated, not the limit itself, so "amount must be less than
//! X" means the amount IS GREATER than the valid amount X. Do not "fix" the
//! inversion.

use crate::currency::Currency;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static AMOUNT_AT_LEAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"amount must be at least (\d+)").expect("AMOUNT_AT_LEAST: invalid regex pattern")
});
static AMOUNT_GREATER_THAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"amount must be greater than (\d+)")
        .expect("AMOUNT_GREATER_THAN: invalid regex pattern")
});
static AMOUNT_LESS_THAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"amount must be less than (\d+)")
        .expect("AMOUNT_LESS_THAN: invalid regex pattern")
});
static NAME_IS_TOO_LONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"name is too long \(maximum is (\d+) characters\)")
        .expect("NAME_IS_TOO_LONG: invalid regex pattern")
});

/// The reason of a bad-request error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BadRequestReason {
    /// The given amount is less than the valid amount.
    AmountIsLessThanValidAmount {
        /// The smallest accepted amount in subunits, when the message
        /// carried one.
        valid_amount: Option<i64>,
        /// The currency the amount is denominated in.
        currency: Option<Currency>,
    },
    /// The given amount is greater than the valid amount.
    AmountIsGreaterThanValidAmount {
        /// The largest accepted amount in subunits, when the message
        /// carried one.
        valid_amount: Option<i64>,
        /// The currency the amount is denominated in.
        currency: Option<Currency>,
    },
    /// The given currency is invalid.
    InvalidCurrency,
    /// The customer name is empty.
    EmptyName,
    /// The customer name is too long.
    NameIsTooLong {
        /// The maximum accepted name length, when the message carried one.
        maximum: Option<u32>,
    },
    /// The customer name is invalid.
    InvalidName,
    /// The customer email is invalid.
    InvalidEmail,
    /// The customer phone number is invalid.
    InvalidPhoneNumber,
    /// The source type is not supported on this account.
    TypeNotSupported,
    /// The currency is not supported on this account.
    CurrencyNotSupported,
    /// Any other bad-request reason, carrying the original message text.
    Other(String),
}

impl BadRequestReason {
    /// Classifies a single message fragment. Checks run in order; the first
    /// match wins.
    pub fn from_message(message: &str, currency: Option<Currency>) -> BadRequestReason {
        if message.starts_with("amount must be ") {
            Self::from_amount_message(message, currency)
        } else if message.contains("currency must be") {
            Self::InvalidCurrency
        } else if message.contains("type") {
            Self::TypeNotSupported
        } else if message.contains("currency") {
            Self::CurrencyNotSupported
        } else if message.contains("name") && message.contains("blank") {
            Self::EmptyName
        } else if message.contains("name") && message.contains("invalid") {
            Self::InvalidName
        } else if message.starts_with("name is too long") {
            match Self::from_name_too_long_message(message) {
                Some(reason) => reason,
                None => Self::NameIsTooLong { maximum: None },
            }
        } else if message.contains("name") {
            Self::NameIsTooLong { maximum: None }
        } else if message.contains("email") {
            Self::InvalidEmail
        } else if message.contains("phone") {
            Self::InvalidPhoneNumber
        } else {
            Self::Other(message.to_string())
        }
    }

    /// Resolves an "amount must be ..." message.
    ///
    /// The backend phrases the violated side of the limit, hence the
    /// inversion: "must be greater than N" reports an amount below the
    /// floor N, "must be less than N" an amount above the ceiling N.
    fn from_amount_message(message: &str, currency: Option<Currency>) -> BadRequestReason {
        if let Some(captures) = AMOUNT_GREATER_THAN.captures(message) {
            Self::AmountIsLessThanValidAmount {
                valid_amount: captures[1].parse().ok(),
                currency,
            }
        } else if let Some(captures) = AMOUNT_LESS_THAN.captures(message) {
            Self::AmountIsGreaterThanValidAmount {
                valid_amount: captures[1].parse().ok(),
                currency,
            }
        } else if let Some(captures) = AMOUNT_AT_LEAST.captures(message) {
            Self::AmountIsLessThanValidAmount {
                valid_amount: captures[1].parse().ok(),
                currency,
            }
        } else {
            Self::Other(message.to_string())
        }
    }

    fn from_name_too_long_message(message: &str) -> Option<BadRequestReason> {
        let captures = NAME_IS_TOO_LONG.captures(message)?;
        Some(Self::NameIsTooLong {
            maximum: captures[1].parse().ok(),
        })
    }

    /// A default descriptive message which a merchant may show to their
    /// user.
    pub fn description(&self) -> String {
        match self {
            Self::AmountIsLessThanValidAmount {
                valid_amount: Some(amount),
                currency: Some(currency),
            } => format!(
                "Amount is less than the valid amount of {}",
                currency.format_subunits(*amount)
            ),
            Self::AmountIsLessThanValidAmount { .. } => {
                "Amount is less than the valid amount".to_string()
            }
            Self::AmountIsGreaterThanValidAmount {
                valid_amount: Some(amount),
                currency: Some(currency),
            } => format!(
                "Amount exceeds the valid amount of {}",
                currency.format_subunits(*amount)
            ),
            Self::AmountIsGreaterThanValidAmount { .. } => {
                "Amount exceeds the valid amount".to_string()
            }
            Self::InvalidCurrency => "The currency is invalid".to_string(),
            Self::EmptyName => "The customer name is empty".to_string(),
            Self::NameIsTooLong {
                maximum: Some(maximum),
            } => format!("The customer name exceeds the {maximum} character limit"),
            Self::NameIsTooLong { maximum: None } => "The customer name is too long".to_string(),
            Self::InvalidName => "The customer name is invalid".to_string(),
            Self::InvalidEmail => "The customer email is invalid".to_string(),
            Self::InvalidPhoneNumber => "The customer phone number is invalid".to_string(),
            Self::TypeNotSupported => {
                "The source type is not supported by this account".to_string()
            }
            Self::CurrencyNotSupported => {
                "The currency is not supported by this account".to_string()
            }
            Self::Other(message) => format!("Bad request: {message}"),
        }
    }

    /// A default suggestion for recovering from this error. Empty results
    /// are not produced; `Other` echoes the raw message.
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::AmountIsLessThanValidAmount {
                valid_amount: Some(amount),
                currency: Some(currency),
            } => format!(
                "Please create a source with an amount that is greater than {}",
                currency.format_subunits(*amount)
            ),
            Self::AmountIsLessThanValidAmount { .. } => {
                "Please create a source with a greater amount".to_string()
            }
            Self::AmountIsGreaterThanValidAmount {
                valid_amount: Some(amount),
                currency: Some(currency),
            } => format!(
                "Please create a source with an amount which is less than {}",
                currency.format_subunits(*amount)
            ),
            Self::AmountIsGreaterThanValidAmount { .. } => {
                "Please create a source with less amount".to_string()
            }
            Self::InvalidCurrency => "Bad request".to_string(),
            Self::EmptyName => "Please input customer name".to_string(),
            Self::NameIsTooLong {
                maximum: Some(maximum),
            } => format!("Please input customer name which is no longer than {maximum} characters"),
            Self::NameIsTooLong { maximum: None } => {
                "Please input shorter customer name".to_string()
            }
            Self::InvalidName => "Please review the customer name".to_string(),
            Self::InvalidEmail => "Please review the customer email".to_string(),
            Self::InvalidPhoneNumber => "Please review the customer phone number".to_string(),
            Self::TypeNotSupported => "Please review the source type".to_string(),
            Self::CurrencyNotSupported => "Please choose another currency".to_string(),
            Self::Other(message) => message.clone(),
        }
    }

    /// Rank in the fixed display order. Lower ranks sort first; `Other`
    /// always sorts last.
    fn rank(&self) -> u8 {
        match self {
            Self::AmountIsLessThanValidAmount { .. } => 0,
            Self::AmountIsGreaterThanValidAmount { .. } => 1,
            Self::InvalidCurrency => 2,
            Self::EmptyName => 3,
            Self::NameIsTooLong { .. } => 4,
            Self::InvalidName => 5,
            Self::InvalidEmail => 6,
            Self::InvalidPhoneNumber => 7,
            Self::TypeNotSupported => 8,
            Self::CurrencyNotSupported => 9,
            Self::Other(_) => 10,
        }
    }
}

impl fmt::Display for BadRequestReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Parses every bad-request reason out of a combined gateway message.
///
/// The message is split in three stages (`", and "`, then `", "`, then
/// `" and "`) because "and" appears both as a bare conjunction and inside
/// the serial-comma form. Fragments are classified, deduplicated, and
/// sorted into the fixed display order.
///
/// # Example
///
/// ```
/// use paysource::bad_request::{parse_reasons, BadRequestReason};
/// use paysource::Currency;
///
/// let reasons = parse_reasons(
///     "name cannot be blank, email is in invalid format, and phone_number must contain 10-11 digit characters",
///     Some(Currency::Thb),
/// );
/// assert_eq!(
///     reasons,
///     vec![
///         BadRequestReason::EmptyName,
///         BadRequestReason::InvalidEmail,
///         BadRequestReason::InvalidPhoneNumber,
///     ]
/// );
/// ```
pub fn parse_reasons(message: &str, currency: Option<Currency>) -> Vec<BadRequestReason> {
    let mut reasons: Vec<BadRequestReason> = Vec::new();
    let fragments = message
        .split(", and ")
        .flat_map(|part| part.split(", "))
        .flat_map(|part| part.split(" and "));

    for fragment in fragments {
        let reason = BadRequestReason::from_message(fragment, currency);
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    reasons.sort_by_key(BadRequestReason::rank);
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_inversion_less_than() {
        // "must be less than X" reports an amount ABOVE the ceiling X.
        assert_eq!(
            BadRequestReason::from_message("amount must be less than 50000", Some(Currency::Thb)),
            BadRequestReason::AmountIsGreaterThanValidAmount {
                valid_amount: Some(50_000),
                currency: Some(Currency::Thb),
            }
        );
    }

    #[test]
    fn test_amount_inversion_greater_than() {
        assert_eq!(
            BadRequestReason::from_message(
                "amount must be greater than 500000",
                Some(Currency::Thb)
            ),
            BadRequestReason::AmountIsLessThanValidAmount {
                valid_amount: Some(500_000),
                currency: Some(Currency::Thb),
            }
        );
    }

    #[test]
    fn test_amount_at_least() {
        assert_eq!(
            BadRequestReason::from_message("amount must be at least 150", Some(Currency::Jpy)),
            BadRequestReason::AmountIsLessThanValidAmount {
                valid_amount: Some(150),
                currency: Some(Currency::Jpy),
            }
        );
    }

    #[test]
    fn test_unparseable_amount_message() {
        assert_eq!(
            BadRequestReason::from_message("amount must be rounded", None),
            BadRequestReason::Other("amount must be rounded".to_string())
        );
    }

    #[test]
    fn test_currency_branches() {
        assert_eq!(
            BadRequestReason::from_message("currency must be one of THB", None),
            BadRequestReason::InvalidCurrency
        );
        assert_eq!(
            BadRequestReason::from_message("currency is not supported", None),
            BadRequestReason::CurrencyNotSupported
        );
    }

    #[test]
    fn test_type_branch_precedes_currency() {
        // "type" is checked before the bare "currency" fallthrough.
        assert_eq!(
            BadRequestReason::from_message("type is currently not supported", None),
            BadRequestReason::TypeNotSupported
        );
    }

    #[test]
    fn test_name_branches() {
        assert_eq!(
            BadRequestReason::from_message("name cannot be blank", None),
            BadRequestReason::EmptyName
        );
        assert_eq!(
            BadRequestReason::from_message("name is in invalid format", None),
            BadRequestReason::InvalidName
        );
        assert_eq!(
            BadRequestReason::from_message("name is too long (maximum is 10 characters)", None),
            BadRequestReason::NameIsTooLong { maximum: Some(10) }
        );
        // Prefixed but without a parseable maximum.
        assert_eq!(
            BadRequestReason::from_message("name is too long", None),
            BadRequestReason::NameIsTooLong { maximum: None }
        );
        // Any other name complaint.
        assert_eq!(
            BadRequestReason::from_message("name looks odd", None),
            BadRequestReason::NameIsTooLong { maximum: None }
        );
    }

    #[test]
    fn test_email_and_phone_branches() {
        assert_eq!(
            BadRequestReason::from_message("email is in invalid format", None),
            BadRequestReason::InvalidEmail
        );
        assert_eq!(
            BadRequestReason::from_message(
                "phone_number must contain 10-11 digit characters",
                None
            ),
            BadRequestReason::InvalidPhoneNumber
        );
    }

    #[test]
    fn test_fallback_to_other() {
        assert_eq!(
            BadRequestReason::from_message("completely novel complaint", None),
            BadRequestReason::Other("completely novel complaint".to_string())
        );
    }

    #[test]
    fn test_parse_multiple_reasons_in_display_order() {
        let reasons = parse_reasons(
            "name cannot be blank, email is in invalid format, and phone_number must contain 10-11 digit characters",
            Some(Currency::Thb),
        );
        assert_eq!(
            reasons,
            vec![
                BadRequestReason::EmptyName,
                BadRequestReason::InvalidEmail,
                BadRequestReason::InvalidPhoneNumber,
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_bare_and() {
        let reasons = parse_reasons(
            "email is in invalid format and phone_number must contain 10-11 digit characters",
            None,
        );
        assert_eq!(
            reasons,
            vec![
                BadRequestReason::InvalidEmail,
                BadRequestReason::InvalidPhoneNumber,
            ]
        );
    }

    #[test]
    fn test_parse_sorts_amount_first_and_other_last() {
        let reasons = parse_reasons(
            "unrecognized gibberish, and amount must be at least 150",
            Some(Currency::Jpy),
        );
        assert_eq!(
            reasons,
            vec![
                BadRequestReason::AmountIsLessThanValidAmount {
                    valid_amount: Some(150),
                    currency: Some(Currency::Jpy),
                },
                BadRequestReason::Other("unrecognized gibberish".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_deduplicates() {
        let reasons = parse_reasons("email is invalid, email is in invalid format", None);
        assert_eq!(reasons, vec![BadRequestReason::InvalidEmail]);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            BadRequestReason::AmountIsGreaterThanValidAmount {
                valid_amount: Some(50_000),
                currency: Some(Currency::Thb),
            }
            .description(),
            "Amount exceeds the valid amount of 500"
        );
        assert_eq!(
            BadRequestReason::AmountIsLessThanValidAmount {
                valid_amount: Some(150),
                currency: Some(Currency::Jpy),
            }
            .description(),
            "Amount is less than the valid amount of 150"
        );
        assert_eq!(
            BadRequestReason::NameIsTooLong { maximum: Some(10) }.description(),
            "The customer name exceeds the 10 character limit"
        );
        assert_eq!(
            BadRequestReason::Other("x".to_string()).description(),
            "Bad request: x"
        );
    }

    #[test]
    fn test_recovery_suggestions_non_empty() {
        let all = [
            BadRequestReason::AmountIsLessThanValidAmount {
                valid_amount: None,
                currency: None,
            },
            BadRequestReason::AmountIsGreaterThanValidAmount {
                valid_amount: None,
                currency: None,
            },
            BadRequestReason::InvalidCurrency,
            BadRequestReason::EmptyName,
            BadRequestReason::NameIsTooLong { maximum: None },
            BadRequestReason::InvalidName,
            BadRequestReason::InvalidEmail,
            BadRequestReason::InvalidPhoneNumber,
            BadRequestReason::TypeNotSupported,
            BadRequestReason::CurrencyNotSupported,
        ];
        for reason in all {
            assert!(!reason.description().is_empty());
            assert!(!reason.recovery_suggestion().is_empty());
        }
    }
}
