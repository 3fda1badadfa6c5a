//! Supported settlement currencies.
//!
//! Gateway amounts are always integer subunits (satang, cents); the
//! `factor` of a currency converts between subunits and display units.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion factor for cent-based currencies.
pub const CENT_BASED_CURRENCY_FACTOR: i64 = 100;
/// Conversion factor for currencies whose subunit equals the unit.
pub const IDENTICAL_BASED_CURRENCY_FACTOR: i64 = 1;

/// A supported ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Australian dollar
    Aud,
    /// Canadian dollar
    Cad,
    /// Swiss franc
    Chf,
    /// Chinese yuan
    Cny,
    /// Danish krone
    Dkk,
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// Hong Kong dollar
    Hkd,
    /// Indonesian rupiah
    Idr,
    /// Japanese yen
    Jpy,
    /// Malaysian ringgit
    Myr,
    /// Singapore dollar
    Sgd,
    /// Thai baht
    Thb,
    /// United States dollar
    Usd,
}

impl Currency {
    /// The fallback currency used when no explicit currency is known.
    pub const MAIN: Currency = Currency::Thb;

    /// All supported currencies.
    pub const ALL: [Currency; 14] = [
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Dkk,
        Currency::Eur,
        Currency::Gbp,
        Currency::Hkd,
        Currency::Idr,
        Currency::Jpy,
        Currency::Myr,
        Currency::Sgd,
        Currency::Thb,
        Currency::Usd,
    ];

    /// The uppercase three-letter ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Hkd => "HKD",
            Self::Idr => "IDR",
            Self::Jpy => "JPY",
            Self::Myr => "MYR",
            Self::Sgd => "SGD",
            Self::Thb => "THB",
            Self::Usd => "USD",
        }
    }

    /// Creates a currency from an ISO 4217 code. Unknown or absent codes
    /// fall back to [`Currency::MAIN`].
    pub fn from_code(code: Option<&str>) -> Currency {
        let Some(code) = code else {
            return Self::MAIN;
        };

        Self::ALL
            .iter()
            .find(|c| c.code() == code)
            .copied()
            .unwrap_or(Self::MAIN)
    }

    /// How many subunits make up 1 unit of this currency. JPY has no
    /// subunit; everything else is cent-based.
    pub const fn factor(&self) -> i64 {
        match self {
            Self::Jpy => IDENTICAL_BASED_CURRENCY_FACTOR,
            _ => CENT_BASED_CURRENCY_FACTOR,
        }
    }

    /// Converts a subunit amount to display units.
    pub fn convert_from_subunit(&self, value: i64) -> f64 {
        value as f64 / self.factor() as f64
    }

    /// Converts a display-unit amount to subunits.
    pub fn convert_to_subunit(&self, value: f64) -> i64 {
        (value * self.factor() as f64) as i64
    }

    /// Formats a subunit amount for display in user-facing messages.
    ///
    /// Whole-unit amounts print without decimals, fractional amounts with
    /// two.
    pub fn format_subunits(&self, value: i64) -> String {
        if value % self.factor() == 0 {
            format!("{}", value / self.factor())
        } else {
            format!("{:.2}", self.convert_from_subunit(value))
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::from_code(Some(&code)))
    }
}
