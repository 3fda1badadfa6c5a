//! Payment source objects.
//!
//! Sources are methods for accepting payments through non-card channels.
//! On the wire a source is one flat JSON object: the envelope fields (id,
//! amount, currency, flow) and the payment-method fields are siblings, so
//! the payment details are flattened into the same map.

use crate::currency::Currency;
use crate::payment::Payment;
use serde::{Deserialize, Serialize};

/// A payment source returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Source identifier.
    pub id: String,
    /// Whether this is a live (true) or test (false) source.
    #[serde(rename = "livemode")]
    pub is_live_mode: bool,
    /// Source amount in the smallest unit of the source currency.
    pub amount: i64,
    /// Currency for the source as a three-letter ISO 4217 code.
    pub currency: String,
    /// The flow payers need to go through to complete the payment.
    pub flow: Flow,
    /// The payment details of this source.
    #[serde(flatten)]
    pub payment: Payment,
}

/// The payment flow payers need to go through to complete the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Payer must be redirected to an external website to complete the
    /// payment.
    Redirect,
    /// Payer will receive payment information to complete the payment
    /// offline.
    Offline,
    /// Payer must be redirected to an app to complete the payment.
    AppRedirect,
    /// Any other unknown flow.
    Unknown,
}

impl Flow {
    /// The wire value of this flow.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Redirect => "redirect",
            Self::Offline => "offline",
            Self::AppRedirect => "app_redirect",
            Self::Unknown => "unknown",
        }
    }
}

impl Serialize for Flow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Flow {
    /// Unrecognized flow values decode to [`Flow::Unknown`] rather than
    /// failing.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "redirect" => Self::Redirect,
            "offline" => Self::Offline,
            "app_redirect" => Self::AppRedirect,
            _ => Self::Unknown,
        })
    }
}

/// The request body for creating a new source.
///
/// Amounts are integer subunits; the payment-method fields are flattened
/// next to `amount` and `currency`, with the method's `type` written by the
/// payment codec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSourcePayload {
    /// Source amount in the smallest unit of the source currency.
    pub amount: i64,
    /// Currency for the source.
    pub currency: Currency,
    /// The payment details for the source to create.
    #[serde(flatten)]
    pub payment: Payment,
}
