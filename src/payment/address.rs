//! Shipping/billing address payload.

use serde::{Deserialize, Serialize};

/// A shipping or billing address attached to a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address country as two-letter ISO 3166 code.
    #[serde(rename = "country")]
    pub country_code: String,
    /// Address city.
    pub city: String,
    /// Address state.
    pub state: String,
    /// Address street #1.
    pub street1: String,
    /// Address street #2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// Address postal code.
    pub postal_code: String,
}
