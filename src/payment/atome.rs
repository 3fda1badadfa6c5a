//! Atome app-redirection payload.

use super::{Address, Item};
use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};

/// Payload for the `Atome App Redirection` payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atome {
    /// Customer mobile number with a country code (example: +66876543210 or
    /// 0876543210).
    #[serde(rename = "phone_number")]
    pub phone_number: String,
    /// Customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Shipping address.
    pub shipping: Address,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    /// Information about items included in the order.
    pub items: Vec<Item>,
}

impl Atome {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::Atome;
}
