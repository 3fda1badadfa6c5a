//! TrueMoney Wallet payload.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};

/// Customer information for the `TrueMoney Wallet` payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueMoneyWallet {
    /// The customer's phone number. Contains only digits and has 10 or 11
    /// characters.
    #[serde(rename = "phone_number")]
    pub phone_number: String,
}

impl TrueMoneyWallet {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::TrueMoneyWallet;
}
