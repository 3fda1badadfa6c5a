//! Alipay in-store (barcode) payload.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};

/// Payload for the `Alipay In-Store` payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeAlipay {
    /// Alipay barcode number.
    pub barcode: String,
    /// Store identifier. If a store identifier is already configured on the
    /// account, this parameter must not be present.
    #[serde(rename = "store_id", skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Store name. If a store name is already configured on the account,
    /// this parameter must not be present.
    #[serde(rename = "store_name", skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Terminal identifier.
    #[serde(rename = "terminal_id", skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
}

impl BarcodeAlipay {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::BarcodeAlipay;
}
