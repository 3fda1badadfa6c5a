//! Order line-item payload.

use serde::{Deserialize, Serialize};

/// Information about an item included in the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// SKU/product id of the item.
    pub sku: String,
    /// Category of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Name of the item.
    pub name: String,
    /// Quantity of the item.
    pub quantity: u32,
    /// Selling price of the item in the smallest unit of currency.
    pub amount: i64,
    /// URI of the item.
    #[serde(rename = "item_uri", skip_serializing_if = "Option::is_none")]
    pub item_uri: Option<String>,
    /// Image URI of the item.
    #[serde(rename = "image_uri", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Brand of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}
