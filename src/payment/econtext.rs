//! Konbini, Pay-easy and Online Banking (EContext) payload.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};

/// Customer information for the `Konbini, Pay-easy, and Online Banking`
/// payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EContext {
    /// Customer name. The name cannot be longer than 10 characters.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone number. Must contain only digits and have 10 or 11
    /// characters.
    #[serde(rename = "phone_number")]
    pub phone_number: String,
}

impl EContext {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::EContext;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let payload = EContext {
            name: "ヤマダタロウ".to_string(),
            email: "taro@example.com".to_string(),
            phone_number: "0812345678".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"phone_number\""));
        let back: EContext = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }

    #[test]
    fn test_all_fields_required() {
        let result: Result<EContext, _> =
            serde_json::from_str(r#"{"name":"a","email":"a@example.com"}"#);
        assert!(result.is_err());
    }
}
