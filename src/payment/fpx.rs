//! Malaysia FPX payload.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload for the `Malaysia FPX` payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fpx {
    /// Bank selected by the customer.
    pub bank: Bank,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Fpx {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::Fpx;
}

/// Bank code selected by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    /// Affin Bank
    Affin,
    /// Alliance Bank (Personal)
    Alliance,
    /// AGRONet
    Agro,
    /// AmBank
    Ambank,
    /// Bank Islam
    Islam,
    /// Bank Muamalat
    Muamalat,
    /// Bank Rakyat
    Rakyat,
    /// Bank Of China
    Bocm,
    /// BSN
    Bsn,
    /// CIMB Clicks
    Cimb,
    /// Hong Leong Bank
    Hongleong,
    /// HSBC Bank
    Hsbc,
    /// KFH
    Kfh,
    /// Maybank2E
    Maybank2e,
    /// Maybank2U
    Maybank2u,
    /// OCBC Bank
    Ocbc,
    /// Public Bank
    Public,
    /// RHB Bank
    Rhb,
    /// Standard Chartered
    Sc,
    /// UOB Bank
    Uob,
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Affin => "affin",
            Self::Alliance => "alliance",
            Self::Agro => "agro",
            Self::Ambank => "ambank",
            Self::Islam => "islam",
            Self::Muamalat => "muamalat",
            Self::Rakyat => "rakyat",
            Self::Bocm => "bocm",
            Self::Bsn => "bsn",
            Self::Cimb => "cimb",
            Self::Hongleong => "hongleong",
            Self::Hsbc => "hsbc",
            Self::Kfh => "kfh",
            Self::Maybank2e => "maybank2e",
            Self::Maybank2u => "maybank2u",
            Self::Ocbc => "ocbc",
            Self::Public => "public",
            Self::Rhb => "rhb",
            Self::Sc => "sc",
            Self::Uob => "uob",
        };
        write!(f, "{code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let payload = Fpx {
            bank: Bank::Maybank2e,
            email: Some("customer@example.com".to_string()),
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: Fpx = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }

    #[test]
    fn test_email_optional() {
        let payload: Fpx = serde_json::from_str(r#"{"bank":"uob"}"#).unwrap();
        assert_eq!(payload.bank, Bank::Uob);
        assert_eq!(payload.email, None);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"bank":"uob"}"#);
    }

    #[test]
    fn test_missing_bank_fails() {
        let result: Result<Fpx, _> = serde_json::from_str(r#"{"email":"a@example.com"}"#);
        assert!(result.is_err());
    }
}
