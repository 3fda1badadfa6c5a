//! DuitNow Online Banking/Wallets payload.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload for the `DuitNow Online Banking/Wallets` payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuitNowObw {
    /// Bank selected by the customer.
    pub bank: Bank,
}

impl DuitNowObw {
    /// Payment method identifier.
    pub const SOURCE_TYPE: SourceType = SourceType::DuitNowObw;
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
            Self::Bsn => "bsn",
            Self::Cimb => "cimb",
            Self::Hongleong => "hongleong",
            Self::Hsbc => "hsbc",
            Self::Kfh => "kfh",
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
