//! Installment payment payload.
//!
//! Installment methods share one payload across all issuing banks; the
//! bank is the source type itself, so the payload carries its own `type`
//! key.

use crate::source_type::SourceType;
use serde::{Deserialize, Serialize};

/// Payload for installment payment methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Chosen installment term length in months.
    #[serde(rename = "installment_term")]
    pub installment_term: u32,
    /// Whether the merchant absorbs the interest (true when they do).
    #[serde(
        rename = "zero_interest_installments",
        skip_serializing_if = "Option::is_none"
    )]
    pub zero_interest_installments: Option<bool>,
    /// Source type of the payment, naming the issuing bank.
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

impl Installment {
    /// Available installment terms (months) for a given source type. Types
    /// outside the installment family have none.
    pub fn available_terms(source_type: &SourceType) -> &'static [u32] {
        match source_type {
            SourceType::InstallmentBay => &[3, 4, 6, 10],
            SourceType::InstallmentWhiteLabelBay => &[3, 4, 6, 9, 10],
            SourceType::InstallmentFirstChoice => &[3, 4, 6, 10, 12, 18, 24, 36],
            SourceType::InstallmentWhiteLabelFirstChoice => &[3, 4, 6, 9, 10, 12, 18, 24, 36],
            SourceType::InstallmentBbl => &[4, 6, 8, 10],
            SourceType::InstallmentWhiteLabelBbl => &[4, 6, 8, 10],
            SourceType::InstallmentMbb => &[6, 12, 18, 24],
            SourceType::InstallmentKtc => &[3, 4, 5, 6, 7, 8, 9, 10],
            SourceType::InstallmentWhiteLabelKtc => &[3, 4, 5, 6, 7, 8, 9, 10],
            SourceType::InstallmentKBank => &[3, 4, 6, 10],
            SourceType::InstallmentWhiteLabelKBank => &[3, 6, 10],
            SourceType::InstallmentScb => &[3, 4, 6, 9, 10],
            SourceType::InstallmentWhiteLabelScb => &[3, 4, 6, 9, 10],
            SourceType::InstallmentTtb => &[3, 4, 6, 10, 12],
            SourceType::InstallmentWhiteLabelTtb => &[4, 6, 10],
            SourceType::InstallmentUob => &[3, 4, 6, 10],
            _ => &[],
        }
    }
}
