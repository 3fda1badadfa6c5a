//! Payment-method type codes.
//!
//! `SourceType` enumerates every payment-method code the gateway knows,
//! plus an [`SourceType::Other`] escape hatch carrying the raw code so that
//! decoding a source never fails on an unknown method.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source type of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// Alipay (Online)
    Alipay,
    /// Alipay CN
    AlipayCn,
    /// Alipay Hongkong
    AlipayHk,
    /// Atome App Redirection
    Atome,
    /// Apple Pay
    ApplePay,
    /// Alipay In-Store
    BarcodeAlipay,
    /// Lotus's Bill Payment
    BillPaymentTescoLotus,
    /// Boost
    Boost,
    /// DANA
    Dana,
    /// DuitNow Online Banking/Wallets
    DuitNowObw,
    /// DuitNow QR
    DuitNowQr,
    /// Konbini, Pay-easy, and Online Banking
    EContext,
    /// Malaysia FPX
    Fpx,
    /// GCash
    Gcash,
    /// GrabPay
    GrabPay,
    /// GrabPay (RMS)
    GrabPayRms,
    /// Bank of Ayudhya (Krungsri) installments
    InstallmentBay,
    /// Bangkok Bank installments
    InstallmentBbl,
    /// Krungsri First Choice installments
    InstallmentFirstChoice,
    /// Kasikorn Bank installments
    InstallmentKBank,
    /// Krungthai Card (KTC) installments
    InstallmentKtc,
    /// Maybank installments
    InstallmentMbb,
    /// Siam Commercial Bank installments
    InstallmentScb,
    /// TMBThanachart Bank (TTB) installments
    InstallmentTtb,
    /// United Overseas Bank (UOB) installments
    InstallmentUob,
    /// Krungthai Card (KTC) white-label installments
    InstallmentWhiteLabelKtc,
    /// Kasikorn Bank white-label installments
    InstallmentWhiteLabelKBank,
    /// Siam Commercial Bank white-label installments
    InstallmentWhiteLabelScb,
    /// Bangkok Bank white-label installments
    InstallmentWhiteLabelBbl,
    /// Krungsri white-label installments
    InstallmentWhiteLabelBay,
    /// Krungsri First Choice white-label installments
    InstallmentWhiteLabelFirstChoice,
    /// United Overseas Bank (UOB) white-label installments
    InstallmentWhiteLabelUob,
    /// TMBThanachart Bank white-label installments
    InstallmentWhiteLabelTtb,
    /// Bank of Ayudhya (Krungsri) internet banking
    InternetBankingBay,
    /// Bangkok Bank internet banking
    InternetBankingBbl,
    /// KakaoPay
    KakaoPay,
    /// Maybank QR
    MaybankQrPay,
    /// Krungsri (KMA) mobile banking
    MobileBankingBay,
    /// Bangkok Bank (Bualuang mBanking) mobile banking
    MobileBankingBbl,
    /// KBank (K PLUS) mobile banking
    MobileBankingKBank,
    /// Krung Thai (KTB NEXT) mobile banking
    MobileBankingKtb,
    /// OCBC Digital
    OcbcDigital,
    /// SCB (SCB Easy) mobile banking
    MobileBankingScb,
    /// PayNow
    PayNow,
    /// PayPay
    PayPay,
    /// Pay with Points (Citi)
    PointsCiti,
    /// PromptPay
    PromptPay,
    /// Rabbit LINE Pay
    RabbitLinepay,
    /// ShopeePay QR
    ShopeePay,
    /// ShopeePay App Redirection
    ShopeePayJumpApp,
    /// Touch 'n Go
    TouchNGo,
    /// Touch 'n Go (Alipay+)
    TouchNGoAlipayPlus,
    /// TrueMoney Wallet
    TrueMoneyWallet,
    /// TrueMoney App Redirection
    TrueMoneyJumpApp,
    /// WeChat Pay App Redirection
    WeChat,
    /// An unrecognized payment-method code, carried verbatim.
    Other(String),
}

impl SourceType {
    /// Every known payment-method type.
    pub const ALL: [SourceType; 55] = [
        SourceType::Alipay,
        SourceType::AlipayCn,
        SourceType::AlipayHk,
        SourceType::Atome,
        SourceType::ApplePay,
        SourceType::BarcodeAlipay,
        SourceType::BillPaymentTescoLotus,
        SourceType::Boost,
        SourceType::Dana,
        SourceType::DuitNowObw,
        SourceType::DuitNowQr,
        SourceType::EContext,
        SourceType::Fpx,
        SourceType::Gcash,
        SourceType::GrabPay,
        SourceType::GrabPayRms,
        SourceType::InstallmentBay,
        SourceType::InstallmentBbl,
        SourceType::InstallmentFirstChoice,
        SourceType::InstallmentKBank,
        SourceType::InstallmentKtc,
        SourceType::InstallmentMbb,
        SourceType::InstallmentScb,
        SourceType::InstallmentTtb,
        SourceType::InstallmentUob,
        SourceType::InstallmentWhiteLabelKtc,
        SourceType::InstallmentWhiteLabelKBank,
        SourceType::InstallmentWhiteLabelScb,
        SourceType::InstallmentWhiteLabelBbl,
        SourceType::InstallmentWhiteLabelBay,
        SourceType::InstallmentWhiteLabelFirstChoice,
        SourceType::InstallmentWhiteLabelUob,
        SourceType::InstallmentWhiteLabelTtb,
        SourceType::InternetBankingBay,
        SourceType::InternetBankingBbl,
        SourceType::KakaoPay,
        SourceType::MaybankQrPay,
        SourceType::MobileBankingBay,
        SourceType::MobileBankingBbl,
        SourceType::MobileBankingKBank,
        SourceType::MobileBankingKtb,
        SourceType::OcbcDigital,
        SourceType::MobileBankingScb,
        SourceType::PayNow,
        SourceType::PayPay,
        SourceType::PointsCiti,
        SourceType::PromptPay,
        SourceType::RabbitLinepay,
        SourceType::ShopeePay,
        SourceType::ShopeePayJumpApp,
        SourceType::TouchNGo,
        SourceType::TouchNGoAlipayPlus,
        SourceType::TrueMoneyWallet,
        SourceType::TrueMoneyJumpApp,
        SourceType::WeChat,
    ];
    /// The wire code of this payment-method type.
    pub fn code(&self) -> &str {
        match self {
            Self::Alipay => "alipay",
            Self::AlipayCn => "alipay_cn",
            Self::AlipayHk => "alipay_hk",
            Self::Atome => "atome",
            Self::ApplePay => "applepay",
            Self::BarcodeAlipay => "barcode_alipay",
            Self::BillPaymentTescoLotus => "bill_payment_tesco_lotus",
            Self::Boost => "boost",
            Self::Dana => "dana",
            Self::DuitNowObw => "duitnow_obw",
            Self::DuitNowQr => "duitnow_qr",
            Self::EContext => "econtext",
            Self::Fpx => "fpx",
            Self::Gcash => "gcash",
            Self::GrabPay => "grabpay",
            Self::GrabPayRms => "grabpay_rms",
            Self::InstallmentBay => "installment_bay",
            Self::InstallmentBbl => "installment_bbl",
            Self::InstallmentFirstChoice => "installment_first_choice",
            Self::InstallmentKBank => "installment_kbank",
            Self::InstallmentKtc => "installment_ktc",
            Self::InstallmentMbb => "installment_mbb",
            Self::InstallmentScb => "installment_scb",
            Self::InstallmentTtb => "installment_ttb",
            Self::InstallmentUob => "installment_uob",
            Self::InstallmentWhiteLabelKtc => "installment_wlb_ktc",
            Self::InstallmentWhiteLabelKBank => "installment_wlb_kbank",
            Self::InstallmentWhiteLabelScb => "installment_wlb_scb",
            Self::InstallmentWhiteLabelBbl => "installment_wlb_bbl",
            Self::InstallmentWhiteLabelBay => "installment_wlb_bay",
            Self::InstallmentWhiteLabelFirstChoice => "installment_wlb_first_choice",
            Self::InstallmentWhiteLabelUob => "installment_wlb_uob",
            Self::InstallmentWhiteLabelTtb => "installment_wlb_ttb",
            Self::InternetBankingBay => "internet_banking_bay",
            Self::InternetBankingBbl => "internet_banking_bbl",
            Self::KakaoPay => "kakaopay",
            Self::MaybankQrPay => "maybank_qr",
            Self::MobileBankingBay => "mobile_banking_bay",
            Self::MobileBankingBbl => "mobile_banking_bbl",
            Self::MobileBankingKBank => "mobile_banking_kbank",
            Self::MobileBankingKtb => "mobile_banking_ktb",
            Self::OcbcDigital => "mobile_banking_ocbc",
            Self::MobileBankingScb => "mobile_banking_scb",
            Self::PayNow => "paynow",
            Self::PayPay => "paypay",
            Self::PointsCiti => "points_citi",
            Self::PromptPay => "promptpay",
            Self::RabbitLinepay => "rabbit_linepay",
            Self::ShopeePay => "shopeepay",
            Self::ShopeePayJumpApp => "shopeepay_jumpapp",
            Self::TouchNGo => "touch_n_go",
            Self::TouchNGoAlipayPlus => "touch_n_go_alipay_plus",
            Self::TrueMoneyWallet => "truemoney",
            Self::TrueMoneyJumpApp => "truemoney_jumpapp",
            Self::WeChat => "wechat_pay",
            Self::Other(code) => code,
        }
    }

    /// Resolves a wire code to a source type. Unknown codes produce
    /// [`SourceType::Other`]; this never fails.
    pub fn from_code(code: &str) -> SourceType {
        Self::ALL
            .iter()
            .find(|variant| variant.code() == code)
            .cloned()
            .unwrap_or_else(|| Self::Other(code.to_string()))
    }

    /// The installment payment-method family.
    pub fn installments() -> &'static [SourceType] {
        const INSTALLMENTS: &[SourceType] = &[
            SourceType::InstallmentBay,
            SourceType::InstallmentBbl,
            SourceType::InstallmentFirstChoice,
            SourceType::InstallmentKBank,
            SourceType::InstallmentKtc,
            SourceType::InstallmentMbb,
            SourceType::InstallmentScb,
            SourceType::InstallmentTtb,
            SourceType::InstallmentUob,
            SourceType::InstallmentWhiteLabelKtc,
            SourceType::InstallmentWhiteLabelKBank,
            SourceType::InstallmentWhiteLabelScb,
            SourceType::InstallmentWhiteLabelBbl,
            SourceType::InstallmentWhiteLabelBay,
            SourceType::InstallmentWhiteLabelFirstChoice,
            SourceType::InstallmentWhiteLabelUob,
            SourceType::InstallmentWhiteLabelTtb,
        ];
        INSTALLMENTS
    }

    /// Returns true if this type belongs to the installment family.
    pub fn is_installment(&self) -> bool {
        Self::installments().contains(self)
    }

    /// The internet-banking payment-method family.
    pub fn internet_banking() -> &'static [SourceType] {
        const INTERNET_BANKING: &[SourceType] = &[
            SourceType::InternetBankingBay,
            SourceType::InternetBankingBbl,
        ];
        INTERNET_BANKING
    }

    /// Returns true if this type belongs to the internet-banking family.
    pub fn is_internet_banking(&self) -> bool {
        Self::internet_banking().contains(self)
    }

    /// The mobile-banking payment-method family.
    pub fn mobile_banking() -> &'static [SourceType] {
        const MOBILE_BANKING: &[SourceType] = &[
            SourceType::MobileBankingScb,
            SourceType::MobileBankingKBank,
            SourceType::MobileBankingBay,
            SourceType::MobileBankingBbl,
            SourceType::MobileBankingKtb,
            SourceType::OcbcDigital,
        ];
        MOBILE_BANKING
    }

    /// Returns true if this type belongs to the mobile-banking family.
    pub fn is_mobile_banking(&self) -> bool {
        Self::mobile_banking().contains(self)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(SourceType::from_code(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_known_types() {
        for variant in &SourceType::ALL {
            assert_eq!(SourceType::from_code(variant.code()), *variant);
        }
    }

    #[test]
    fn test_all_codes_unique() {
        let mut codes: Vec<&str> = SourceType::ALL.iter().map(SourceType::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), SourceType::ALL.len());
    }

    #[test]
    fn test_unknown_code_falls_back_to_other() {
        let st = SourceType::from_code("hologram_pay");
        assert_eq!(st, SourceType::Other("hologram_pay".to_string()));
        assert_eq!(st.code(), "hologram_pay");
    }

    #[test]
    fn test_installment_family() {
        assert!(SourceType::InstallmentBay.is_installment());
        assert!(SourceType::InstallmentWhiteLabelKtc.is_installment());
        assert!(!SourceType::TrueMoneyWallet.is_installment());
        assert!(!SourceType::Other("installment_xyz".to_string()).is_installment());
        assert_eq!(SourceType::installments().len(), 17);
    }

    #[test]
    fn test_banking_families() {
        assert!(SourceType::InternetBankingBay.is_internet_banking());
        assert!(!SourceType::MobileBankingScb.is_internet_banking());
        assert!(SourceType::MobileBankingScb.is_mobile_banking());
        assert!(SourceType::OcbcDigital.is_mobile_banking());
        assert!(!SourceType::PromptPay.is_mobile_banking());
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&SourceType::TrueMoneyWallet).unwrap(),
            "\"truemoney\""
        );
        let st: SourceType = serde_json::from_str("\"duitnow_obw\"").unwrap();
        assert_eq!(st, SourceType::DuitNowObw);
        let other: SourceType = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(other, SourceType::Other("mystery".to_string()));
    }
}
