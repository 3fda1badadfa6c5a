//! Payment-method details and the tagged wire codec.
//!
//! Some payment methods carry additional parameters (phone numbers, banks,
//! shipping addresses); others need only their type code. [`Payment`]
//! groups all supported methods behind one closed sum type.
//!
//! On the wire a payment is a flat JSON object: the discriminator key is
//! `"type"` and all payload fields are siblings at the top level, e.g.
//! `{"type":"truemoney","phone_number":"0812345678"}`. Each payload type
//! owns its snake_case key mapping; the union owns discriminator dispatch.

pub mod address;
pub mod atome;
pub mod barcode_alipay;
pub mod duitnow_obw;
pub mod econtext;
pub mod fpx;
pub mod installment;
pub mod item;
pub mod truemoney;

pub use address::Address;
pub use atome::Atome;
pub use barcode_alipay::BarcodeAlipay;
pub use duitnow_obw::DuitNowObw;
pub use econtext::EContext;
pub use fpx::Fpx;
pub use installment::Installment;
pub use item::Item;
pub use truemoney::TrueMoneyWallet;

use crate::source_type::SourceType;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{Error as SerError, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Details of a payment source: how the payment is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum Payment {
    /// Atome
    Atome(Atome),
    /// Alipay In-Store
    BarcodeAlipay(BarcodeAlipay),
    /// DuitNow Online Banking/Wallets
    DuitNowObw(DuitNowObw),
    /// Konbini, Pay-easy, and Online Banking
    EContext(EContext),
    /// Malaysia FPX
    Fpx(Fpx),
    /// Installment payments
    Installment(Installment),
    /// TrueMoney Wallet
    TrueMoneyWallet(TrueMoneyWallet),
    /// A payment method without additional parameters, or an unrecognized
    /// one; carries only the type code.
    SourceType(SourceType),
}

impl Payment {
    /// The source type of this payment, used as the wire discriminator.
    pub fn source_type(&self) -> SourceType {
        match self {
            Self::Atome(_) => Atome::SOURCE_TYPE,
            Self::BarcodeAlipay(_) => BarcodeAlipay::SOURCE_TYPE,
            Self::DuitNowObw(_) => DuitNowObw::SOURCE_TYPE,
            Self::EContext(_) => EContext::SOURCE_TYPE,
            Self::Fpx(_) => Fpx::SOURCE_TYPE,
            Self::Installment(details) => details.source_type.clone(),
            Self::TrueMoneyWallet(_) => TrueMoneyWallet::SOURCE_TYPE,
            Self::SourceType(source_type) => source_type.clone(),
        }
    }

    /// Returns true if sources of the given type need a payload beyond the
    /// bare type code.
    pub fn requires_additional_details(source_type: &SourceType) -> bool {
        const WITH_DETAILS: &[SourceType] = &[
            Atome::SOURCE_TYPE,
            BarcodeAlipay::SOURCE_TYPE,
            DuitNowObw::SOURCE_TYPE,
            EContext::SOURCE_TYPE,
            TrueMoneyWallet::SOURCE_TYPE,
            Fpx::SOURCE_TYPE,
        ];

        WITH_DETAILS.contains(source_type) || source_type.is_installment()
    }

    fn payload_fields<E: SerError>(&self) -> Result<serde_json::Map<String, Value>, E> {
        let value = match self {
            Self::Atome(details) => serde_json::to_value(details),
            Self::BarcodeAlipay(details) => serde_json::to_value(details),
            Self::DuitNowObw(details) => serde_json::to_value(details),
            Self::EContext(details) => serde_json::to_value(details),
            Self::Fpx(details) => serde_json::to_value(details),
            Self::Installment(details) => serde_json::to_value(details),
            Self::TrueMoneyWallet(details) => serde_json::to_value(details),
            Self::SourceType(_) => Ok(Value::Object(serde_json::Map::new())),
        };

        match value.map_err(E::custom)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(E::custom("payment payload must serialize to an object")),
        }
    }
}

impl Serialize for Payment {
    /// Flattens the payload's own fields to the top level and always writes
    /// the `type` discriminator, whichever variant this is.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = self.payload_fields::<S::Error>()?;
        fields.remove("type");

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("type", self.source_type().code())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Payment {
    /// Dispatches on the `type` discriminator: a known payload type decodes
    /// its payload from the sibling fields, an installment-family code
    /// decodes the shared installment payload, and anything else becomes a
    /// bare [`Payment::SourceType`]. Only a matched payload with missing
    /// required fields fails.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        fn payload<T: serde::de::DeserializeOwned, E: DeError>(value: Value) -> Result<T, E> {
            serde_json::from_value(value).map_err(E::custom)
        }

        let value = Value::deserialize(deserializer)?;
        let code = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?;
        let source_type = SourceType::from_code(code);

        let payment = if source_type == Atome::SOURCE_TYPE {
            Self::Atome(payload::<_, D::Error>(value)?)
        } else if source_type == BarcodeAlipay::SOURCE_TYPE {
            Self::BarcodeAlipay(payload::<_, D::Error>(value)?)
        } else if source_type == DuitNowObw::SOURCE_TYPE {
            Self::DuitNowObw(payload::<_, D::Error>(value)?)
        } else if source_type == EContext::SOURCE_TYPE {
            Self::EContext(payload::<_, D::Error>(value)?)
        } else if source_type == TrueMoneyWallet::SOURCE_TYPE {
            Self::TrueMoneyWallet(payload::<_, D::Error>(value)?)
        } else if source_type == Fpx::SOURCE_TYPE {
            Self::Fpx(payload::<_, D::Error>(value)?)
        } else if source_type.is_installment() {
            Self::Installment(payload::<_, D::Error>(value)?)
        } else {
            Self::SourceType(source_type)
        };

        Ok(payment)
    }
}
