//! # paysource
//!
//! Core models for a payment-gateway SDK: card number (PAN) validation,
//! gateway error-taxonomy parsing, and the tagged payment-source wire
//! codec.
//!
//! ## PAN validation
//!
//! ```rust
//! use paysource::{CardBrand, Pan};
//!
//! let pan = Pan::new("4242-4242-4242-4242");
//! assert_eq!(pan.brand(), Some(CardBrand::Visa));
//! assert!(pan.is_valid());
//!
//! // Safe for logging - the middle digits are masked
//! println!("Card: {}", pan.masked()); // "424242XXXXXX4242"
//! assert_eq!(pan.last_digits(), "4242");
//! ```
//!
//! ## Gateway error parsing
//!
//! ```rust
//! use paysource::GatewayError;
//!
//! let envelope = r#"{
//!     "object": "error",
//!     "location": "https://docs.example/api-errors#bad-request",
//!     "code": "bad_request",
//!     "message": "amount must be less than 50000"
//! }"#;
//!
//! let error: GatewayError = serde_json::from_str(envelope).unwrap();
//! assert_eq!(error.description(), "Amount exceeds the valid amount of 500");
//! ```
//!
//! ## Payment-source codec
//!
//! Payment methods travel as one flat JSON object keyed by a `type`
//! discriminator:
//!
//! ```rust
//! use paysource::payment::{Payment, TrueMoneyWallet};
//!
//! let payment: Payment =
//!     serde_json::from_str(r#"{"type":"truemoney","phone_number":"0812345678"}"#).unwrap();
//! assert_eq!(
//!     payment,
//!     Payment::TrueMoneyWallet(TrueMoneyWallet {
//!         phone_number: "0812345678".to_string(),
//!     })
//! );
//!
//! let json = serde_json::to_value(&payment).unwrap();
//! assert_eq!(json["type"], "truemoney");
//! ```
//!
//! ## Scope
//!
//! This crate is a pure model layer: no I/O, no shared mutable state, no
//! locking. Every function is synchronous and side-effect-free, so callers
//! may run them on any thread; HTTP, UI and web-authentication flows are
//! external collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod bad_request;
pub mod brand;
pub mod currency;
pub mod error;
pub mod format;
pub mod invalid_card;
pub mod luhn;
pub mod pan;
pub mod payment;
pub mod source;
pub mod source_type;

// Re-export main types at crate root
pub use bad_request::BadRequestReason;
pub use brand::{detect_brand, CardBrand};
pub use currency::Currency;
pub use error::{ApiErrorCode, GatewayError, UnexpectedError};
pub use invalid_card::InvalidCardReason;
pub use pan::Pan;
pub use payment::Payment;
pub use source::{CreateSourcePayload, Flow, Source};
pub use source_type::SourceType;
