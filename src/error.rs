//! Gateway error taxonomy.
//!
//! Errors come in two families: API errors decoded from the gateway's JSON
//! error envelope, and unexpected errors describing an absent or malformed
//! response. Every variant resolves to a non-empty display description;
//! recovery suggestions may legitimately be absent.

use crate::bad_request::{self, BadRequestReason};
use crate::currency::Currency;
use crate::invalid_card::{self, InvalidCardReason};
use serde::de::Deserializer;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt;

/// The error code of a gateway API error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// The card information is invalid.
    InvalidCard(Vec<InvalidCardReason>),
    /// The request is invalid.
    BadRequest(Vec<BadRequestReason>),
    /// The given authentication key is wrong.
    AuthenticationFailure,
    /// The requested service is not available for this account.
    ServiceNotFound,
    /// Any other error code, carried verbatim.
    Other(String),
}

impl ApiErrorCode {
    /// Builds an error code from the envelope's `code` and `message`
    /// fields. Unrecognized codes land in [`ApiErrorCode::Other`]; this
    /// never fails.
    ///
    /// `currency` is used to annotate amount limits parsed out of
    /// bad-request messages; pass `None` when the request currency is
    /// unknown and the main currency is assumed.
    pub fn from_envelope(code: &str, message: &str, currency: Option<Currency>) -> ApiErrorCode {
        match code {
            "invalid_card" => Self::InvalidCard(invalid_card::parse_reasons(message)),
            "bad_request" => Self::BadRequest(bad_request::parse_reasons(
                message,
                Some(currency.unwrap_or(Currency::MAIN)),
            )),
            "authentication_failure" => Self::AuthenticationFailure,
            "service_not_found" => Self::ServiceNotFound,
            _ => Self::Other(code.to_string()),
        }
    }
}

/// The reason of an unexpected (non-API) error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnexpectedError {
    /// The transport returned neither an error nor a response.
    NoErrorNorResponse,
    /// HTTP error status with no response data.
    HttpErrorWithNoData,
    /// HTTP error status with undecodable response data.
    HttpErrorResponseWithInvalidData,
    /// HTTP success status with no response data.
    HttpSuccessWithNoData,
    /// HTTP success status with undecodable response data.
    HttpSuccessWithInvalidData,
    /// A status code outside the recognized ranges.
    UnrecognizedHttpStatusCode(u16),
    /// Any other unexpected reason.
    Other(String),
}

impl UnexpectedError {
    const TRY_AGAIN_LATER: &'static str =
        "Please try again later. If the same problem persists please contact customer support.";

    fn description(&self) -> String {
        match self {
            Self::NoErrorNorResponse => "No error nor response".to_string(),
            Self::HttpErrorWithNoData => "No error data in the error response".to_string(),
            Self::HttpErrorResponseWithInvalidData => {
                "Invalid error data in the error response".to_string()
            }
            Self::HttpSuccessWithNoData => "No data in the success response".to_string(),
            Self::HttpSuccessWithInvalidData => {
                "Invalid data in the success response".to_string()
            }
            Self::UnrecognizedHttpStatusCode(_) => {
                "Unrecognized/unsupported HTTP status code".to_string()
            }
            Self::Other(message) => message.clone(),
        }
    }

    fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::Other(_) => None,
            _ => Some(Self::TRY_AGAIN_LATER.to_string()),
        }
    }
}

/// An error from the payment gateway SDK core.
#[derive(Debug)]
pub enum GatewayError {
    /// API error returned from the gateway, decoded from the error
    /// envelope.
    Api {
        /// The classified error code.
        code: ApiErrorCode,
        /// The raw message from the gateway.
        message: String,
        /// URL of the error information page.
        location: String,
    },
    /// Any unexpected error that may happen while talking to the gateway.
    Unexpected {
        /// The classified reason.
        error: UnexpectedError,
        /// The underlying transport error, when one exists.
        underlying: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl GatewayError {
    /// A message describing what error occurred. Never empty: every branch
    /// has a fallback string.
    pub fn description(&self) -> String {
        match self {
            Self::Api { code, message, .. } => match code {
                ApiErrorCode::InvalidCard(reasons) => reasons
                    .first()
                    .map(|r| r.description().to_string())
                    .unwrap_or_else(|| message.clone()),
                ApiErrorCode::BadRequest(reasons) => reasons
                    .first()
                    .map(BadRequestReason::description)
                    .unwrap_or_else(|| message.clone()),
                ApiErrorCode::AuthenticationFailure => "Authentication failure".to_string(),
                ApiErrorCode::ServiceNotFound => "Service not found".to_string(),
                ApiErrorCode::Other(_) => message.clone(),
            },
            Self::Unexpected {
                underlying: Some(underlying),
                ..
            } => underlying.to_string(),
            Self::Unexpected {
                error,
                underlying: None,
            } => error.description(),
        }
    }

    /// A message describing how one might recover from the failure, when a
    /// sensible suggestion exists.
    pub fn recovery_suggestion(&self) -> Option<String> {
        let suggestion = match self {
            Self::Api { code, .. } => match code {
                ApiErrorCode::InvalidCard(reasons) => reasons
                    .first()
                    .map(|r| r.recovery_suggestion().to_string()),
                ApiErrorCode::BadRequest(reasons) => {
                    reasons.first().map(BadRequestReason::recovery_suggestion)
                }
                ApiErrorCode::AuthenticationFailure | ApiErrorCode::ServiceNotFound => {
                    Some("Please contact the merchant".to_string())
                }
                ApiErrorCode::Other(_) => None,
            },
            Self::Unexpected { error, .. } => error.recovery_suggestion(),
        };

        suggestion.filter(|s| !s.is_empty())
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl StdError for GatewayError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Unexpected {
                underlying: Some(underlying),
                ..
            } => {
                let source: &(dyn StdError + 'static) = underlying.as_ref();
                Some(source)
            }
            _ => None,
        }
    }
}

/// The gateway's error envelope. The `object` field ("error") is ignored;
/// `location`, `code` and `message` are required, and their absence is the
/// one decoding path that fails.
impl<'de> Deserialize<'de> for GatewayError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            location: String,
            code: String,
            message: String,
        }

        let envelope = Envelope::deserialize(deserializer)?;
        Ok(GatewayError::Api {
            code: ApiErrorCode::from_envelope(&envelope.code, &envelope.message, None),
            message: envelope.message,
            location: envelope.location,
        })
    }
}
