//! IPC Errors
//!
//! Failure taxonomy of a backend call and its mapping to a localized notice.

use ipc_contract::{BackendError, ErrorPayload};

use crate::i18n::{Locale, UNDEFINED_ERROR};
use crate::notify::Notice;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IpcError {
    /// Backend rejection carrying a localization key.
    #[error("{0}")]
    Backend(BackendError),
    /// Backend rejection without a `code:` prefix.
    #[error("{0}")]
    Rejected(String),
    /// The bridge itself failed.
    #[error("error.transport: {0}")]
    Transport(String),
    #[error("error.unexpected_variant: expected variant \"{expected}\", but received variant \"{received}\"")]
    UnexpectedVariant { expected: String, received: String },
    #[error("error.malformed_response: {0}")]
    Malformed(String),
}

impl IpcError {
    /// Parses the `"<code>: <detail>"` string convention.
    pub fn from_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.parse::<BackendError>() {
            Ok(err) => Self::Backend(err),
            Err(_) => Self::Rejected(raw),
        }
    }

    pub fn from_payload(payload: ErrorPayload) -> Self {
        match payload {
            ErrorPayload::Structured(err) => Self::Backend(err),
            ErrorPayload::Text(raw) => Self::from_text(raw),
        }
    }

    /// Localization key, if the error has one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Backend(err) => Some(&err.code),
            Self::Rejected(_) => None,
            Self::Transport(_) => Some("error.transport"),
            Self::UnexpectedVariant { .. } => Some("error.unexpected_variant"),
            Self::Malformed(_) => Some("error.malformed_response"),
        }
    }
}

impl From<serde_json::Error> for IpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Maps an error to the notice shown to the user.
///
/// The message is the localized text for the error's code; codes without a
/// table entry, and errors without a code, use the undefined-error text. The
/// raw error is kept as detail.
pub fn normalize(error: &IpcError, locale: Locale) -> Notice {
    let key = error
        .code()
        .filter(|code| locale.lookup(code).is_some())
        .unwrap_or(UNDEFINED_ERROR);
    Notice::error(locale.text(key), Some(error.to_string()))
}
