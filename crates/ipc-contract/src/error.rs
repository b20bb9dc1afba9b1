//! Backend Errors
//!
//! The backend rejects a command either with a plain string following the
//! `"<code>: <detail>"` convention or with a structured `{code, detail}` object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    #[error("error string has no code prefix: {0:?}")]
    MissingCode(String),
}

/// Structured backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendError {
    /// Localization key, e.g. `error.meals.name_empty`.
    pub code: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl BackendError {
    pub fn new(code: impl Into<String>, detail: Option<String>) -> Self {
        Self { code: code.into(), detail }
    }
}

impl FromStr for BackendError {
    type Err = ContractError;

    /// Splits on the first `:`. A string without one carries no code.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (code, detail) = raw
            .split_once(':')
            .ok_or_else(|| ContractError::MissingCode(raw.to_string()))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(ContractError::MissingCode(raw.to_string()));
        }
        let detail = detail.trim();
        Ok(Self {
            code: code.to_string(),
            detail: (!detail.is_empty()).then(|| detail.to_string()),
        })
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.code, detail),
            None => f.write_str(&self.code),
        }
    }
}

/// Rejection value as it arrives over the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Structured(BackendError),
    Text(String),
}
