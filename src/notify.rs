//! Notification Channel
//!
//! Errors and advisories are pushed into a sink instead of blocking the view
//! that raised them. The UI renders the sink as toasts.

use std::sync::Arc;

use crate::error::{normalize, IpcError};
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Advisory,
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn error(message: impl Into<String>, detail: Option<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into(), detail }
    }

    pub fn advisory(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Advisory, message: message.into(), detail: None }
    }
}

/// Receives presented notices.
pub trait NoticeSink: Send + Sync {
    fn push(&self, notice: Notice);
}

/// Normalizes, logs and presents notices.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NoticeSink>,
    locale: Locale,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NoticeSink>, locale: Locale) -> Self {
        Self { sink, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn error(&self, error: &IpcError) {
        let notice = normalize(error, self.locale);
        log::warn!("[NOTIFY] {}: {}", notice.message, error);
        self.sink.push(notice);
    }

    /// Presents the localized text of `key` as an advisory.
    pub fn advisory(&self, key: &str) {
        let notice = Notice::advisory(self.locale.text(key));
        log::info!("[NOTIFY] advisory {}", key);
        self.sink.push(notice);
    }
}
