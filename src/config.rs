//! UI Configuration
//!
//! Startup settings resolved once from the host web view.

use crate::i18n::Locale;

/// Name of the single host command every envelope is dispatched through.
pub const DISPATCH_COMMAND: &str = "dispatch";

/// How long the header keeps showing "saved" before returning to idle.
pub const SAVED_RESET_MS: u32 = 1500;

/// Advisories dismiss themselves after this delay; errors stay until closed.
pub const ADVISORY_TIMEOUT_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    pub locale: Locale,
    pub log_level: log::Level,
    pub saved_reset_ms: u32,
}

impl UiConfig {
    /// Reads `navigator.language` from the current window.
    pub fn detect() -> Self {
        let language = web_sys::window().and_then(|w| w.navigator().language());
        Self::from_language(language.as_deref())
    }

    pub fn from_language(language: Option<&str>) -> Self {
        Self {
            locale: language.map(Locale::from_tag).unwrap_or_default(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            saved_reset_ms: SAVED_RESET_MS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_language(None)
    }
}
