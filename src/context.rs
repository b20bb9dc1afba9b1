//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::Ipc;
use crate::i18n::Locale;
use crate::state::{AppPhase, Page};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    ipc: StoredValue<Ipc>,
    pub locale: Locale,
    /// Delay before the saved indicator reverts
    pub saved_reset_ms: u32,
    pub phase: RwSignal<AppPhase>,
    pub page: RwSignal<Page>,
}

impl AppContext {
    pub fn new(ipc: Ipc, locale: Locale, saved_reset_ms: u32) -> Self {
        Self {
            ipc: StoredValue::new(ipc),
            locale,
            saved_reset_ms,
            phase: RwSignal::new(AppPhase::Loading),
            page: RwSignal::new(Page::default()),
        }
    }

    /// Client handle to move into a spawned task
    pub fn ipc(&self) -> Ipc {
        self.ipc.get_value()
    }

    /// Switch phase and reset the page for the next dataset
    pub fn enter(&self, phase: AppPhase) {
        self.page.set(Page::default());
        self.phase.set(phase);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
