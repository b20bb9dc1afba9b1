//! Mount Guard
//!
//! Cancellation token for async work started by a view. Updates that land
//! after the view unmounted are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Guard cancelled when the current reactive owner is cleaned up.
    pub fn attach() -> Self {
        let guard = Self::new();
        let handle = guard.clone();
        on_cleanup(move || handle.cancel());
        guard
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
