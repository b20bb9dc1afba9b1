//! App Session
//!
//! Top-level phase of the app shell and the page shown once a dataset is open.

use ipc_contract::{DatasetRef, SessionState};

use crate::commands::{self, Ipc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Loading,
    Select,
    Loaded(DatasetRef),
}

impl From<SessionState> for AppPhase {
    fn from(state: SessionState) -> Self {
        match state.dataset() {
            Some(dataset) => Self::Loaded(dataset),
            None => Self::Select,
        }
    }
}

impl AppPhase {
    pub async fn fetch(ipc: &Ipc) -> Option<Self> {
        commands::get_state(ipc).await.ok().map(Self::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Components,
    Meals,
}

/// Closes the open dataset. Only call after the user confirmed.
///
/// Returns the phase to switch to, `None` if the close failed.
pub async fn close_dataset(ipc: &Ipc) -> Option<AppPhase> {
    commands::close_dataset(ipc).await.ok().map(|_| AppPhase::Select)
}
