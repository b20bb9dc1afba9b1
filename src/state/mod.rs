//! View State Machines
//!
//! DOM-free state behind each view. Operations take the IPC client, mutate a
//! working copy and report the outcome; the view writes the copy back only if
//! it is still mounted.

mod component_editor;
mod component_form;
mod dataset_selector;
mod meal_form;
mod save_status;
mod session;

pub use component_editor::{ComponentEditor, ListRow};
pub use component_form::{ChoiceList, NewComponentForm};
pub use dataset_selector::{DatasetSelector, MonthChoice, SelectorPhase};
pub use meal_form::{ComponentPick, MealDraft, MealRow};
pub use save_status::{SaveStatus, SaveTracker};
pub use session::{close_dataset, AppPhase, Page};

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The backend call failed and was reported.
    Failed,
    /// The backend accepted the change. `refreshed` is the re-fetched list,
    /// absent when the refresh itself failed.
    Accepted { refreshed: Option<T> },
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
