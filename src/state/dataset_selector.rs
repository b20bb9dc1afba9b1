//! Dataset Selector
//!
//! `Loading -> Select -> Loaded`. Which months are selectable and whether
//! datasets can be created is decided by the backend's `gotDatasets` reply.

use ipc_contract::{AvailableDatasets, DatasetRef, SessionState, MONTHS};

use crate::commands::{self, Ipc};
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    #[default]
    Loading,
    Select,
    /// Terminal: control passes to the app shell.
    Loaded(DatasetRef),
}

/// One entry of the month dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthChoice {
    pub month: u32,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSelector {
    pub phase: SelectorPhase,
    pub available: AvailableDatasets,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl DatasetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SelectorPhase::Loading
    }

    /// Datasets arrived: preselect the backend's current period.
    pub fn apply(&mut self, available: AvailableDatasets) {
        self.year = available.current_year;
        self.month = available.current_month;
        self.available = available;
        self.phase = SelectorPhase::Select;
    }

    /// Loaded, but no dataset exists yet.
    pub fn is_empty(&self) -> bool {
        !self.is_loading() && self.available.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.available.years()
    }

    pub fn year_disabled(&self) -> bool {
        self.is_loading() || self.available.is_empty()
    }

    pub fn month_select_disabled(&self) -> bool {
        self.is_loading() || self.year.is_none()
    }

    /// Whether `month` exists for the currently selected year.
    pub fn month_available(&self, month: u32) -> bool {
        match self.year {
            Some(year) => self.available.is_available(year, month),
            None => false,
        }
    }

    pub fn month_choices(&self, locale: Locale) -> Vec<MonthChoice> {
        MONTHS
            .map(|month| MonthChoice {
                month,
                label: locale.month_name(month).unwrap_or_default(),
                enabled: self.month_available(month),
            })
            .collect()
    }

    /// A month is chosen that the selected year does not have.
    pub fn month_error(&self) -> bool {
        self.month.is_some_and(|m| !self.month_available(m))
    }

    /// The chosen period, if it can be opened.
    pub fn selection(&self) -> Option<DatasetRef> {
        let (year, month) = (self.year?, self.month?);
        if !self.month_available(month) {
            return None;
        }
        DatasetRef::new(year, month).ok()
    }

    pub fn can_load(&self) -> bool {
        self.phase == SelectorPhase::Select && self.selection().is_some()
    }

    pub fn can_create_now(&self) -> bool {
        self.phase == SelectorPhase::Select && self.available.can_create_now
    }

    pub fn can_create_next(&self) -> bool {
        self.phase == SelectorPhase::Select && self.available.can_create_next
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn select_month(&mut self, month: Option<u32>) {
        self.month = month;
    }

    /// Fetches the available datasets. On failure the selector stays where it was.
    pub async fn load(&mut self, ipc: &Ipc) -> bool {
        match commands::get_available_datasets(ipc).await {
            Ok(available) => {
                self.apply(available);
                true
            }
            Err(_) => false,
        }
    }

    /// Opens the selected dataset. Mismatch and backup flags are advisories.
    pub async fn open(&mut self, ipc: &Ipc) -> bool {
        let Some(dataset) = self.selection() else {
            return false;
        };
        let Ok(opened) = commands::open_dataset(ipc, dataset).await else {
            return false;
        };
        if opened.mismatch {
            ipc.notifier().advisory("advisory.dataset_mismatch");
        }
        if opened.is_backup {
            ipc.notifier().advisory("advisory.opened_backup");
        }
        self.phase = SelectorPhase::Loaded(dataset);
        true
    }

    /// Creates a dataset for the current (`false`) or next (`true`) period,
    /// then follows the backend's session state.
    pub async fn create(&mut self, ipc: &Ipc, next_month: bool) -> bool {
        let allowed = if next_month { self.can_create_next() } else { self.can_create_now() };
        if !allowed || commands::new_dataset(ipc, next_month).await.is_err() {
            return false;
        }
        match commands::get_state(ipc).await {
            Ok(SessionState::Loaded { year, month }) => {
                self.phase = SelectorPhase::Loaded(DatasetRef { year, month });
                true
            }
            Ok(SessionState::Select) => self.load(ipc).await,
            Err(_) => false,
        }
    }
}
