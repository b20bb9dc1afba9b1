//! Dataset Shapes
//!
//! A dataset is the backend's persisted data file for one year+month period.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ContractError;

/// Valid month numbers.
pub const MONTHS: RangeInclusive<u32> = 1..=12;

/// Identifies a period-scoped dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetRef {
    pub year: i32,
    pub month: u32,
}

impl DatasetRef {
    pub fn new(year: i32, month: u32) -> Result<Self, ContractError> {
        if !MONTHS.contains(&month) {
            return Err(ContractError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }
}

/// Payload of `gotDatasets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDatasets {
    /// year -> months with a data file
    #[serde(deserialize_with = "year_keys")]
    pub data: BTreeMap<i32, BTreeSet<u32>>,
    pub current_year: Option<i32>,
    pub current_month: Option<u32>,
    pub can_create_now: bool,
    pub can_create_next: bool,
}

/// Year keys arrive as JSON strings, also when buffered by a tagged reply.
fn year_keys<'de, D>(deserializer: D) -> Result<BTreeMap<i32, BTreeSet<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, BTreeSet<u32>>::deserialize(deserializer)?
        .into_iter()
        .map(|(year, months)| {
            year.trim()
                .parse::<i32>()
                .map(|year| (year, months))
                .map_err(|_| D::Error::custom(format!("invalid year key {year:?}")))
        })
        .collect()
}

impl AvailableDatasets {
    pub fn is_empty(&self) -> bool {
        self.data.values().all(BTreeSet::is_empty)
    }

    /// Years that have at least one dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.data
            .iter()
            .filter(|(_, months)| !months.is_empty())
            .map(|(year, _)| *year)
            .collect()
    }

    /// Whether `month` can be opened for `year`. Only that year's set is consulted.
    pub fn is_available(&self, year: i32, month: u32) -> bool {
        MONTHS.contains(&month)
            && self
                .data
                .get(&year)
                .is_some_and(|months| months.contains(&month))
    }
}

/// Payload of `gotState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    /// No dataset is open yet.
    Select,
    Loaded { year: i32, month: u32 },
}

impl SessionState {
    pub fn dataset(&self) -> Option<DatasetRef> {
        match *self {
            Self::Select => None,
            Self::Loaded { year, month } => Some(DatasetRef { year, month }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> AvailableDatasets {
        serde_json::from_value(json!({
            "data": {"2023": [1, 2, 12], "2024": [3]},
            "currentYear": null,
            "currentMonth": null,
            "canCreateNow": true,
            "canCreateNext": false
        }))
        .unwrap()
    }

    #[test]
    fn test_year_keys_parse_from_strings() {
        let datasets = sample();
        assert_eq!(datasets.years(), vec![2023, 2024]);
        assert!(datasets.can_create_now);
        assert!(!datasets.can_create_next);
        assert_eq!(datasets.current_year, None);
    }

    #[test]
    fn test_month_availability_is_per_year() {
        let datasets = sample();
        assert!(datasets.is_available(2023, 12));
        assert!(!datasets.is_available(2023, 3));
        assert!(datasets.is_available(2024, 3));
        assert!(!datasets.is_available(2025, 1));
        assert!(!datasets.is_available(2023, 0));
        assert!(!datasets.is_available(2023, 13));
    }

    #[test]
    fn test_empty_when_no_months() {
        let datasets: AvailableDatasets = serde_json::from_value(json!({
            "data": {},
            "currentYear": null,
            "currentMonth": null,
            "canCreateNow": true,
            "canCreateNext": true
        }))
        .unwrap();
        assert!(datasets.is_empty());
        assert!(datasets.years().is_empty());
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let result = serde_json::from_value::<AvailableDatasets>(json!({
            "data": {"next": [1]},
            "currentYear": null,
            "currentMonth": null,
            "canCreateNow": false,
            "canCreateNext": false
        }));
        assert!(result.unwrap_err().to_string().contains("invalid year key"));
    }

    #[test]
    fn test_dataset_ref_rejects_invalid_month() {
        assert!(DatasetRef::new(2024, 12).is_ok());
        assert!(matches!(DatasetRef::new(2024, 0), Err(ContractError::InvalidMonth(0))));
        assert!(matches!(DatasetRef::new(2024, 13), Err(ContractError::InvalidMonth(13))));
    }

    #[test]
    fn test_session_state_shapes() {
        let select: SessionState = serde_json::from_value(json!({"state": "select"})).unwrap();
        assert_eq!(select.dataset(), None);

        let loaded: SessionState =
            serde_json::from_value(json!({"state": "loaded", "year": 2024, "month": 3})).unwrap();
        assert_eq!(loaded.dataset(), Some(DatasetRef { year: 2024, month: 3 }));
    }
}
