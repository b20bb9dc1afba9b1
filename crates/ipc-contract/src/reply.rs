//! Replies
//!
//! Every reply is an object carrying a mandatory `variant` discriminant.
//! Each domain's replies form a closed set.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::{AvailableDatasets, SessionState};
use crate::entity::{ComponentMap, MealMap};

/// A closed set of reply variants for one command domain.
pub trait Reply: DeserializeOwned {
    /// The variant tag this value was decoded from.
    fn variant(&self) -> &'static str;
}

/// Reads the `variant` tag from a raw reply without decoding the rest.
pub fn variant_of(raw: &Value) -> Option<&str> {
    raw.get("variant")?.as_str()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum GlobalReply {
    GotState { state: SessionState },
    GotDatasets(AvailableDatasets),
    CreatedDataset,
    #[serde(rename_all = "camelCase")]
    OpenedDataset {
        /// Date stored inside the file differs from the one derived from its path.
        #[serde(default)]
        mismatch: bool,
        /// The primary file was unreadable and a backup copy was opened instead.
        #[serde(default)]
        is_backup: bool,
    },
    ClosedDataset,
    Saved,
}

impl Reply for GlobalReply {
    fn variant(&self) -> &'static str {
        match self {
            Self::GotState { .. } => "gotState",
            Self::GotDatasets(_) => "gotDatasets",
            Self::CreatedDataset => "createdDataset",
            Self::OpenedDataset { .. } => "openedDataset",
            Self::ClosedDataset => "closedDataset",
            Self::Saved => "saved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum ComponentReply {
    GotComponents { data: ComponentMap },
    AddedComponent,
    AddedVariant,
    AddedOption,
}

impl Reply for ComponentReply {
    fn variant(&self) -> &'static str {
        match self {
            Self::GotComponents { .. } => "gotComponents",
            Self::AddedComponent => "addedComponent",
            Self::AddedVariant => "addedVariant",
            Self::AddedOption => "addedOption",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum MealReply {
    GotMeals { data: MealMap },
    AddedMeal,
}

impl Reply for MealReply {
    fn variant(&self) -> &'static str {
        match self {
            Self::GotMeals { .. } => "gotMeals",
            Self::AddedMeal => "addedMeal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_variant_of_reads_tag() {
        assert_eq!(variant_of(&json!({"variant": "saved"})), Some("saved"));
        assert_eq!(variant_of(&json!({"state": "select"})), None);
        assert_eq!(variant_of(&json!({"variant": 3})), None);
    }

    #[test]
    fn test_opened_dataset_flags() {
        let reply: GlobalReply = serde_json::from_value(json!({
            "variant": "openedDataset",
            "mismatch": true,
            "isBackup": false
        }))
        .unwrap();
        assert_eq!(reply, GlobalReply::OpenedDataset { mismatch: true, is_backup: false });
        assert_eq!(reply.variant(), "openedDataset");
    }

    #[test]
    fn test_got_state_nests_session() {
        let reply: GlobalReply = serde_json::from_value(json!({
            "variant": "gotState",
            "state": {"state": "loaded", "year": 2024, "month": 3}
        }))
        .unwrap();
        assert_eq!(
            reply,
            GlobalReply::GotState { state: SessionState::Loaded { year: 2024, month: 3 } }
        );
    }

    #[test]
    fn test_got_datasets_flattens_payload() {
        let reply: GlobalReply = serde_json::from_value(json!({
            "variant": "gotDatasets",
            "data": {"2023": [1, 2, 12]},
            "currentYear": null,
            "currentMonth": null,
            "canCreateNow": true,
            "canCreateNext": false
        }))
        .unwrap();
        match reply {
            GlobalReply::GotDatasets(datasets) => {
                assert_eq!(datasets.years(), vec![2023]);
                assert!(datasets.is_available(2023, 12));
                assert!(datasets.can_create_now);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_got_datasets_decodes_several_years_and_current_period() {
        let reply: GlobalReply = serde_json::from_value(json!({
            "variant": "gotDatasets",
            "data": {"2023": [12], "2024": [1, 3], "2025": []},
            "currentYear": 2024,
            "currentMonth": 3,
            "canCreateNow": false,
            "canCreateNext": true
        }))
        .unwrap();
        let GlobalReply::GotDatasets(datasets) = reply else {
            panic!("expected gotDatasets");
        };
        assert_eq!(datasets.years(), vec![2023, 2024]);
        assert!(datasets.is_available(2024, 3));
        assert!(!datasets.is_available(2023, 3));
        assert_eq!(datasets.current_year, Some(2024));
        assert_eq!(datasets.current_month, Some(3));
    }

    #[test]
    fn test_got_datasets_survives_serialize_and_decode() {
        let reply = GlobalReply::GotDatasets(AvailableDatasets {
            data: [(2024, [5].into())].into(),
            current_year: Some(2024),
            current_month: Some(5),
            can_create_now: false,
            can_create_next: true,
        });
        let decoded: GlobalReply = serde_json::from_value(serde_json::to_value(&reply).unwrap()).unwrap();
        assert_eq!(decoded, reply);
    }

    #[test]
    fn test_unit_variant_ignores_extra_fields() {
        let reply: ComponentReply =
            serde_json::from_value(json!({"variant": "addedComponent", "uuid": "x"})).unwrap();
        assert_eq!(reply, ComponentReply::AddedComponent);
    }

    #[test]
    fn test_got_components_decodes_map() {
        let id = Uuid::from_u128(9);
        let reply: ComponentReply = serde_json::from_value(json!({
            "variant": "gotComponents",
            "data": {id.to_string(): {"name": "Pasta", "variants": {}, "options": {}}}
        }))
        .unwrap();
        match reply {
            ComponentReply::GotComponents { data } => assert_eq!(data[&id].name, "Pasta"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = serde_json::from_value::<MealReply>(json!({"variant": "addedComponent"}));
        assert!(result.is_err());
    }
}
