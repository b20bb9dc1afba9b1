//! Command Envelope
//!
//! Requests are `{cmd: <domain>, sub: {cmd: <operation>, ...fields}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level command, tagged by domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "sub", rename_all = "camelCase")]
pub enum Command {
    Global(GlobalCmd),
    Component(ComponentCmd),
    Meal(MealCmd),
}

/// Dataset lifecycle and session commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum GlobalCmd {
    GetState,
    GetAvailableDatasets,
    /// `next_month == false` creates the dataset for the current period,
    /// `true` for the period after it.
    #[serde(rename_all = "camelCase")]
    NewDataset { next_month: bool },
    OpenDataset { year: i32, month: u32 },
    CloseDataset,
    Save,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum ComponentCmd {
    GetComponents,
    AddComponent {
        name: String,
        variants: Vec<String>,
        options: Vec<String>,
    },
    AddVariant { component: Uuid, name: String },
    AddOption { component: Uuid, name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum MealCmd {
    GetMeals,
    /// `None` binds the component to its default variant.
    AddMeal {
        name: String,
        short: String,
        components: BTreeMap<Uuid, Option<Uuid>>,
    },
}

impl Command {
    /// The domain tag (`cmd`).
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Global(_) => "global",
            Self::Component(_) => "component",
            Self::Meal(_) => "meal",
        }
    }

    /// The operation tag (`sub.cmd`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Global(sub) => match sub {
                GlobalCmd::GetState => "getState",
                GlobalCmd::GetAvailableDatasets => "getAvailableDatasets",
                GlobalCmd::NewDataset { .. } => "newDataset",
                GlobalCmd::OpenDataset { .. } => "openDataset",
                GlobalCmd::CloseDataset => "closeDataset",
                GlobalCmd::Save => "save",
            },
            Self::Component(sub) => match sub {
                ComponentCmd::GetComponents => "getComponents",
                ComponentCmd::AddComponent { .. } => "addComponent",
                ComponentCmd::AddVariant { .. } => "addVariant",
                ComponentCmd::AddOption { .. } => "addOption",
            },
            Self::Meal(sub) => match sub {
                MealCmd::GetMeals => "getMeals",
                MealCmd::AddMeal { .. } => "addMeal",
            },
        }
    }
}

impl From<GlobalCmd> for Command {
    fn from(sub: GlobalCmd) -> Self {
        Self::Global(sub)
    }
}

impl From<ComponentCmd> for Command {
    fn from(sub: ComponentCmd) -> Self {
        Self::Component(sub)
    }
}

impl From<MealCmd> for Command {
    fn from(sub: MealCmd) -> Self {
        Self::Meal(sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_command_envelope() {
        let value = serde_json::to_value(Command::from(GlobalCmd::GetState)).unwrap();
        assert_eq!(value, json!({"cmd": "global", "sub": {"cmd": "getState"}}));
    }

    #[test]
    fn test_new_dataset_uses_camel_case_field() {
        let value =
            serde_json::to_value(Command::from(GlobalCmd::NewDataset { next_month: true })).unwrap();
        assert_eq!(
            value,
            json!({"cmd": "global", "sub": {"cmd": "newDataset", "nextMonth": true}})
        );
    }

    #[test]
    fn test_add_meal_serializes_default_variant_as_null() {
        let pasta = Uuid::from_u128(1);
        let sauce = Uuid::from_u128(2);
        let pesto = Uuid::from_u128(3);
        let mut components = BTreeMap::new();
        components.insert(pasta, None);
        components.insert(sauce, Some(pesto));

        let cmd = Command::from(MealCmd::AddMeal {
            name: "Pasta Pesto".into(),
            short: "PP".into(),
            components,
        });
        let value = serde_json::to_value(&cmd).unwrap();

        assert_eq!(value["cmd"], "meal");
        assert_eq!(value["sub"]["cmd"], "addMeal");
        assert_eq!(value["sub"]["components"][pasta.to_string()], json!(null));
        assert_eq!(value["sub"]["components"][sauce.to_string()], json!(pesto.to_string()));
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let commands: Vec<Command> = vec![
            GlobalCmd::GetAvailableDatasets.into(),
            GlobalCmd::OpenDataset { year: 2024, month: 3 }.into(),
            GlobalCmd::CloseDataset.into(),
            GlobalCmd::Save.into(),
            ComponentCmd::GetComponents.into(),
            ComponentCmd::AddVariant { component: Uuid::nil(), name: "x".into() }.into(),
            ComponentCmd::AddOption { component: Uuid::nil(), name: "y".into() }.into(),
            MealCmd::GetMeals.into(),
        ];
        for cmd in commands {
            let value = serde_json::to_value(&cmd).unwrap();
            assert_eq!(value["cmd"], cmd.domain());
            assert_eq!(value["sub"]["cmd"], cmd.name());
        }
    }
}
