//! New Component Form

use ipc_contract::ComponentMap;

use super::SubmitOutcome;
use crate::commands::{self, Ipc};

/// Free-form choice list: typed entries become choices and are selected
/// right away, without a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceList {
    pub choices: Vec<String>,
    pub selected: Vec<String>,
}

impl ChoiceList {
    /// Adds `raw` as a new choice and selects it. Blank input is ignored.
    pub fn add_choice(&mut self, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() {
            return false;
        }
        if !self.choices.iter().any(|c| c == value) {
            self.choices.insert(0, value.to_string());
        }
        if !self.is_selected(value) {
            self.selected.push(value.to_string());
        }
        true
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    pub fn toggle(&mut self, value: &str) {
        if self.is_selected(value) {
            self.deselect(value);
        } else if self.choices.iter().any(|c| c == value) {
            self.selected.push(value.to_string());
        }
    }

    pub fn deselect(&mut self, value: &str) {
        self.selected.retain(|s| s != value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComponentForm {
    pub name: String,
    pub variants: ChoiceList,
    pub options: ChoiceList,
    /// Set after the first submit attempt.
    pub show_errors: bool,
}

impl NewComponentForm {
    pub fn name_error(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Cancel and successful submit both land here.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub async fn submit(&mut self, ipc: &Ipc) -> SubmitOutcome<ComponentMap> {
        self.show_errors = true;
        if self.name_error() {
            return SubmitOutcome::Invalid;
        }

        let name = self.name.trim().to_string();
        let variants = self.variants.selected.clone();
        let options = self.options.selected.clone();
        if commands::add_component(ipc, name, variants, options).await.is_err() {
            return SubmitOutcome::Failed;
        }

        self.reset();
        SubmitOutcome::Accepted { refreshed: commands::get_components(ipc).await.ok() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use ipc_contract::{Command, ComponentCmd};
    use serde_json::json;

    #[test]
    fn test_add_choice_selects_immediately() {
        let mut list = ChoiceList::default();
        assert!(list.add_choice("  Fusilli "));
        assert!(list.add_choice("Penne"));
        assert!(!list.add_choice("   "));

        assert_eq!(list.choices, vec!["Penne", "Fusilli"]);
        assert_eq!(list.selected, vec!["Fusilli", "Penne"]);

        list.toggle("Fusilli");
        assert_eq!(list.selected, vec!["Penne"]);
        list.toggle("Rigatoni");
        assert_eq!(list.selected, vec!["Penne"]);
    }

    #[test]
    fn test_add_existing_choice_does_not_duplicate() {
        let mut list = ChoiceList::default();
        list.add_choice("Rice");
        list.deselect("Rice");
        list.add_choice("Rice");
        assert_eq!(list.choices, vec!["Rice"]);
        assert_eq!(list.selected, vec!["Rice"]);
    }

    #[tokio::test]
    async fn test_submit_refreshes_once_and_clears() {
        let (mock, sink, ipc) = harness();
        mock.reply("addComponent", json!({"variant": "addedComponent"}));
        mock.reply("getComponents", json!({
            "variant": "gotComponents",
            "data": {
                "6f1c2d4e-0000-4000-8000-000000000001": {
                    "name": "Pasta",
                    "variants": {"6f1c2d4e-0000-4000-8000-000000000002": {"name": "Fusilli"}},
                    "options": {}
                }
            }
        }));

        let mut form = NewComponentForm { name: "Pasta".into(), ..Default::default() };
        form.variants.add_choice("Fusilli");

        let components = match form.submit(&ipc).await {
            SubmitOutcome::Accepted { refreshed: Some(components) } => components,
            other => panic!("expected accepted submit, got {other:?}"),
        };
        assert_eq!(components.len(), 1);
        assert_eq!(mock.count("getComponents"), 1);
        assert_eq!(
            mock.sent()[0],
            Command::from(ComponentCmd::AddComponent {
                name: "Pasta".into(),
                variants: vec!["Fusilli".into()],
                options: vec![],
            })
        );
        assert_eq!(form, NewComponentForm::default());
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_is_not_sent() {
        let (mock, _, ipc) = harness();
        let mut form = NewComponentForm { name: "   ".into(), ..Default::default() };

        assert_eq!(form.submit(&ipc).await, SubmitOutcome::Invalid);
        assert!(form.show_errors);
        assert!(mock.sent().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_input() {
        let (mock, sink, ipc) = harness();
        mock.reject("addComponent", crate::error::IpcError::from_text("error.components.name_empty"));

        let mut form = NewComponentForm { name: "Soup".into(), ..Default::default() };
        assert_eq!(form.submit(&ipc).await, SubmitOutcome::Failed);
        assert_eq!(form.name, "Soup");
        assert_eq!(mock.count("getComponents"), 0);
        assert_eq!(sink.notices().len(), 1);
    }
}
