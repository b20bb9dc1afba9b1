//! Component Editor
//!
//! Edit modal for one component: lists its variants and options and adds new
//! ones. Nothing here deletes; tombstoned rows are only rendered.

use ipc_contract::{Component, ComponentMap};
use uuid::Uuid;

use super::SubmitOutcome;
use crate::commands::{self, Ipc};

/// A variant or option row as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key: Uuid,
    pub label: String,
    pub deleted: bool,
}

impl ListRow {
    pub fn variants(component: &Component) -> Vec<ListRow> {
        component
            .variants
            .iter()
            .map(|(id, v)| ListRow { key: *id, label: v.label(id), deleted: v.deleted })
            .collect()
    }

    pub fn options(component: &Component) -> Vec<ListRow> {
        component
            .options
            .iter()
            .map(|(id, o)| ListRow { key: *id, label: o.label(id), deleted: o.deleted })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEditor {
    pub component: Uuid,
    pub new_variant: String,
    pub new_option: String,
}

impl ComponentEditor {
    pub fn new(component: Uuid) -> Self {
        Self { component, new_variant: String::new(), new_option: String::new() }
    }

    pub async fn add_variant(&mut self, ipc: &Ipc) -> SubmitOutcome<ComponentMap> {
        let name = self.new_variant.trim().to_string();
        if name.is_empty() {
            return SubmitOutcome::Invalid;
        }
        if commands::add_variant(ipc, self.component, name).await.is_err() {
            return SubmitOutcome::Failed;
        }
        self.new_variant.clear();
        SubmitOutcome::Accepted { refreshed: commands::get_components(ipc).await.ok() }
    }

    pub async fn add_option(&mut self, ipc: &Ipc) -> SubmitOutcome<ComponentMap> {
        let name = self.new_option.trim().to_string();
        if name.is_empty() {
            return SubmitOutcome::Invalid;
        }
        if commands::add_option(ipc, self.component, name).await.is_err() {
            return SubmitOutcome::Failed;
        }
        self.new_option.clear();
        SubmitOutcome::Accepted { refreshed: commands::get_components(ipc).await.ok() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use ipc_contract::{Command, ComponentCmd, ComponentOption, Variant};
    use serde_json::json;

    const PASTA: Uuid = Uuid::from_u128(0x10);

    #[test]
    fn test_rows_fall_back_to_uuid_and_keep_tombstones() {
        let blank = Uuid::from_u128(0x20);
        let gone = Uuid::from_u128(0x21);
        let component = Component {
            name: "Pasta".into(),
            variants: [
                (blank, Variant { name: " ".into(), deleted: false }),
                (gone, Variant { name: "Penne".into(), deleted: true }),
            ]
            .into(),
            options: [(Uuid::from_u128(0x30), ComponentOption { name: "Cheese".into(), deleted: false })].into(),
            deleted: false,
        };

        let rows = ListRow::variants(&component);
        assert_eq!(rows[0].label, blank.to_string());
        assert!(!rows[0].deleted);
        assert_eq!(rows[1].label, "Penne");
        assert!(rows[1].deleted);
        assert_eq!(ListRow::options(&component)[0].label, "Cheese");
    }

    #[tokio::test]
    async fn test_add_variant_clears_input_and_refetches() {
        let (mock, _, ipc) = harness();
        mock.reply("addVariant", json!({"variant": "addedVariant"}));
        mock.reply("getComponents", json!({"variant": "gotComponents", "data": {}}));

        let mut editor = ComponentEditor::new(PASTA);
        editor.new_variant = " Farfalle ".into();

        assert!(editor.add_variant(&ipc).await.is_accepted());
        assert!(editor.new_variant.is_empty());
        assert_eq!(
            mock.sent(),
            vec![
                Command::from(ComponentCmd::AddVariant { component: PASTA, name: "Farfalle".into() }),
                Command::from(ComponentCmd::GetComponents),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_option_is_blocked() {
        let (mock, _, ipc) = harness();
        let mut editor = ComponentEditor::new(PASTA);
        editor.new_option = "  ".into();

        assert_eq!(editor.add_option(&ipc).await, SubmitOutcome::Invalid);
        assert!(mock.sent().is_empty());
    }

    #[tokio::test]
    async fn test_failed_add_option_keeps_input() {
        let (mock, sink, ipc) = harness();
        mock.reply("addOption", json!({"variant": "addedVariant"}));

        let mut editor = ComponentEditor::new(PASTA);
        editor.new_option = "Basil".into();

        assert_eq!(editor.add_option(&ipc).await, SubmitOutcome::Failed);
        assert_eq!(editor.new_option, "Basil");
        assert_eq!(sink.notices().len(), 1);
    }
}
