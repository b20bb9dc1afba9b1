//! Meal Draft
//!
//! Working copy behind the new-meal modal. The component mapping is edited
//! locally and only sent on submit.

use std::collections::BTreeMap;

use ipc_contract::{ComponentMap, MealMap};
use uuid::Uuid;

use super::SubmitOutcome;
use crate::commands::{self, Ipc};

/// Pending component/variant choice of the row picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentPick {
    pub component: Option<Uuid>,
    /// `None` means the component's default variant.
    pub variant: Option<Uuid>,
}

/// One row of the mapping as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealRow {
    Known { component: Uuid, name: String, variant: Option<Uuid> },
    /// The component is not in the loaded component list.
    Invalid { component: Uuid },
}

impl MealRow {
    pub fn component(&self) -> Uuid {
        match self {
            Self::Known { component, .. } | Self::Invalid { component } => *component,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub short: String,
    pub components: BTreeMap<Uuid, Option<Uuid>>,
    pub pick: ComponentPick,
    pub show_errors: bool,
}

impl MealDraft {
    /// Components that can still be added, by label.
    pub fn available_components(&self, all: &ComponentMap) -> Vec<(Uuid, String)> {
        all.iter()
            .filter(|(id, c)| !c.deleted && !self.components.contains_key(id))
            .map(|(id, c)| (*id, c.name.clone()))
            .collect()
    }

    /// Live variants of `component`, by label.
    pub fn variant_choices(all: &ComponentMap, component: &Uuid) -> Vec<(Uuid, String)> {
        all.get(component)
            .map(|c| {
                c.variants
                    .iter()
                    .filter(|(_, v)| !v.deleted)
                    .map(|(id, v)| (*id, v.label(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn pick_component(&mut self, component: Option<Uuid>) {
        self.pick = ComponentPick { component, variant: None };
    }

    pub fn pick_variant(&mut self, variant: Option<Uuid>) {
        self.pick.variant = variant;
    }

    /// Moves the pending pick into the mapping.
    pub fn confirm_pick(&mut self) -> bool {
        let Some(component) = self.pick.component else {
            return false;
        };
        if self.components.contains_key(&component) {
            return false;
        }
        self.components.insert(component, self.pick.variant);
        self.pick = ComponentPick::default();
        true
    }

    pub fn set_row_variant(&mut self, component: Uuid, variant: Option<Uuid>) {
        if let Some(slot) = self.components.get_mut(&component) {
            *slot = variant;
        }
    }

    pub fn remove_row(&mut self, component: &Uuid) {
        self.components.remove(component);
    }

    pub fn rows(&self, all: &ComponentMap) -> Vec<MealRow> {
        self.components
            .iter()
            .map(|(id, variant)| match all.get(id) {
                Some(c) => MealRow::Known { component: *id, name: c.name.clone(), variant: *variant },
                None => MealRow::Invalid { component: *id },
            })
            .collect()
    }

    pub fn name_error(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub fn short_error(&self) -> bool {
        self.short.trim().is_empty()
    }

    /// Nothing typed or picked yet.
    pub fn is_pristine(&self) -> bool {
        self.name.is_empty()
            && self.short.is_empty()
            && self.components.is_empty()
            && self.pick == ComponentPick::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub async fn submit(&mut self, ipc: &Ipc) -> SubmitOutcome<MealMap> {
        self.show_errors = true;
        if self.name_error() || self.short_error() {
            return SubmitOutcome::Invalid;
        }

        let name = self.name.trim().to_string();
        let short = self.short.trim().to_string();
        if commands::add_meal(ipc, name, short, self.components.clone()).await.is_err() {
            return SubmitOutcome::Failed;
        }

        self.reset();
        SubmitOutcome::Accepted { refreshed: commands::get_meals(ipc).await.ok() }
    }
}
