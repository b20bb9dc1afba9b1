//! Entities
//!
//! Transient copies of backend-owned records, keyed by uuid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ComponentMap = BTreeMap<Uuid, Component>;
pub type MealMap = BTreeMap<Uuid, Meal>;

/// A named planning category with its variants and options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub variants: BTreeMap<Uuid, Variant>,
    #[serde(default)]
    pub options: BTreeMap<Uuid, ComponentOption>,
    #[serde(default, alias = "delete")]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default, alias = "delete")]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentOption {
    pub name: String,
    /// Soft-delete marker; the row stays visible as a tombstone.
    #[serde(default, alias = "delete")]
    pub deleted: bool,
}

/// A named combination of components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub short: String,
    /// component -> chosen variant, `None` for the component's default
    #[serde(default)]
    pub components: BTreeMap<Uuid, Option<Uuid>>,
}

impl Component {
    /// Variant label, falling back to its uuid when the name is blank.
    pub fn variant_label(&self, id: &Uuid) -> Option<String> {
        self.variants.get(id).map(|v| label_or_id(&v.name, id))
    }
}

pub(crate) fn label_or_id(name: &str, id: &Uuid) -> String {
    if name.trim().is_empty() {
        id.to_string()
    } else {
        name.to_string()
    }
}

impl Variant {
    pub fn label(&self, id: &Uuid) -> String {
        label_or_id(&self.name, id)
    }
}

impl ComponentOption {
    pub fn label(&self, id: &Uuid) -> String {
        label_or_id(&self.name, id)
    }
}
