//! IPC Contract
//!
//! Wire shapes exchanged between the meal planner front-end and the backend
//! process: the `{cmd, sub}` command envelope, the `{variant, ...}` replies,
//! the entities they carry and the structured backend error.

mod command;
mod dataset;
mod entity;
mod error;
mod reply;

pub use command::{Command, ComponentCmd, GlobalCmd, MealCmd};
pub use dataset::{AvailableDatasets, DatasetRef, SessionState, MONTHS};
pub use entity::{Component, ComponentMap, ComponentOption, Meal, MealMap, Variant};
pub use error::{BackendError, ContractError, ErrorPayload};
pub use reply::{variant_of, ComponentReply, GlobalReply, MealReply, Reply};
