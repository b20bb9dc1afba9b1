//! Component Commands
//!
//! Frontend bindings for components and their variants and options.

use ipc_contract::{ComponentCmd, ComponentMap, ComponentReply};
use uuid::Uuid;

use super::{Expected, Ipc, Reported};

pub async fn get_components(ipc: &Ipc) -> Result<ComponentMap, Reported> {
    let expected = Expected::One("gotComponents");
    match ipc.request::<ComponentReply>(ComponentCmd::GetComponents, expected).await? {
        ComponentReply::GotComponents { data } => Ok(data),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn add_component(
    ipc: &Ipc,
    name: String,
    variants: Vec<String>,
    options: Vec<String>,
) -> Result<(), Reported> {
    let expected = Expected::One("addedComponent");
    let cmd = ComponentCmd::AddComponent { name, variants, options };
    match ipc.request::<ComponentReply>(cmd, expected).await? {
        ComponentReply::AddedComponent => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn add_variant(ipc: &Ipc, component: Uuid, name: String) -> Result<(), Reported> {
    let expected = Expected::One("addedVariant");
    match ipc.request::<ComponentReply>(ComponentCmd::AddVariant { component, name }, expected).await? {
        ComponentReply::AddedVariant => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn add_option(ipc: &Ipc, component: Uuid, name: String) -> Result<(), Reported> {
    let expected = Expected::One("addedOption");
    match ipc.request::<ComponentReply>(ComponentCmd::AddOption { component, name }, expected).await? {
        ComponentReply::AddedOption => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}
