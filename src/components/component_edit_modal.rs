//! Component Edit Modal
//!
//! Variants and options of one component, with add fields for each.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::components::{ListEditor, ModalFrame};
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::{ComponentEditor, ListRow, SubmitOutcome};
use crate::store::{store_set_components, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
enum AddKind {
    Variant,
    Option,
}

#[component]
pub fn ComponentEditModal(component: Uuid, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();
    let new_variant = RwSignal::new(String::new());
    let new_option = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let name = move || store.components().with(|all| all.get(&component).map(|c| c.name.clone()).unwrap_or_default());
    let variant_rows = Signal::derive(move || {
        store.components().with(|all| all.get(&component).map(ListRow::variants).unwrap_or_default())
    });
    let option_rows = Signal::derive(move || {
        store.components().with(|all| all.get(&component).map(ListRow::options).unwrap_or_default())
    });

    let add = move |kind: AddKind| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let guard = guard.clone();
        let ipc = ctx.ipc();
        let mut editor = ComponentEditor::new(component);
        editor.new_variant = new_variant.get_untracked();
        editor.new_option = new_option.get_untracked();
        spawn_local(async move {
            let outcome = match kind {
                AddKind::Variant => editor.add_variant(&ipc).await,
                AddKind::Option => editor.add_option(&ipc).await,
            };
            if !guard.is_alive() {
                return;
            }
            busy.set(false);
            if let SubmitOutcome::Accepted { refreshed } = outcome {
                match kind {
                    AddKind::Variant => new_variant.set(editor.new_variant),
                    AddKind::Option => new_option.set(editor.new_option),
                }
                if let Some(components) = refreshed {
                    store_set_components(&store, components);
                }
            }
        });
    };
    let add_option = add.clone();

    view! {
        <ModalFrame on_close=on_close title=name()>
            <ListEditor
                title="Variants"
                rows=variant_rows
                value=new_variant
                busy=busy
                on_add=Callback::new(move |_| add(AddKind::Variant))
            />
            <ListEditor
                title="Options"
                rows=option_rows
                value=new_option
                busy=busy
                on_add=Callback::new(move |_| add_option(AddKind::Option))
            />
            <div class="modal-actions">
                <button on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </ModalFrame>
    }
}
