//! Components Page
//!
//! Table of components with variant and option counts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::commands;
use crate::components::{ComponentEditModal, NewComponentModal};
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::store::{store_set_components, use_app_store, AppStateStoreFields};

#[component]
pub fn ComponentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();
    let (creating, set_creating) = signal(false);
    let (editing, set_editing) = signal::<Option<Uuid>>(None);

    {
        let ipc = ctx.ipc();
        spawn_local(async move {
            if let Ok(components) = commands::get_components(&ipc).await {
                if guard.is_alive() {
                    store_set_components(&store, components);
                }
            }
        });
    }

    let rows = move || {
        store.components().with(|all| {
            all.iter()
                .map(|(id, c)| (*id, c.name.clone(), c.variants.len(), c.options.len(), c.deleted))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="page components-page">
            <div class="page-toolbar">
                <h2>"Components"</h2>
                <button class="primary" on:click=move |_| set_creating.set(true)>"New component"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Variants"</th>
                        <th>"Options"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !store.components_loaded().get()>
                        <tr><td colspan="3" class="hint">"Loading..."</td></tr>
                    </Show>
                    <Show when=move || store.components_loaded().get() && store.components().with(|c| c.is_empty())>
                        <tr><td colspan="3" class="hint">"No components yet."</td></tr>
                    </Show>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |(id, name, variants, options, deleted)| view! {
                            <tr class="clickable" class:deleted=deleted on:click=move |_| set_editing.set(Some(id))>
                                <td>{name}</td>
                                <td>{variants}</td>
                                <td>{options}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <Show when=move || creating.get()>
                <NewComponentModal on_close=Callback::new(move |_| set_creating.set(false)) />
            </Show>
            {move || editing.get().map(|id| view! {
                <ComponentEditModal component=id on_close=Callback::new(move |_| set_editing.set(None)) />
            })}
        </section>
    }
}
