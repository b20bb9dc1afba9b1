//! Meals Page
//!
//! Table of meals and the new-meal modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::NewMealModal;
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::MealDraft;
use crate::store::{store_set_components, store_set_meals, use_app_store, AppStateStoreFields};

#[component]
pub fn MealsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();
    let (creating, set_creating) = signal(false);
    let draft = RwSignal::new(MealDraft::default());

    // Meals reference components by id; both lists are needed for labels.
    {
        let ipc = ctx.ipc();
        spawn_local(async move {
            let meals = commands::get_meals(&ipc).await;
            let components = commands::get_components(&ipc).await;
            if !guard.is_alive() {
                return;
            }
            if let Ok(meals) = meals {
                store_set_meals(&store, meals);
            }
            if let Ok(components) = components {
                store_set_components(&store, components);
            }
        });
    }

    let rows = move || {
        store.meals().with(|all| {
            all.iter()
                .map(|(id, m)| (*id, m.name.clone(), m.short.clone(), m.components.len()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="page meals-page">
            <div class="page-toolbar">
                <h2>"Meals"</h2>
                <button class="primary" on:click=move |_| set_creating.set(true)>"New meal"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Short"</th>
                        <th>"Components"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !store.meals_loaded().get()>
                        <tr><td colspan="3" class="hint">"Loading..."</td></tr>
                    </Show>
                    <Show when=move || store.meals_loaded().get() && store.meals().with(|m| m.is_empty())>
                        <tr><td colspan="3" class="hint">"No meals yet."</td></tr>
                    </Show>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |(_, name, short, count)| view! {
                            <tr>
                                <td>{name}</td>
                                <td>{short}</td>
                                <td>{count}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <Show when=move || creating.get()>
                <NewMealModal draft=draft on_close=Callback::new(move |_| set_creating.set(false)) />
            </Show>
        </section>
    }
}
