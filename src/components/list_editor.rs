//! List Editor Component
//!
//! Rows of a component's variants or options plus an add field.

use leptos::prelude::*;

use crate::state::ListRow;

#[component]
pub fn ListEditor(
    #[prop(into)] title: String,
    #[prop(into)] rows: Signal<Vec<ListRow>>,
    /// Text of the add field
    value: RwSignal<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="list-editor">
            <h3>{title}</h3>
            <ul class="list-rows">
                <For
                    each=move || rows.get()
                    key=|row| (row.key, row.label.clone(), row.deleted)
                    children=move |row| view! {
                        <li class="list-row" class:deleted=row.deleted>
                            <span class="list-label">{row.label}</span>
                            {row.deleted.then(|| view! { <span class="badge tombstone">"deleted"</span> })}
                        </li>
                    }
                />
            </ul>
            <form
                class="list-add"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_add.run(());
                }
            >
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || busy.get() || value.with(|v| v.trim().is_empty())
                >
                    "Add"
                </button>
            </form>
        </section>
    }
}
