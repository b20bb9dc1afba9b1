//! Choice Input Component
//!
//! Free-form multi-select: typed entries are appended and selected at once.

use leptos::prelude::*;

use crate::state::ChoiceList;

#[component]
pub fn ChoiceInput(
    list: RwSignal<ChoiceList>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let commit = move || {
        let text = draft.get_untracked();
        if list.try_update(|l| l.add_choice(&text)).unwrap_or(false) {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="choice-input">
            <div class="choice-entry">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button type="button" on:click=move |_| commit()>"+"</button>
            </div>
            <ul class="choice-list">
                <For
                    each=move || list.with(|l| l.choices.clone())
                    key=|choice| choice.clone()
                    children=move |choice| {
                        let value = choice.clone();
                        let selected = {
                            let value = value.clone();
                            move || list.with(|l| l.is_selected(&value))
                        };
                        view! {
                            <li
                                class="choice"
                                class:selected=selected
                                on:click=move |_| list.update(|l| l.toggle(&value))
                            >
                                {choice}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
