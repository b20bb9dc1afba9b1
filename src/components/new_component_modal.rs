//! New Component Modal
//!
//! Name plus free-form variant and option lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ChoiceInput, ModalFrame};
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::{ChoiceList, NewComponentForm, SubmitOutcome};
use crate::store::{store_set_components, use_app_store};

#[component]
pub fn NewComponentModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();

    let name = RwSignal::new(String::new());
    let variants = RwSignal::new(ChoiceList::default());
    let options = RwSignal::new(ChoiceList::default());
    let show_errors = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        variants.set(ChoiceList::default());
        options.set(ChoiceList::default());
        show_errors.set(false);
    };

    let cancel = move |_: web_sys::MouseEvent| {
        reset();
        on_close.run(());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let mut form = NewComponentForm {
            name: name.get_untracked(),
            variants: variants.get_untracked(),
            options: options.get_untracked(),
            show_errors: false,
        };
        busy.set(true);
        let guard = guard.clone();
        let ipc = ctx.ipc();
        spawn_local(async move {
            let outcome = form.submit(&ipc).await;
            if !guard.is_alive() {
                return;
            }
            busy.set(false);
            show_errors.set(form.show_errors);
            if let SubmitOutcome::Accepted { refreshed } = outcome {
                reset();
                if let Some(components) = refreshed {
                    store_set_components(&store, components);
                }
                on_close.run(());
            }
        });
    };

    let name_invalid = move || show_errors.get() && name.with(|n| n.trim().is_empty());

    view! {
        <ModalFrame on_close=on_close title="New component">
            <form class="modal-form" on:submit=submit>
                <label>"Name"</label>
                <input
                    type="text"
                    class:invalid=name_invalid
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <Show when=name_invalid>
                    <span class="field-error">"A name is required."</span>
                </Show>

                <label>"Variants"</label>
                <ChoiceInput list=variants placeholder="Add variant" />

                <label>"Options"</label>
                <ChoiceInput list=options placeholder="Add option" />

                <div class="modal-actions">
                    <button type="button" on:click=cancel>"Cancel"</button>
                    <button type="submit" class="primary" disabled=move || busy.get()>"Create"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
