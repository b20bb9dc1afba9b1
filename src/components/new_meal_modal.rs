//! New Meal Modal
//!
//! Name, short code and the component -> variant mapping of a new meal.
//! The draft is owned by the caller so it survives the modal closing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::components::ModalFrame;
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::{MealDraft, MealRow, SubmitOutcome};
use crate::store::{store_set_meals, use_app_store, AppStateStoreFields};

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

#[component]
pub fn NewMealModal(draft: RwSignal<MealDraft>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();
    let busy = RwSignal::new(false);

    let cancel = move |_: web_sys::MouseEvent| {
        draft.update(MealDraft::reset);
        on_close.run(());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let guard = guard.clone();
        let ipc = ctx.ipc();
        let mut working = draft.get_untracked();
        spawn_local(async move {
            let outcome = working.submit(&ipc).await;
            if !guard.is_alive() {
                return;
            }
            busy.set(false);
            draft.set(working);
            if let SubmitOutcome::Accepted { refreshed } = outcome {
                if let Some(meals) = refreshed {
                    store_set_meals(&store, meals);
                }
                on_close.run(());
            }
        });
    };

    let name_invalid = move || draft.with(|d| d.show_errors && d.name_error());
    let short_invalid = move || draft.with(|d| d.show_errors && d.short_error());

    let rows = move || store.components().with(|all| draft.with(|d| d.rows(all)));
    let available = move || store.components().with(|all| draft.with(|d| d.available_components(all)));
    let pick_variants = move || {
        draft.with(|d| d.pick.component).map(|component| {
            store.components().with(|all| MealDraft::variant_choices(all, &component))
        })
    };

    view! {
        <ModalFrame
            on_close=on_close
            close_on_overlay=Signal::derive(move || draft.with(|d| d.is_pristine()))
            title="New meal"
        >
            <form class="modal-form" on:submit=submit>
                <label>"Name"</label>
                <input
                    type="text"
                    class:invalid=name_invalid
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <Show when=name_invalid>
                    <span class="field-error">"A name is required."</span>
                </Show>

                <label>"Short code"</label>
                <input
                    type="text"
                    class:invalid=short_invalid
                    prop:value=move || draft.with(|d| d.short.clone())
                    on:input=move |ev| draft.update(|d| d.short = event_target_value(&ev))
                />
                <Show when=short_invalid>
                    <span class="field-error">"A short code is required."</span>
                </Show>

                <table class="data-table meal-components">
                    <thead>
                        <tr>
                            <th>"Component"</th>
                            <th>"Variant"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let component = row.component();
                            let remove = move |_: web_sys::MouseEvent| draft.update(|d| d.remove_row(&component));
                            match row {
                                MealRow::Known { name, variant, .. } => {
                                    let choices = store.components().with(|all| MealDraft::variant_choices(all, &component));
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>
                                                <select
                                                    prop:value=variant.map(|v| v.to_string()).unwrap_or_default()
                                                    on:change=move |ev| {
                                                        let variant = parse_id(&event_target_value(&ev));
                                                        draft.update(|d| d.set_row_variant(component, variant));
                                                    }
                                                >
                                                    <option value="">"Default"</option>
                                                    {choices.into_iter().map(|(id, label)| view! {
                                                        <option value=id.to_string() selected={variant == Some(id)}>{label}</option>
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                            <td><button type="button" on:click=remove>"×"</button></td>
                                        </tr>
                                    }.into_any()
                                }
                                MealRow::Invalid { .. } => view! {
                                    <tr class="invalid-row">
                                        <td colspan="2">{format!("Unknown component {}", component)}</td>
                                        <td><button type="button" on:click=remove>"×"</button></td>
                                    </tr>
                                }.into_any(),
                            }
                        }).collect_view()}
                    </tbody>
                </table>

                <div class="meal-picker">
                    <select
                        prop:value=move || draft.with(|d| d.pick.component.map(|c| c.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let component = parse_id(&event_target_value(&ev));
                            draft.update(|d| d.pick_component(component));
                        }
                    >
                        <option value="">"Component..."</option>
                        {move || available().into_iter().map(|(id, label)| view! {
                            <option value=id.to_string()>{label}</option>
                        }).collect_view()}
                    </select>
                    <select
                        prop:disabled=move || pick_variants().is_none()
                        prop:value=move || draft.with(|d| d.pick.variant.map(|v| v.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let variant = parse_id(&event_target_value(&ev));
                            draft.update(|d| d.pick_variant(variant));
                        }
                    >
                        <option value="">"Default"</option>
                        {move || pick_variants().unwrap_or_default().into_iter().map(|(id, label)| view! {
                            <option value=id.to_string()>{label}</option>
                        }).collect_view()}
                    </select>
                    <button
                        type="button"
                        disabled=move || draft.with(|d| d.pick.component.is_none())
                        on:click=move |_| {
                            draft.update(|d| {
                                d.confirm_pick();
                            });
                        }
                    >
                        "Add"
                    </button>
                </div>

                <div class="modal-actions">
                    <button type="button" on:click=cancel>"Cancel"</button>
                    <button type="submit" class="primary" disabled=move || busy.get()>"Create"</button>
                </div>
            </form>
        </ModalFrame>
    }
}
