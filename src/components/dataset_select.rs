//! Dataset Select Component
//!
//! Year/month picker shown while no dataset is open.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::{AppPhase, DatasetSelector, SelectorPhase};

#[component]
pub fn DatasetSelect() -> impl IntoView {
    let ctx = use_app_context();
    let guard = MountGuard::attach();
    let selector = RwSignal::new(DatasetSelector::new());
    let busy = RwSignal::new(false);

    // Runs `op` on a copy of the selector and writes it back while mounted.
    let run = {
        let guard = guard.clone();
        move |op: SelectorOp| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let guard = guard.clone();
            let ipc = ctx.ipc();
            let mut working = selector.get_untracked();
            spawn_local(async move {
                match op {
                    SelectorOp::Load => working.load(&ipc).await,
                    SelectorOp::Open => working.open(&ipc).await,
                    SelectorOp::Create { next_month } => working.create(&ipc, next_month).await,
                };
                if !guard.is_alive() {
                    return;
                }
                busy.set(false);
                if let SelectorPhase::Loaded(dataset) = working.phase {
                    log::info!("[DATASET] opened {}/{}", dataset.year, dataset.month);
                    ctx.enter(AppPhase::Loaded(dataset));
                } else {
                    selector.set(working);
                }
            });
        }
    };

    run(SelectorOp::Load);

    let on_year = move |ev: web_sys::Event| {
        let year = event_target_value(&ev).parse::<i32>().ok();
        selector.update(|s| s.select_year(year));
    };
    let on_month = move |ev: web_sys::Event| {
        let month = event_target_value(&ev).parse::<u32>().ok();
        selector.update(|s| s.select_month(month));
    };

    let open = run.clone();
    let create_now = run.clone();
    let create_next = run;
    let locale = ctx.locale;

    view! {
        <div class="dataset-select">
            <h1>"Meal Planner"</h1>

            <Show when=move || selector.with(|s| s.is_loading())>
                <p class="hint">"Searching for datasets..."</p>
            </Show>
            <Show when=move || selector.with(|s| s.is_empty())>
                <p class="hint">"No datasets found."</p>
            </Show>

            <div class="field-row">
                <label>"Year"</label>
                <select
                    prop:disabled=move || selector.with(|s| s.year_disabled())
                    prop:value=move || selector.with(|s| s.year.map(|y| y.to_string()).unwrap_or_default())
                    on:change=on_year
                >
                    <option value="">"–"</option>
                    {move || selector.with(|s| s.years()).into_iter().map(|year| view! {
                        <option value=year.to_string()>{year}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field-row">
                <label>"Month"</label>
                <select
                    class:invalid=move || selector.with(|s| s.month_error())
                    prop:disabled=move || selector.with(|s| s.month_select_disabled())
                    prop:value=move || selector.with(|s| s.month.map(|m| m.to_string()).unwrap_or_default())
                    on:change=on_month
                >
                    <option value="">"–"</option>
                    {move || selector.with(|s| s.month_choices(locale)).into_iter().map(|choice| view! {
                        <option value=choice.month.to_string() disabled={!choice.enabled}>{choice.label}</option>
                    }).collect_view()}
                </select>
                <Show when=move || selector.with(|s| s.month_error())>
                    <span class="field-error">"No dataset exists for this month."</span>
                </Show>
            </div>

            <div class="actions">
                <button
                    class="primary"
                    disabled=move || busy.get() || !selector.with(|s| s.can_load())
                    on:click=move |_| open(SelectorOp::Open)
                >
                    "Load"
                </button>
                <button
                    disabled=move || busy.get() || !selector.with(|s| s.can_create_now())
                    on:click=move |_| create_now(SelectorOp::Create { next_month: false })
                >
                    "Create for this month"
                </button>
                <button
                    disabled=move || busy.get() || !selector.with(|s| s.can_create_next())
                    on:click=move |_| create_next(SelectorOp::Create { next_month: true })
                >
                    "Create for next month"
                </button>
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum SelectorOp {
    Load,
    Open,
    Create { next_month: bool },
}
