//! Site Header Component
//!
//! Page navigation, save indicator and dataset close.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use ipc_contract::DatasetRef;

use crate::commands;
use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::lifecycle::MountGuard;
use crate::state::{close_dataset, Page, SaveStatus, SaveTracker};
use crate::store::{store_clear, use_app_store};

#[component]
pub fn SiteHeader(dataset: DatasetRef) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let guard = MountGuard::attach();
    let tracker = RwSignal::new(SaveTracker::default());
    let reset_ms = ctx.saved_reset_ms;

    let on_save = {
        let guard = guard.clone();
        move |_: web_sys::MouseEvent| {
            if tracker.with_untracked(|t| t.status == SaveStatus::Saving) {
                return;
            }
            let generation = tracker.try_update(|t| t.begin()).unwrap_or_default();
            let guard = guard.clone();
            let ipc = ctx.ipc();
            spawn_local(async move {
                let ok = commands::save(&ipc).await.is_ok();
                if !guard.is_alive() {
                    return;
                }
                tracker.update(|t| t.finish(generation, ok));
                if ok {
                    TimeoutFuture::new(reset_ms).await;
                    if guard.is_alive() {
                        tracker.update(|t| t.settle(generation));
                    }
                }
            });
        }
    };

    let on_close = move |_: ()| {
        let guard = guard.clone();
        let ipc = ctx.ipc();
        spawn_local(async move {
            let Some(phase) = close_dataset(&ipc).await else {
                return;
            };
            if guard.is_alive() {
                store_clear(&store);
                ctx.enter(phase);
            }
        });
    };

    let save_label = move || match tracker.with(|t| t.status) {
        SaveStatus::Idle => "Save",
        SaveStatus::Saving => "Saving...",
        SaveStatus::Saved => "Saved",
    };

    let month_name = ctx.locale.month_name(dataset.month).unwrap_or_default();

    let nav_button = move |page: Page, label: &'static str| {
        view! {
            <button
                class=move || if ctx.page.get() == page { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.page.set(page)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="site-header">
            <span class="dataset-label">{format!("{} {}", month_name, dataset.year)}</span>
            <nav class="site-nav">
                {nav_button(Page::Components, "Components")}
                {nav_button(Page::Meals, "Meals")}
            </nav>
            <div class="header-actions">
                <button
                    class="save-btn"
                    class:saved=move || tracker.with(|t| t.status == SaveStatus::Saved)
                    disabled=move || tracker.with(|t| t.status == SaveStatus::Saving)
                    on:click=on_save
                >
                    {save_label}
                </button>
                <ConfirmButton
                    label="Close"
                    prompt="Close this dataset?"
                    on_confirm=Callback::new(on_close)
                />
            </div>
        </header>
    }
}
