//! Meal Planner App
//!
//! Wires the IPC client and shared state, then switches between dataset
//! selection and the open dataset.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use ipc_contract::DatasetRef;

use crate::commands::{Ipc, TauriTransport};
use crate::components::{ComponentsPage, DatasetSelect, MealsPage, SiteHeader, ToastSink, ToastStack};
use crate::config::UiConfig;
use crate::context::{use_app_context, AppContext};
use crate::notify::Notifier;
use crate::state::{AppPhase, Page};
use crate::store::{store_clear, use_app_store, AppState};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let toasts = ToastSink::new();
    let notifier = Notifier::new(Arc::new(toasts.clone()), config.locale);
    let ipc = Ipc::new(Arc::new(TauriTransport), notifier);

    let ctx = AppContext::new(ipc.clone(), config.locale, config.saved_reset_ms);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // The backend may already hold an open dataset.
    spawn_local(async move {
        let phase = AppPhase::fetch(&ipc).await.unwrap_or(AppPhase::Select);
        log::debug!("[APP] initial phase {:?}", phase);
        ctx.enter(phase);
    });

    view! {
        <div class="app-layout">
            {move || match ctx.phase.get() {
                AppPhase::Loading => view! { <p class="hint">"Loading..."</p> }.into_any(),
                AppPhase::Select => view! { <DatasetSelect /> }.into_any(),
                AppPhase::Loaded(dataset) => view! { <DatasetShell dataset=dataset /> }.into_any(),
            }}
            <ToastStack sink=toasts />
        </div>
    }
}

/// Header and the current page of an open dataset.
#[component]
fn DatasetShell(dataset: DatasetRef) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    store_clear(&store);

    view! {
        <SiteHeader dataset=dataset />
        <main class="main-content">
            {move || match ctx.page.get() {
                Page::Components => view! { <ComponentsPage /> }.into_any(),
                Page::Meals => view! { <MealsPage /> }.into_any(),
            }}
        </main>
    }
}
