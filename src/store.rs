//! Dataset Store
//!
//! Last fetched component and meal lists. Reset whenever a dataset is
//! opened or closed; refreshed only by re-fetching.

use leptos::prelude::*;
use reactive_stores::Store;
use ipc_contract::{ComponentMap, MealMap};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub components: ComponentMap,
    pub meals: MealMap,
    /// Whether the first `getComponents` has come back.
    pub components_loaded: bool,
    pub meals_loaded: bool,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

pub fn store_set_components(store: &AppStore, components: ComponentMap) {
    *store.components().write() = components;
    *store.components_loaded().write() = true;
}

pub fn store_set_meals(store: &AppStore, meals: MealMap) {
    *store.meals().write() = meals;
    *store.meals_loaded().write() = true;
}

/// Drop everything belonging to the previous dataset.
pub fn store_clear(store: &AppStore) {
    store.set(AppState::default());
}
