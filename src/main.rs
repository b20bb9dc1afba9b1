//! Meal Planner Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod i18n;
mod lifecycle;
mod notify;
mod state;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::detect();
    _ = console_log::init_with_level(config.log_level);
    log::info!("[APP] starting, locale {:?}", config.locale);

    mount_to_body(move || view! { <App config=config /> });
}
