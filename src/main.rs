#![allow(warnings)]
//! Category Admin Frontend Entry Point

mod models;
mod commands;
mod config;
mod logger;
mod tree;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::ViewConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ViewConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ViewConfig::default(), Some(e)),
    };
    if let Err(e) = logger::init_logger(config.log_level()) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[CONFIG] Using defaults: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
