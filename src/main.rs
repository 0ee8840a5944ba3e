#![allow(warnings)]
//! Canvass Frontend Entry Point

mod action;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod logging;
mod models;
mod mutation;
mod page_data;
mod progress;
mod results;
mod store;

use std::sync::Arc;

use app::App;
use commands::HttpTransport;
use controller::PageController;
use leptos::prelude::*;
use log::{error, info, LevelFilter};

fn main() {
    console_error_panic_hook::set_once();
    let _ = logging::init(LevelFilter::Info);

    let data = page_data::load_page_data().unwrap_or_else(|e| {
        error!("[App] {e}");
        page_data::PageData::default()
    });
    let config = data.config.clone().sanitized();
    log::set_max_level(config.level_filter());

    let origin = page_data::page_origin().unwrap_or_default();
    let url = config.validate_url(&origin);
    info!("[App] Validation endpoint {url}");
    let transport = Arc::new(HttpTransport::new(url, config.request_timeout_ms));

    let mut controller = PageController::new(config, data, transport);
    let setup = controller.setup();
    let client = controller.client();

    mount_to_body(move || view! { <App setup=setup client=client /> });
}
