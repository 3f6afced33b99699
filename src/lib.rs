use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// Entry point: install logging and mount the chart view.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "🚀 Stock graph viewer starting");

    leptos::mount_to_body(|| leptos::view! { <app::App /> });
}
