use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod view_state;

/// Wires logging and configuration, then mounts the Leptos app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    config::init_config(config::AppConfig::from_env());

    let console = infrastructure::services::ConsoleLogger::for_build();
    let panel_level = if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info };
    domain::logging::init_logger(Box::new(app::LeptosLogger::new(console, panel_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Sentiment dashboard starting, API at {}", config::config().api_base_url),
    );

    leptos::mount_to_body(app::App);
}

/// Liveness probe callable from JavaScript
#[wasm_bindgen]
pub async fn health_check() -> bool {
    let api = infrastructure::SentimentApiClient::new(config::config().api_base_url.clone());
    api.is_healthy().await
}
