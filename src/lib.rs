// ============================================================================
// SOCIETY PORTAL - public website + member portal frontend
// ============================================================================
// - views: one function component per routed page
// - components: shared UI (nav, guards, pagination, banners)
// - hooks: Yew wiring around the framework-free state services
// - state: session + list controllers (plain Rust, host-testable)
// - services: API / CMS clients, one module per backend surface
// - models: structures shared with the backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use crate::components::App;
use crate::config::AppConfig;

/// Boot the application: panic hook, logging, then mount the Yew root.
pub fn run() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!(
        "🚀 Society portal starting ({} environment)",
        config.environment
    );

    yew::Renderer::<App>::new().render();
}
