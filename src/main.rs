//! Rilliex Site Entry Point

mod app;
mod components;
mod context;
mod media;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(LoggerConfig::new("Rilliex")) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    mount_to_body(App);
}
