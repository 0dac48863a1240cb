//! Highlander dApp - Leptos Frontend
//!
//! Wallet connection and even-number contract status, compiled to WASM and
//! served by trunk.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;

use app::App;

const LOADING_ELEMENT_ID: &str = "leptos-loading";

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Config first so the logger honors LOG_LEVEL
    let config = shared::config::init_config();
    wasm_logger::init(wasm_logger::Config::new(config.log_level_filter()));
    log::info!(
        "[CONFIG] Highlander starting: mode={:?} contract={}",
        config.network_mode,
        config.contract_address
    );

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from index.html once WASM is running.
fn hide_loading_screen() {
    let document = gloo_utils::document();
    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::warn!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("Failed to hide loading screen: {:?}", e);
        }
    }
    loading_element.set_attribute("style", "display: none !important;").ok();
}
