use wasm_bindgen::prelude::wasm_bindgen;

use wordsearch_app::*;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("csr mode - mounting search widget");

    leptos::mount::mount_to_body(App);
}
