use leptos::prelude::*;
use v9sh::app::App;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("{} {} starting", v9sh::config::APP_NAME, v9sh::config::APP_VERSION);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
