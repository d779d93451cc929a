use gloo::console;

#[cfg(test)]
use wasm_bindgen_test::wasm_bindgen_test_configure;

#[cfg(test)]
wasm_bindgen_test_configure!(run_in_browser);

mod api;
mod card_view;
mod dialog;
mod dom;
mod form_dialog;
mod gallery_app;
mod profile_view;
mod settings;
mod validation;

fn main() {
    if let Err(err) = gallery_app::bootstrap() {
        console::error!("gallery boot failed:", err);
    }
}
