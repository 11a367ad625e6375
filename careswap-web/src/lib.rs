#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod dom;
pub mod storage;
pub mod surface;
pub mod system;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // The context lives as long as the page; event closures hold their own handles.
    if app::mount().is_none() {
        dom::console_error("careswap: no document, preferences not applied");
    }
}
