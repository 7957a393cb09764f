//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (keyboard, mouse and touch unified in `input`)
//! - Browser start-up hook (wasm32)

pub mod input;

pub use input::{InputSnapshot, InputSource, Key};

/// Browser entry point: route logs and panics to the console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Rush Out the Tunnel (web) starting...");
}
