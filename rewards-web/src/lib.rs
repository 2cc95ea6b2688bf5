#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod listeners;
pub mod manager;
pub mod markup;
pub mod paths;
pub mod rewards;
pub mod surface;
pub mod trigger;

pub use manager::RewardsManager;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    log::debug!("rewards module loaded; waiting for RewardsManager.init");
}
