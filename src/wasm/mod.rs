//! WASM module: the controller wired into a browser page
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   mount(config)  (JS, on page ready)    │
//! └─────────────────┬───────────────────────┘
//!                   │ click listeners
//! ┌─────────────────▼───────────────────────┐
//! │        TransactionController            │
//! │  connect, fund, withdraw, queryBalance  │
//! └───────┬──────────────┬──────────────┬───┘
//!         │              │              │
//! ┌───────▼───────┐ ┌────▼───────┐ ┌────▼─────────────┐
//! │InjectedProvider│ │ DomBinder  │ │ TimeoutScheduler │
//! │window.ethereum │ │ buttons    │ │ setTimeout       │
//! └────────────────┘ └────────────┘ └──────────────────┘
//! ```

mod app;
mod dom;
mod provider;
mod timer;

pub use app::mount;
pub use dom::{DomBinder, DomError, DomStatus};
pub use provider::InjectedProvider;
pub use timer::TimeoutScheduler;

use wasm_bindgen::prelude::*;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn console_error(s: &str) {
    web_sys::console::error_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

pub(crate) use log;
