//! Per-page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use kp_ui_core::{AmountBuffer, UiConfig};
use std::cell::RefCell;
use web_sys::Element;

use crate::dom;
use crate::timers::TimerGroup;

/// Element holding an optional JSON `UiConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "kpConfig";

/// Keypad state. `None` until `initNumpad` finds an amount display.
#[derive(Debug)]
pub struct Numpad {
    pub buffer: AmountBuffer,
    pub display: Element,
}

#[derive(Debug, Default)]
pub struct PageState {
    pub config: UiConfig,
    pub numpad: Option<Numpad>,
    pub timers: TimerGroup,
}

thread_local! {
    static STATE: RefCell<PageState> = RefCell::new(PageState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&PageState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut PageState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn config() -> UiConfig {
    with(|s| s.config.clone())
}

/// Read `#kpConfig` if present. Bad JSON keeps the defaults.
pub fn load_config() {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return;
    };
    let text = el.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return;
    }
    match UiConfig::from_json(&text) {
        Ok(cfg) => with_mut(|s| s.config = cfg),
        Err(e) => gloo_console::warn!(format!("kartu: {e}, using defaults")),
    }
}
