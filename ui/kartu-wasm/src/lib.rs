//! Kartu Pintar WASM frontend.
//!
//! Presentation glue for the server-rendered pages: sidebar, flash banners,
//! payment keypad and simulated NFC/QR scans. Logic lives in `kp-ui-core`;
//! this crate binds it to the DOM and installs the `window` globals the
//! templates call (see `globals`).

pub mod dom;
pub mod events;
pub mod flash;
pub mod globals;
pub mod numpad;
pub mod scan;
pub mod sidebar;
pub mod state;
pub mod timers;

use kp_ui_core::ScanKind;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let doc = dom::document();
    if doc.ready_state() == "loading" {
        events::on_event(&doc, "DOMContentLoaded", |_| init());
    } else {
        init();
    }
    Ok(())
}

/// Page initialisation (runs once the DOM is parsed).
fn init() {
    state::load_config();
    let cfg = state::config();

    sidebar::init_sidebar(cfg.mobile_breakpoint_px);
    flash::init_flash_messages(&cfg.flash);
    globals::install();
    numpad::init_numpad();
    timers::bind_pagehide_cancel();
}

// ── Module exports, for pages that import the bindings directly ──

#[wasm_bindgen(js_name = initNumpad)]
pub fn init_numpad() -> bool {
    numpad::init_numpad()
}

#[wasm_bindgen(js_name = numpadPress)]
pub fn numpad_press(key: &str) {
    globals::press_key(key);
}

#[wasm_bindgen(js_name = simulateNFCScan)]
pub fn simulate_nfc_scan() {
    scan::simulate(ScanKind::Nfc);
}

#[wasm_bindgen(js_name = simulateQRScan)]
pub fn simulate_qr_scan() {
    scan::simulate(ScanKind::Qr);
}

#[wasm_bindgen(js_name = formatRupiah)]
pub fn format_rupiah(num: f64) -> String {
    kp_ui_core::format_rupiah(num)
}
