//! Functions the server templates call from inline `onclick` handlers.
//!
//! `#[wasm_bindgen]` exports only reach the ES module that imports them, so
//! each entry point is also assigned onto `window` under its template name.

use kp_ui_core::ScanKind;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::numpad;
use crate::scan;

pub const NUMPAD_PRESS: &str = "numpadPress";
pub const INIT_NUMPAD: &str = "initNumpad";
pub const SIMULATE_NFC_SCAN: &str = "simulateNFCScan";
pub const SIMULATE_QR_SCAN: &str = "simulateQRScan";
pub const FORMAT_RUPIAH: &str = "formatRupiah";

/// Names installed by `install` (everything except the lazily exposed keypad).
pub const PAGE_GLOBALS: [&str; 4] = [INIT_NUMPAD, SIMULATE_NFC_SCAN, SIMULATE_QR_SCAN, FORMAT_RUPIAH];

/// `window[name] = value`, logging instead of failing.
fn set_global(name: &str, value: &JsValue) {
    let win = dom::window();
    if let Err(e) = js_sys::Reflect::set(win.as_ref(), &JsValue::from_str(name), value) {
        gloo_console::warn!(format!("kartu: failed to expose {name}"), e);
    }
}

/// Install the page-wide globals. Called from page init.
pub fn install() {
    let init = Closure::<dyn Fn() -> bool>::new(numpad::init_numpad);
    set_global(INIT_NUMPAD, init.as_ref());
    init.forget();

    let nfc = Closure::<dyn Fn()>::new(|| {
        scan::simulate(ScanKind::Nfc);
    });
    set_global(SIMULATE_NFC_SCAN, nfc.as_ref());
    nfc.forget();

    let qr = Closure::<dyn Fn()>::new(|| {
        scan::simulate(ScanKind::Qr);
    });
    set_global(SIMULATE_QR_SCAN, qr.as_ref());
    qr.forget();

    let rupiah = Closure::<dyn Fn(f64) -> String>::new(kp_ui_core::format_rupiah);
    set_global(FORMAT_RUPIAH, rupiah.as_ref());
    rupiah.forget();
}

/// Expose `numpadPress`. Only done once the keypad has a display to drive.
pub fn install_numpad_press() {
    let press = Closure::<dyn Fn(String)>::new(|key: String| press_key(&key));
    set_global(NUMPAD_PRESS, press.as_ref());
    press.forget();
}

pub fn press_key(key: &str) {
    if let Err(e) = numpad::press(key) {
        gloo_console::warn!(format!("kartu: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_are_distinct() {
        let mut names = PAGE_GLOBALS.to_vec();
        names.push(NUMPAD_PRESS);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PAGE_GLOBALS.len() + 1);
    }

    #[test]
    fn template_names_match_markup() {
        assert_eq!(
            PAGE_GLOBALS,
            ["initNumpad", "simulateNFCScan", "simulateQRScan", "formatRupiah"]
        );
        assert_eq!(NUMPAD_PRESS, "numpadPress");
    }
}
