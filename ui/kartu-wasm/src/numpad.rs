//! Payment keypad.
//!
//! Keypad buttons in the template call `numpadPress('7')`, `numpadPress('C')`
//! or `numpadPress('DEL')`. `#amountValue` shows the grouped amount and
//! `#amountInput` carries the raw digits for form submission.

use kp_ui_core::{AmountBuffer, UiError};
use web_sys::HtmlInputElement;

use crate::dom;
use crate::globals;
use crate::state::{self, Numpad};

pub const DISPLAY_ID: &str = "amountValue";
pub const HIDDEN_INPUT_ID: &str = "amountInput";

/// Bind the keypad to `#amountValue` and expose `window.numpadPress`.
/// Without the display the keypad stays inert and the global is not set.
pub fn init_numpad() -> bool {
    let Some(display) = dom::by_id(DISPLAY_ID) else {
        return false;
    };
    let max_digits = state::with(|s| s.config.max_amount_digits);
    state::with_mut(|s| {
        s.numpad = Some(Numpad {
            buffer: AmountBuffer::new(max_digits),
            display,
        })
    });
    globals::install_numpad_press();
    true
}

/// Apply one key and re-render. Presses before init are ignored.
pub fn press(key: &str) -> Result<(), UiError> {
    let rendered = state::with_mut(|s| {
        let numpad = s.numpad.as_mut()?;
        Some(numpad.buffer.press_str(key).map(|_| {
            (
                numpad.display.clone(),
                numpad.buffer.display(),
                numpad.buffer.raw().to_owned(),
            )
        }))
    });
    let Some(rendered) = rendered else {
        return Ok(());
    };
    let (display, text, raw) = rendered?;

    dom::set_text(&display, &text);
    if let Some(input) = dom::by_id_typed::<HtmlInputElement>(HIDDEN_INPUT_ID) {
        dom::set_input_value(&input, &raw);
    }
    Ok(())
}
