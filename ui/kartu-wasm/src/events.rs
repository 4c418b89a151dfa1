//! Event listener helpers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// Attach a click handler to an element for the lifetime of the page.
pub fn on_click<F>(el: &Element, handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
    if let Err(e) = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        gloo_console::warn!("kartu: failed to bind click", e);
    }
    cb.forget();
}

/// Attach a handler for an arbitrary event on any target (window, document).
pub fn on_event<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::warn!(format!("kartu: failed to bind {event}"), e);
    }
    cb.forget();
}
