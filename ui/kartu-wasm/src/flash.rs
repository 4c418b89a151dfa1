//! Auto-dismiss for `.flash-message` banners.

use kp_ui_core::flash::{self, FlashAction};
use kp_ui_core::FlashTiming;
use std::rc::Rc;
use web_sys::Element;

use crate::dom;
use crate::timers;

pub const FLASH_SELECTOR: &str = ".flash-message";

/// Fade out and remove every banner present at load, staggered in document
/// order. Returns the number of timers started.
pub fn init_flash_messages(timing: &FlashTiming) -> usize {
    let banners: Rc<Vec<Element>> = Rc::new(dom::query_all(FLASH_SELECTOR));
    if banners.is_empty() {
        return 0;
    }
    let schedule = flash::dismiss_schedule(banners.len(), timing);
    let transform = Rc::new(flash::fade_transform(timing));

    timers::start(schedule, move |action: FlashAction| {
        let Some(el) = banners.get(action.index()) else {
            return;
        };
        match action {
            FlashAction::Fade(_) => {
                dom::set_style(el, "opacity", "0");
                dom::set_style(el, "transform", &transform);
            }
            // `remove()` on a detached node is a no-op.
            FlashAction::Remove(_) => el.remove(),
        }
    })
}
