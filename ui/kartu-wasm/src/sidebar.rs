//! Collapsible navigation sidebar.
//!
//! `#hamburger` toggles, `#sidebarClose` closes, and a tap on `#mainContent`
//! closes the panel on narrow viewports. Each binding is skipped when its
//! elements are missing.

use kp_ui_core::sidebar::OPEN_CLASS;
use kp_ui_core::SidebarState;
use web_sys::Element;

use crate::dom;
use crate::events;

fn current(panel: &Element) -> SidebarState {
    SidebarState::from_open(dom::has_class(panel, OPEN_CLASS))
}

fn apply(panel: &Element, state: SidebarState) {
    dom::toggle_class(panel, OPEN_CLASS, state.is_open());
}

pub fn init_sidebar(breakpoint_px: i32) {
    let Some(sidebar) = dom::by_id("sidebar") else {
        return;
    };

    if let Some(hamburger) = dom::by_id("hamburger") {
        let panel = sidebar.clone();
        events::on_click(&hamburger, move |_| {
            apply(&panel, current(&panel).toggled());
        });
    }

    if let Some(close) = dom::by_id("sidebarClose") {
        let panel = sidebar.clone();
        events::on_click(&close, move |_| {
            dom::remove_class(&panel, OPEN_CLASS);
        });
    }

    if let Some(main) = dom::by_id("mainContent") {
        let panel = sidebar;
        events::on_click(&main, move |_| {
            let Some(width) = dom::viewport_width() else {
                return;
            };
            let before = current(&panel);
            let after = before.after_outside_click(width, breakpoint_px);
            if after != before {
                apply(&panel, after);
            }
        });
    }
}
