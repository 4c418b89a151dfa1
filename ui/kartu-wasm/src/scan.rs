//! Simulated card scans.

use kp_ui_core::ScanKind;

use crate::dom;
use crate::state;
use crate::timers;

pub const RESULT_AREA_ID: &str = "scanResult";

/// Show the scanning placeholder in `#scanResult` and navigate to the demo
/// result page once the delay elapses. No-op without a result area.
pub fn simulate(kind: ScanKind) -> bool {
    let Some(area) = dom::by_id(RESULT_AREA_ID) else {
        return false;
    };
    let plan = kind.plan(&state::config().scan);

    dom::set_inner_html(&area, plan.template);

    let target = plan.target;
    timers::after(plan.delay_ms, move || {
        if let Err(e) = dom::navigate(&target) {
            gloo_console::warn!(format!("kartu: navigation to {target} failed"), e);
        }
    });
    gloo_console::log!(format!("kartu: {} scan started", kind.label()));
    true
}
