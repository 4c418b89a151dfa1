//! Kartu Pintar UI core.
//!
//! Target-independent logic behind the browser frontend: the keypad amount
//! buffer, `id-ID` number grouping, flash and scan timer schedules, sidebar
//! state and page configuration. Nothing here touches the DOM, so every piece
//! is unit-tested natively; `ui/kartu-wasm` does the wiring.

pub mod amount;
pub mod config;
pub mod error;
pub mod flash;
pub mod locale;
pub mod scan;
pub mod schedule;
pub mod sidebar;

pub use amount::{AmountBuffer, NumpadKey};
pub use config::{FlashTiming, ScanConfig, UiConfig};
pub use error::{Result, UiError};
pub use flash::FlashAction;
pub use locale::{format_rupiah, group_id_id};
pub use scan::{ScanKind, ScanPlan};
pub use schedule::{Schedule, ScheduledTask};
pub use sidebar::SidebarState;
