//! Simulated NFC / QR scan flows.
//!
//! Both flows always succeed: show an animated placeholder, wait, then
//! navigate to the result page for a fixed demo identifier.

use crate::config::ScanConfig;

const NFC_TEMPLATE: &str = r#"
        <div class="scan-card" style="border-style: solid; border-color: var(--gold-500);">
            <div class="scan-card-icon" style="animation: scanPulse 1s ease-in-out infinite;">
                <i class="bi bi-broadcast"></i>
            </div>
            <h3>Mendekatkan Kartu NFC...</h3>
            <p>Tahan kartu di dekat perangkat</p>
        </div>
    "#;

const QR_TEMPLATE: &str = r#"
        <div class="scanner-area">
            <div class="scanner-line"></div>
            <div style="z-index: 1; text-align: center;">
                <i class="bi bi-qr-code-scan" style="font-size: 48px; color: var(--gold-400);"></i>
                <p style="color: var(--text-muted); margin-top: 8px; font-size: 13px;">Arahkan kamera ke QR Code</p>
            </div>
        </div>
    "#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanKind {
    Nfc,
    Qr,
}

/// Everything the browser layer needs to run one simulated scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanPlan {
    pub template: &'static str,
    pub delay_ms: u32,
    pub target: String,
}

impl ScanKind {
    pub fn label(self) -> &'static str {
        match self {
            ScanKind::Nfc => "nfc",
            ScanKind::Qr => "qr",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            ScanKind::Nfc => NFC_TEMPLATE,
            ScanKind::Qr => QR_TEMPLATE,
        }
    }

    pub fn plan(self, cfg: &ScanConfig) -> ScanPlan {
        let (delay_ms, id) = match self {
            ScanKind::Nfc => (cfg.nfc_delay_ms, cfg.nfc_demo_uid.as_str()),
            ScanKind::Qr => (cfg.qr_delay_ms, cfg.qr_demo_code.as_str()),
        };
        ScanPlan {
            template: self.template(),
            delay_ms,
            target: result_url(&cfg.result_path, id),
        }
    }
}

/// Join the result path and identifier with exactly one `/`.
pub fn result_url(result_path: &str, id: &str) -> String {
    format!("{}/{}", result_path.trim_end_matches('/'), id)
}
