//! Indonesian (`id-ID`) number formatting.
//!
//! Thousands are grouped with `.` and the decimal mark is `,`, matching what
//! `Number.prototype.toLocaleString('id-ID')` renders in the browser.

const GROUP_SEP: char = '.';
const DECIMAL_SEP: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Group an unsigned integer in threes: `1000000` → `1.000.000`.
pub fn group_id_id(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Group a plain ASCII digit string in threes.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out
}

/// Format an arbitrary number the way `toLocaleString('id-ID')` does, with at
/// most three fraction digits.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-∞".to_owned() } else { "∞".to_owned() };
    }

    // Split before scaling so values past 2^53 keep their integer digits.
    let abs = n.abs();
    let mut whole = abs.trunc();
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let mut frac = ((abs - whole) * scale).round() as u64;
    if frac as f64 >= scale {
        whole += 1.0;
        frac = 0;
    }

    let mut out = String::new();
    if n < 0.0 && (whole > 0.0 || frac > 0) {
        out.push('-');
    }
    out.push_str(&group_digits(&format!("{whole:.0}")));
    if frac > 0 {
        let frac = format!("{frac:0width$}", width = MAX_FRACTION_DIGITS);
        out.push(DECIMAL_SEP);
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// `Rp ` prefixed currency string.
pub fn format_rupiah(n: f64) -> String {
    format!("Rp {}", format_number(n))
}
