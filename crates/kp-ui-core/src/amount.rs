//! Keypad amount buffer.
//!
//! Holds the raw digit string typed on the payment keypad. The display value
//! strips leading zeros through the integer parse; the raw value keeps them and
//! is what the hidden form field submits.

use std::str::FromStr;

use tracing::debug;

use crate::error::UiError;
use crate::locale::group_id_id;

pub const DEFAULT_MAX_DIGITS: usize = 9;

/// One keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumpadKey {
    Digit(u8),
    Clear,
    Delete,
}

impl FromStr for NumpadKey {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(NumpadKey::Clear),
            "DEL" => Ok(NumpadKey::Delete),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Ok(NumpadKey::Digit(c as u8 - b'0')),
                    _ => Err(UiError::InvalidKey(s.to_owned())),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountBuffer {
    digits: String,
    max_digits: usize,
}

impl Default for AmountBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl AmountBuffer {
    pub fn new(max_digits: usize) -> Self {
        Self {
            digits: String::with_capacity(max_digits),
            max_digits,
        }
    }

    /// Apply a key. Returns `false` when a digit was dropped because the
    /// buffer is full or the digit is outside `0..=9`.
    pub fn press(&mut self, key: NumpadKey) -> bool {
        match key {
            NumpadKey::Clear => self.digits.clear(),
            NumpadKey::Delete => {
                self.digits.pop();
            }
            NumpadKey::Digit(d) => {
                if d > 9 {
                    debug!(digit = d, "not a decimal digit, ignored");
                    return false;
                }
                if self.digits.len() >= self.max_digits {
                    debug!(len = self.digits.len(), "amount buffer full, digit ignored");
                    return false;
                }
                self.digits.push(char::from(b'0' + d));
            }
        }
        debug!(amount = %self.digits, "amount buffer updated");
        true
    }

    /// Parse `key` and apply it. Unknown keys leave the buffer untouched.
    pub fn press_str(&mut self, key: &str) -> Result<bool, UiError> {
        let key = key.parse::<NumpadKey>()?;
        Ok(self.press(key))
    }

    /// Raw digits, leading zeros included.
    pub fn raw(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn value(&self) -> u64 {
        // Digits only and bounded by the configured limit, so this cannot fail
        // for limits up to 18.
        self.digits.parse().unwrap_or(0)
    }

    /// Text for the amount display: grouped integer value, or `0` when empty.
    pub fn display(&self) -> String {
        if self.digits.is_empty() {
            "0".to_owned()
        } else {
            group_id_id(self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(buf: &mut AmountBuffer, keys: &[&str]) {
        for k in keys {
            buf.press_str(k).unwrap();
        }
    }

    #[test]
    fn parses_keys() {
        assert_eq!("7".parse::<NumpadKey>().unwrap(), NumpadKey::Digit(7));
        assert_eq!("C".parse::<NumpadKey>().unwrap(), NumpadKey::Clear);
        assert_eq!("DEL".parse::<NumpadKey>().unwrap(), NumpadKey::Delete);
        for bad in ["", "10", "x", "del", "c", "٣"] {
            assert_eq!(
                bad.parse::<NumpadKey>(),
                Err(UiError::InvalidKey(bad.to_owned()))
            );
        }
    }

    #[test]
    fn five_thousand_displays_grouped() {
        let mut buf = AmountBuffer::default();
        press_all(&mut buf, &["5", "0", "0", "0"]);
        assert_eq!(buf.display(), "5.000");
        assert_eq!(buf.raw(), "5000");
    }

    #[test]
    fn tenth_digit_is_ignored() {
        let mut buf = AmountBuffer::default();
        for _ in 0..9 {
            assert!(buf.press(NumpadKey::Digit(0)));
        }
        assert!(!buf.press(NumpadKey::Digit(1)));
        assert_eq!(buf.len(), 9);
        assert_eq!(buf.raw(), "000000000");
        assert_eq!(buf.display(), "0");
    }

    #[test]
    fn length_never_exceeds_limit() {
        let mut buf = AmountBuffer::default();
        let keys = ["1", "2", "DEL", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "C", "9"];
        for round in 0..5 {
            for k in keys.iter().cycle().skip(round).take(40) {
                buf.press_str(k).unwrap();
                assert!(buf.len() <= DEFAULT_MAX_DIGITS);
            }
        }
    }

    #[test]
    fn clear_always_resets() {
        let mut buf = AmountBuffer::default();
        press_all(&mut buf, &["9", "8", "7"]);
        buf.press(NumpadKey::Clear);
        assert!(buf.is_empty());
        assert_eq!(buf.display(), "0");
        buf.press(NumpadKey::Clear);
        assert_eq!(buf.display(), "0");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buf = AmountBuffer::default();
        assert!(buf.press(NumpadKey::Delete));
        assert!(buf.is_empty());
        press_all(&mut buf, &["4", "2", "DEL"]);
        assert_eq!(buf.raw(), "4");
    }

    #[test]
    fn leading_zeros_kept_in_raw_but_not_display() {
        let mut buf = AmountBuffer::default();
        press_all(&mut buf, &["0", "0", "7"]);
        assert_eq!(buf.raw(), "007");
        assert_eq!(buf.display(), "7");
    }

    #[test]
    fn display_matches_grouped_value() {
        let mut buf = AmountBuffer::default();
        press_all(&mut buf, &["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert_eq!(buf.display(), "123.456.789");
        assert_eq!(buf.display(), group_id_id(buf.raw().parse().unwrap()));
    }

    #[test]
    fn invalid_key_leaves_buffer_untouched() {
        let mut buf = AmountBuffer::default();
        press_all(&mut buf, &["1", "2"]);
        let err = buf.press_str("OK").unwrap_err();
        assert_eq!(err, UiError::InvalidKey("OK".to_owned()));
        assert_eq!(buf.raw(), "12");
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut buf = AmountBuffer::default();
        buf.press(NumpadKey::Digit(3));
        assert!(!buf.press(NumpadKey::Digit(42)));
        assert!(!buf.press(NumpadKey::Digit(10)));
        assert_eq!(buf.raw(), "3");
    }

    #[test]
    fn custom_limit() {
        let mut buf = AmountBuffer::new(3);
        press_all(&mut buf, &["1", "2", "3", "4"]);
        assert_eq!(buf.raw(), "123");
    }
}
