use tracing::debug;

use super::{AngleDial, EditBuffer};

impl AngleDial {
    /// Opens the entry field seeded with the current angle.
    pub fn begin_edit(&mut self) {
        if self.edit.is_none() {
            self.edit = Some(EditBuffer {
                text: self.angle_label(),
                pristine: true,
            });
        }
    }

    pub fn input_char(&mut self, ch: char) {
        if let Some(edit) = self.edit.as_mut() {
            if edit.pristine {
                edit.text.clear();
                edit.pristine = false;
            }
            edit.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(edit) = self.edit.as_mut() {
            if edit.pristine {
                edit.text.clear();
                edit.pristine = false;
            } else {
                edit.text.pop();
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Commits the typed value. Unparseable input reverts to the last valid angle.
    /// Returns whether the angle was taken from the entry.
    pub fn submit_edit(&mut self) -> bool {
        let Some(edit) = self.edit.take() else {
            return false;
        };

        match parse_angle(&edit.text) {
            Some(value) => {
                self.set_angle(value.round());
                true
            }
            None => {
                debug!("Rejected angle entry {:?}, keeping {}", edit.text, self.angle);
                false
            }
        }
    }
}

/// Reads the longest leading number, so "45°" and "90deg" are accepted.
fn parse_angle(text: &str) -> Option<f64> {
    let text = text.trim_start();
    text[..numeric_prefix_len(text)]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Byte length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of `text`.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    end
}
