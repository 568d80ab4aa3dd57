// src/dial/mod.rs
mod normalize;
mod scroll;
mod drag;
mod entry;
mod marks;

pub use normalize::{normalize_angle, FULL_TURN};
pub use marks::{AngleMark, MARK_SPACING};

pub const DEFAULT_STEP_SIZE: f64 = 5.0;
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.5;

/// Subdivisions per degree that gesture results are rounded to.
const ANGLE_GRID: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    last_row: u16,
}

/// Text typed into the readout. The seeded text is replaced by the first keystroke.
#[derive(Debug, Clone)]
struct EditBuffer {
    text: String,
    pristine: bool,
}

/// Gesture-driven angle selector.
/// Every mutation goes through [`normalize_angle`], so the angle stays in [0, 360).
#[derive(Debug, Clone)]
pub struct AngleDial {
    angle: f64,
    step_size: f64,
    drag_sensitivity: f64,
    drag: Option<DragState>,
    edit: Option<EditBuffer>,
}

impl AngleDial {
    pub fn new(initial_angle: f64, step_size: f64, drag_sensitivity: f64) -> Self {
        Self {
            angle: normalize_angle(initial_angle),
            step_size,
            drag_sensitivity,
            drag: None,
            edit: None,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, value: f64) {
        self.angle = normalize_angle(value);
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Current contents of the manual entry field, if editing.
    pub fn edit_text(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.text.as_str())
    }

    pub fn angle_label(&self) -> String {
        format_angle(self.angle)
    }

    /// Lands on the nanodegree grid so that opposite moves cancel exactly,
    /// whatever the step or sensitivity.
    fn rotate_by(&mut self, delta: f64) {
        let wrapped = normalize_angle(self.angle + delta);
        self.angle = normalize_angle((wrapped * ANGLE_GRID).round() / ANGLE_GRID);
    }
}

impl Default for AngleDial {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_STEP_SIZE, DEFAULT_DRAG_SENSITIVITY)
    }
}

/// Whole degrees print without decimals, fractional drag positions keep one.
/// Values that round up to a full turn print as 0.
pub fn format_angle(angle: f64) -> String {
    let rounded = normalize_angle((angle * 10.0).round() / 10.0);
    if rounded.fract().abs() < 1e-9 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_initial_angle() {
        assert_eq!(AngleDial::new(-30.0, 5.0, 0.5).angle(), 330.0);
        assert_eq!(AngleDial::new(725.0, 5.0, 0.5).angle(), 5.0);
    }

    #[test]
    fn test_set_angle_normalizes() {
        let mut dial = AngleDial::default();
        dial.set_angle(360.0);
        assert_eq!(dial.angle(), 0.0);
        dial.set_angle(-1.0);
        assert_eq!(dial.angle(), 359.0);
    }

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(10.0), "10");
        assert_eq!(format_angle(10.5), "10.5");
        assert_eq!(format_angle(0.0), "0");
        assert_eq!(format_angle(12.96), "13");
    }

    #[test]
    fn test_format_angle_near_full_turn_reads_zero() {
        assert_eq!(format_angle(359.96), "0");
        assert_eq!(format_angle(359.94), "359.9");

        let mut dial = AngleDial::new(0.0, 5.0, 0.01);
        dial.begin_drag(0);
        dial.drag_to(4);
        assert_eq!(dial.angle(), 359.96);
        assert_eq!(dial.angle_label(), "0");
    }
}
