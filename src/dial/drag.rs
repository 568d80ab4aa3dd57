use super::{AngleDial, DragState};

impl AngleDial {
    pub fn begin_drag(&mut self, row: u16) {
        self.drag = Some(DragState { last_row: row });
    }

    /// Applies the movement since the last pointer row. Returns false when no drag is active.
    pub fn drag_to(&mut self, row: u16) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };

        // Moving the pointer up (smaller row) increases the angle
        let delta = (f64::from(drag.last_row) - f64::from(row)) * self.drag_sensitivity;
        drag.last_row = row;

        self.rotate_by(delta);
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
