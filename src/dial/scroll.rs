use super::{AngleDial, ScrollDirection};

impl AngleDial {
    /// One wheel notch. Scrolling down moves forward by one step.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let delta = match direction {
            ScrollDirection::Down => self.step_size,
            ScrollDirection::Up => -self.step_size,
        };
        self.rotate_by(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_adds_step() {
        let mut dial = AngleDial::default();
        dial.scroll(ScrollDirection::Down);
        assert_eq!(dial.angle(), 5.0);
    }

    #[test]
    fn test_scroll_up_from_zero_wraps() {
        let mut dial = AngleDial::default();
        dial.scroll(ScrollDirection::Up);
        assert_eq!(dial.angle(), 355.0);
    }

    #[test]
    fn test_scroll_down_then_up_returns_to_start() {
        for step in [5.0, 0.1, 0.3, 7.7, 1.0 / 3.0] {
            for start in [0.0, 3.0, 180.0, 357.0] {
                for count in [1, 3, 7, 72, 100, 5000] {
                    let mut dial = AngleDial::new(start, step, 0.5);
                    for _ in 0..count {
                        dial.scroll(ScrollDirection::Down);
                    }
                    for _ in 0..count {
                        dial.scroll(ScrollDirection::Up);
                    }
                    assert_eq!(dial.angle(), start, "step={} start={} count={}", step, start, count);
                }
            }
        }
    }

    #[test]
    fn test_fractional_step_lands_on_exact_values() {
        let mut dial = AngleDial::new(0.0, 0.1, 0.5);
        for _ in 0..3 {
            dial.scroll(ScrollDirection::Down);
        }
        assert_eq!(dial.angle(), 0.3);
        for _ in 0..3 {
            dial.scroll(ScrollDirection::Up);
        }
        assert_eq!(dial.angle(), 0.0);
    }

    #[test]
    fn test_custom_step_size() {
        let mut dial = AngleDial::new(350.0, 15.0, 0.5);
        dial.scroll(ScrollDirection::Down);
        assert_eq!(dial.angle(), 5.0);
    }
}
