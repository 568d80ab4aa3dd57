use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

const DIAL_PANEL_WIDTH: u16 = 32;
const READOUT_HEIGHT: u16 = 4;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub dial: Rect,
    /// Angle readout; clicking it opens manual entry.
    pub readout: Rect,
    /// Scroll and drag target.
    pub wheel: Rect,
    pub instructions: Rect,
    pub chart: Rect,
    pub selection: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_instructions: bool) -> Self {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(DIAL_PANEL_WIDTH),
                Constraint::Min(1),
            ])
            .split(main_layout[1]);

        let dial = content_layout[0];
        let instructions_height = if show_instructions { 2 } else { 0 };
        let dial_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(READOUT_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(instructions_height),
            ])
            .split(dial.inner(Margin::new(1, 1)));

        let chart_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(content_layout[1]);

        Self {
            header: main_layout[0],
            dial,
            readout: dial_layout[0],
            wheel: dial_layout[1],
            instructions: dial_layout[2],
            chart: chart_layout[0],
            selection: chart_layout[1],
            footer: main_layout[2],
        }
    }
}
