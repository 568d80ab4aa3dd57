use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    prelude::{Buffer, Color, Style, Stylize, Widget},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Framed placeholder for a panel with nothing to plot, message centered vertically.
    pub fn empty_message(title: &str, text: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(format!(" {} ", title));
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(middle, buf);
    }
}
