use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    pub fn status<'a>(title: &'a str, line: Line<'a>) -> Paragraph<'a> {
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::LightBlue))
                    .title(format!(" {} ", title))
            )
            .alignment(Alignment::Center)
    }
}
