use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    pub fn error_message(message: &str) -> Paragraph<'static> {
        Paragraph::new(format!("Error: {}", message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Acceleration vs Angle ")
                    .padding(Padding::symmetric(1, 1))
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
