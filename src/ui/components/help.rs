use ratatui::{
    layout::Alignment,
    prelude::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Footer key hints. While the angle is being typed the hints switch to the entry keys.
    pub fn help(text: &str, editing: bool) -> Paragraph<'_> {
        let (color, border_type) = if editing {
            (Color::Yellow, BorderType::Thick)
        } else {
            (Color::DarkGray, BorderType::Rounded)
        };

        let mut style = Style::default().fg(color);
        if editing {
            style = style.add_modifier(Modifier::BOLD);
        }

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(Style::default().fg(color))
                    .title(if editing { " Manual entry " } else { " Keys " })
            )
            .style(style)
            .alignment(Alignment::Center)
    }
}
