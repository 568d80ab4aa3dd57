pub mod components;
pub mod layout;
pub mod panels;

pub use layout::AppLayout;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use crate::app::App;
use crate::ui::components::UiComponent;
use crate::ui::panels::{render_chart_panel, render_dial_panel};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = AppLayout::new(area, self.config.dial.show_instructions);

        Paragraph::new("Use the angle wheel to explore acceleration values at different angles")
            .block(
                Block::bordered()
                    .title(" Acceleration vs Angle Analysis ".bold())
                    .title_alignment(Alignment::Center)
                    .border_type(BorderType::Rounded),
            )
            .fg(Color::Gray)
            .alignment(Alignment::Center)
            .render(layout.header, buf);

        render_dial_panel(self, &layout, buf);
        render_chart_panel(self, &layout, buf);

        let help = if self.dial.is_editing() {
            "Type an angle · Enter apply · Esc cancel".to_string()
        } else {
            format!(
                "↑/↓ or wheel ±{}° · drag wheel · Enter edit · f fit/follow · r reload · q quit · data: {}",
                crate::dial::format_angle(self.dial.step_size()),
                self.loader.source().describe()
            )
        };
        UiComponent::help(&help, self.dial.is_editing()).render(layout.footer, buf);
    }
}
