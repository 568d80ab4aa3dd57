mod chart_panel;
mod dial_panel;

pub use chart_panel::render_chart_panel;
pub use dial_panel::render_dial_panel;
