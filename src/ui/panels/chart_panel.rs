use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::app::{App, LoadState};
use crate::chart::{format_number, ticks, ViewportMode, DEFAULT_TICK_COUNT};
use crate::samples::{is_selected, Sample};
use crate::ui::components::UiComponent;
use crate::ui::AppLayout;

pub fn render_chart_panel(app: &App, layout: &AppLayout, buf: &mut Buffer) {
    match &app.load_state {
        LoadState::Loading => {
            let source = app.loader.source().describe();
            UiComponent::loading(&source).render(layout.chart, buf);
        }
        LoadState::Failed(message) => {
            UiComponent::error_message(message).render(layout.chart, buf);
        }
        LoadState::Ready(samples) if samples.is_empty() => {
            UiComponent::empty_message("Acceleration vs Angle", "No data", layout.chart, buf);
        }
        LoadState::Ready(samples) => render_chart(app, samples, layout.chart, buf),
    }

    render_selection(app, layout.selection, buf);
}

fn render_chart(app: &App, samples: &[Sample], area: Rect, buf: &mut Buffer) {
    let angle = app.dial.angle();
    let tolerance = app.config.lookup_tolerance;
    let bounds = app.viewport.bounds(samples, angle);

    let line_points: Vec<(f64, f64)> = samples.iter().map(Sample::as_point).collect();
    let selected_points: Vec<(f64, f64)> = samples
        .iter()
        .filter(|sample| is_selected(sample, angle, tolerance))
        .map(Sample::as_point)
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Angle")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&line_points),
        Dataset::default()
            .name("Selected")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&selected_points),
    ];

    let x_labels: Vec<String> = ticks(bounds.acceleration, DEFAULT_TICK_COUNT)
        .into_iter()
        .map(format_number)
        .collect();
    let x_axis = Axis::default()
        .title("Acceleration (m/s²)")
        .style(Style::default().fg(Color::Gray))
        .labels(x_labels)
        .bounds(bounds.acceleration);

    let y_labels: Vec<String> = ticks(bounds.angle, DEFAULT_TICK_COUNT)
        .into_iter()
        .map(format_number)
        .collect();
    let y_axis = Axis::default()
        .title("Angle (°)")
        .style(Style::default().fg(Color::Gray))
        .labels(y_labels)
        .bounds(bounds.angle);

    let mode = match app.viewport.mode {
        ViewportMode::Follow => "follow",
        ViewportMode::Fit => "fit",
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" Acceleration vs Angle ({}) ", mode))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    Widget::render(chart, area, buf);
}

fn render_selection(app: &App, area: Rect, buf: &mut Buffer) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let value = Style::default().fg(Color::LightBlue);
    let line = Line::from(vec![
        Span::styled("Angle: ", label),
        Span::styled(format!("{}°", app.dial.angle_label()), value),
        Span::raw(" | "),
        Span::styled("Acceleration: ", label),
        Span::styled(
            format!("{:.2} {}", app.current_acceleration(), app.config.dial.value_unit),
            value,
        ),
    ]);

    UiComponent::status("Current Selection", line).render(area, buf);
}
