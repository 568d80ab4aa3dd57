use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::App;
use crate::chart::LinearScale;
use crate::dial::{format_angle, AngleMark, MARK_SPACING};
use crate::ui::AppLayout;

/// Marks further than this from the center are dimmed.
const FADE_DISTANCE: f64 = 60.0;

pub fn render_dial_panel(app: &App, layout: &AppLayout, buf: &mut Buffer) {
    let border_color = if app.dial.is_dragging() { Color::LightBlue } else { Color::Gray };
    Block::bordered()
        .title(format!(" {} ", app.config.dial.title))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .render(layout.dial, buf);

    render_readout(app, layout.readout, buf);
    render_wheel(app, layout.wheel, buf);

    if app.config.dial.show_instructions && layout.instructions.height > 0 {
        Paragraph::new("Scroll, drag, or click angle to edit manually")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .render(layout.instructions, buf);
    }
}

fn render_readout(app: &App, area: Rect, buf: &mut Buffer) {
    let angle_line = match app.dial.edit_text() {
        Some(text) => Line::from(vec![
            Span::styled(text.to_string(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("▏", Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK)),
        ]),
        None => Line::from(Span::styled(
            format!("{}°", app.dial.angle_label()),
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        )),
    };

    let dial_config = &app.config.dial;
    let value_line = Line::from(Span::styled(
        format!(
            "{}: {:.2} {}",
            dial_config.value_label,
            app.current_acceleration(),
            dial_config.value_unit
        ),
        Style::default().fg(Color::Gray),
    ));

    let border_color = if app.dial.is_editing() { Color::Yellow } else { Color::Blue };
    Paragraph::new(vec![angle_line, value_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_wheel(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // One mark per row, current angle on the center row
    let center_row = inner.top() + inner.height / 2;
    let center = f64::from(center_row);
    let half_rows = f64::from(inner.height) / 2.0;
    let scale = LinearScale::new(
        (-half_rows * MARK_SPACING, half_rows * MARK_SPACING),
        (center - half_rows, center + half_rows),
    );

    for mark in app.dial.marks(usize::from(inner.height) + 2) {
        let Some(row) = scale.project_cell(mark.offset) else {
            continue;
        };
        if row < inner.top() || row >= inner.bottom() || row == center_row {
            continue;
        }
        let line = mark_line(&mark);
        buf.set_line(inner.x + 1, row, &line, inner.width.saturating_sub(2));
    }

    let indicator_style = Style::default().fg(Color::Black).bg(Color::LightBlue).add_modifier(Modifier::BOLD);
    let label = format!(" ▶ {}° ", format_angle(app.dial.angle()));
    buf.set_style(Rect::new(inner.x, center_row, inner.width, 1), indicator_style);
    buf.set_string(inner.x, center_row, label, indicator_style);
    buf.set_string(inner.right().saturating_sub(2), center_row, "◀", indicator_style);
}

fn mark_line(mark: &AngleMark) -> Line<'static> {
    let faded = mark.offset.abs() > FADE_DISTANCE;
    let (tick, style) = if mark.is_major {
        ("━━━ ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    } else {
        ("──  ", Style::default().fg(Color::Gray))
    };
    let style = if faded { style.fg(Color::DarkGray) } else { style };

    Line::from(vec![
        Span::styled(tick, style),
        Span::styled(format!("{}°", format_angle(mark.angle)), style),
    ])
}
