use std::time::Duration;

use angle_dial::chart::ViewportMode;
use angle_dial::error::LoadError;
use angle_dial::event::{Event, EventHandler};
use angle_dial::source::LoadMessage;
use angle_dial::{App, AppConfig, LoadState};
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Terminal;

fn test_app() -> App {
    let mut app = App::with_events(AppConfig::default(), EventHandler::detached());
    app.last_area = Rect::new(0, 0, 120, 40);
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    while let Some(event) = app.events.try_next() {
        if let Event::App(app_event) = event {
            app.handle_app_event(app_event);
        }
    }
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) -> bool {
    app.handle_mouse_event(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

async fn load_builtin(app: &mut App) {
    let message = tokio::time::timeout(Duration::from_secs(5), app.loader.recv())
        .await
        .expect("load timed out")
        .unwrap();
    app.handle_load_message(message);
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(app, frame.area()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_arrow_keys_step_the_dial() {
    let mut app = test_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.dial.angle(), 10.0);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.dial.angle(), 355.0);
}

#[tokio::test]
async fn test_manual_entry_through_keys() {
    let mut app = test_app();

    press(&mut app, KeyCode::Enter);
    assert!(app.dial.is_editing());
    type_text(&mut app, "370");
    press(&mut app, KeyCode::Enter);
    assert!(!app.dial.is_editing());
    assert_eq!(app.dial.angle(), 10.0);

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dial.angle(), 10.0);
}

#[tokio::test]
async fn test_escape_cancels_entry_without_quitting() {
    let mut app = test_app();

    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "90");
    press(&mut app, KeyCode::Esc);
    assert!(!app.dial.is_editing());
    assert_eq!(app.dial.angle(), 0.0);
    assert!(app.running);

    // 'q' while editing is text, not quit
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.running);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[tokio::test]
async fn test_ctrl_c_quits_even_while_editing() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
    while let Some(Event::App(app_event)) = app.events.try_next() {
        app.handle_app_event(app_event);
    }
    assert!(!app.running);
}

#[tokio::test]
async fn test_wheel_scroll_only_inside_wheel() {
    let mut app = test_app();
    let layout = app.layout();
    let (x, y) = (layout.wheel.x + 2, layout.wheel.y + 2);

    assert!(mouse(&mut app, MouseEventKind::ScrollDown, x, y));
    assert_eq!(app.dial.angle(), 5.0);
    assert!(mouse(&mut app, MouseEventKind::ScrollUp, x, y));
    assert!(mouse(&mut app, MouseEventKind::ScrollUp, x, y));
    assert_eq!(app.dial.angle(), 355.0);

    let chart = layout.chart;
    assert!(!mouse(&mut app, MouseEventKind::ScrollDown, chart.x + 5, chart.y + 5));
    assert_eq!(app.dial.angle(), 355.0);
}

#[tokio::test]
async fn test_drag_tracks_pointer_until_release() {
    let mut app = test_app();
    let layout = app.layout();
    let x = layout.wheel.x + 2;
    let start_row = layout.wheel.y + 10;

    assert!(mouse(&mut app, MouseEventKind::Down(MouseButton::Left), x, start_row));
    assert!(app.dial.is_dragging());

    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), x, start_row - 6);
    assert_eq!(app.dial.angle(), 3.0);

    // pointer may leave the wheel while dragging
    let outside = layout.chart.x + 10;
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), outside, start_row + 4);
    assert_eq!(app.dial.angle(), 358.0);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), outside, start_row);
    assert_eq!(app.dial.angle(), 0.0);

    assert!(mouse(&mut app, MouseEventKind::Up(MouseButton::Left), outside, start_row));
    assert!(!app.dial.is_dragging());

    assert!(!mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), x, 0));
    assert_eq!(app.dial.angle(), 0.0);
}

#[tokio::test]
async fn test_click_readout_edits_and_click_away_commits() {
    let mut app = test_app();
    let layout = app.layout();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), layout.readout.x + 3, layout.readout.y + 1);
    assert!(app.dial.is_editing());
    type_text(&mut app, "45");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), layout.chart.x + 3, layout.chart.y + 3);
    assert!(!app.dial.is_editing());
    assert_eq!(app.dial.angle(), 45.0);
}

#[tokio::test]
async fn test_loaded_samples_drive_current_acceleration() {
    let mut app = test_app();
    assert_eq!(app.load_state, LoadState::Loading);
    assert_eq!(app.current_acceleration(), 0.0);

    load_builtin(&mut app).await;
    assert_eq!(app.load_state.samples().len(), 37);

    app.dial.set_angle(92.0);
    assert_eq!(app.current_acceleration(), 10.0);
    app.dial.set_angle(268.0);
    assert_eq!(app.current_acceleration(), -10.0);
}

#[tokio::test]
async fn test_failed_load_is_shown_inline() {
    let mut app = test_app();
    app.handle_load_message(LoadMessage {
        generation: app.loader.generation(),
        result: Err(LoadError::Status(404)),
    });

    assert_eq!(app.load_state, LoadState::Failed("Request failed: 404".to_string()));
    assert!(render(&app).contains("Error: Request failed: 404"));
}

#[tokio::test]
async fn test_render_states() {
    let mut app = test_app();
    assert!(render(&app).contains("Loading"));

    load_builtin(&mut app).await;
    app.dial.set_angle(92.0);
    let screen = render(&app);
    assert!(screen.contains("Acceleration vs Angle (follow)"));
    assert!(screen.contains("Angle: 92°"));
    assert!(screen.contains("Acceleration: 10.00 m/s²"));

    app.handle_load_message(LoadMessage {
        generation: app.loader.generation(),
        result: Ok(Vec::new()),
    });
    assert!(render(&app).contains("No data"));
}

#[tokio::test]
async fn test_toggle_viewport_and_reload() {
    let mut app = test_app();
    load_builtin(&mut app).await;

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.viewport.mode, ViewportMode::Fit);
    assert!(render(&app).contains("Acceleration vs Angle (fit)"));

    let generation = app.loader.generation();
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.load_state, LoadState::Loading);
    assert_eq!(app.loader.generation(), generation + 1);

    load_builtin(&mut app).await;
    assert_eq!(app.load_state.samples().len(), 37);
}

#[tokio::test]
async fn test_footer_switches_to_entry_hints_while_editing() {
    let mut app = test_app();
    let screen = render(&app);
    assert!(screen.contains("Keys"));
    assert!(!screen.contains("Manual entry"));

    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Manual entry"));
    assert!(screen.contains("Type an angle"));
}

#[tokio::test]
async fn test_entry_with_degree_sign_is_accepted() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "45°");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dial.angle(), 45.0);
    assert!(render(&app).contains("Angle: 45°"));
}
