use crate::chart::Viewport;
use crate::config::AppConfig;
use crate::dial::{AngleDial, ScrollDirection};
use crate::event::{AppEvent, Event, EventHandler};
use crate::samples::{nearest_acceleration, Sample};
use crate::source::{DataSource, LoadMessage, SampleLoader};
use crate::ui::AppLayout;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::{Position, Rect},
};
use color_eyre::Result;
use tracing::{debug, info, warn};

/// What the chart panel can show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<Sample>),
    Failed(String),
}

impl LoadState {
    pub fn samples(&self) -> &[Sample] {
        match self {
            LoadState::Ready(samples) => samples,
            _ => &[],
        }
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: AppConfig,
    pub dial: AngleDial,
    pub viewport: Viewport,
    pub load_state: LoadState,
    pub loader: SampleLoader,
    /// Event handler.
    pub events: EventHandler,
    /// Terminal area of the last draw, used for mouse hit-testing.
    pub last_area: Rect,
}

impl App {
    /// Constructs a new instance of [`App`] reading from the terminal.
    pub fn new(config: AppConfig) -> Self {
        Self::with_events(config, EventHandler::new())
    }

    /// Starts the first sample load. Must be called from within a tokio runtime.
    pub fn with_events(config: AppConfig, events: EventHandler) -> Self {
        let mut loader = SampleLoader::new(DataSource::from(&config.source));
        loader.start();

        Self {
            running: true,
            dial: config.build_dial(),
            viewport: config.viewport(),
            load_state: LoadState::Loading,
            loader,
            events,
            last_area: Rect::default(),
            config,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                let completed = terminal.draw(|frame| {
                    frame.render_widget(&self, frame.area());
                })?;
                self.last_area = completed.area;

                // save power
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    needs_redraw = match event? {
                        Event::Tick => false,
                        Event::Crossterm(event) => match event {
                            crossterm::event::Event::Key(key_event) => {
                                self.handle_key_events(key_event)?;
                                true
                            }
                            crossterm::event::Event::Mouse(mouse_event) => {
                                self.handle_mouse_event(mouse_event)
                            }
                            crossterm::event::Event::Resize(_, _) => true,
                            _ => false,
                        },
                        Event::App(app_event) => {
                            self.handle_app_event(app_event);
                            true
                        }
                    };
                }
                Some(message) = self.loader.recv() => {
                    self.handle_load_message(message);
                    needs_redraw = true;
                }
            }
        }

        self.loader.cancel();
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        // Manual entry owns the keyboard until submitted or cancelled
        if self.dial.is_editing() {
            match key_event.code {
                KeyCode::Enter | KeyCode::Tab => self.submit_edit(),
                KeyCode::Esc => self.dial.cancel_edit(),
                KeyCode::Backspace => self.dial.backspace(),
                KeyCode::Char(ch) => self.dial.input_char(ch),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::Step(ScrollDirection::Up)),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::Step(ScrollDirection::Down)),
            KeyCode::Enter | KeyCode::Char('e') => self.events.send(AppEvent::BeginEdit),
            KeyCode::Char('f') => self.events.send(AppEvent::ToggleViewport),
            KeyCode::Char('r') => self.events.send(AppEvent::Reload),
            _ => {}
        }
        Ok(())
    }

    /// Returns whether the event changed anything on screen.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        let layout = self.layout();
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollDown if layout.wheel.contains(position) => {
                self.dial.scroll(ScrollDirection::Down);
                true
            }
            MouseEventKind::ScrollUp if layout.wheel.contains(position) => {
                self.dial.scroll(ScrollDirection::Up);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.readout.contains(position) {
                    self.dial.begin_edit();
                    return true;
                }

                // Clicking away from the entry field commits it
                let was_editing = self.dial.is_editing();
                if was_editing {
                    self.submit_edit();
                }

                if layout.wheel.contains(position) {
                    self.dial.begin_drag(mouse.row);
                    return true;
                }
                was_editing
            }
            // Drag and release are tracked anywhere on screen once a drag has begun
            MouseEventKind::Drag(MouseButton::Left) => self.dial.drag_to(mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.dial.end_drag(),
            _ => false,
        }
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Step(direction) => self.dial.scroll(direction),
            AppEvent::BeginEdit => self.dial.begin_edit(),
            AppEvent::ToggleViewport => {
                self.viewport.toggle();
                debug!("Chart viewport is now {:?}", self.viewport.mode);
            }
            AppEvent::Reload => self.reload(),
            AppEvent::Quit => self.quit(),
        }
    }

    pub fn handle_load_message(&mut self, message: LoadMessage) {
        self.load_state = match message.result {
            Ok(samples) => {
                info!("Loaded {} samples (generation {})", samples.len(), message.generation);
                LoadState::Ready(samples)
            }
            Err(e) => {
                warn!("Sample load failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn submit_edit(&mut self) {
        if self.dial.submit_edit() {
            debug!("Angle entered manually: {}", self.dial.angle_label());
        }
    }

    pub fn reload(&mut self) {
        self.load_state = LoadState::Loading;
        self.loader.start();
    }

    /// Acceleration shown next to the dial.
    pub fn current_acceleration(&self) -> f64 {
        nearest_acceleration(
            self.load_state.samples(),
            self.dial.angle(),
            self.config.lookup_tolerance,
        )
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::new(self.last_area, self.config.dial.show_instructions)
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.dial.end_drag();
        self.running = false;
    }
}
