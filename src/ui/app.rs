//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::controller::DashboardController;
use crate::events::{Event as DashboardEvent, Origin};
use crate::scheduler::RefreshTimer;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with signal and news cards.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Owner of the dashboard data.
    controller: DashboardController,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives activity events from the refresh pipeline.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Broadcasts shutdown to the rest of the session.
    shutdown_sender: broadcast::Sender<()>,

    ui_config: UIConfig,

    /// Held while the dashboard is active; dropping it stops the ticks.
    refresh_timer: Option<RefreshTimer>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            controller,
            current_screen: Screen::Splash,
            event_receiver,
            shutdown_sender,
            ui_config,
            refresh_timer: None,
        }
    }

    /// Switches to the dashboard and starts the refresh timer.
    fn activate_dashboard(&mut self) {
        let state = DashboardState::new(
            self.controller.environment().clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        self.current_screen = Screen::Dashboard(Box::new(state));
        self.refresh_timer = Some(RefreshTimer::start(
            self.controller.clone(),
            self.ui_config.refresh_interval,
        ));
    }

    /// Stops the timer and tells the session to wind down.
    fn shutdown(&mut self) {
        if let Some(timer) = self.refresh_timer.take() {
            timer.cancel();
        }
        let _ = self.shutdown_sender.send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = run_loop(terminal, &mut app).await;
    // The timer must not outlive the view, whichever way the loop ended.
    app.shutdown();
    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    // UI event loop
    loop {
        // Another part of the session asked us to stop
        if shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        // Drain activity events
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            let data = app.controller.snapshot().await;
            state.update(data, app.controller.is_loading());
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.activate_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events; raw mode delivers Ctrl+C as a key
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                // Any key press will skip the splash screen
                if let Screen::Splash = app.current_screen {
                    app.activate_dashboard();
                    continue;
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    match key.code {
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            app.controller.spawn_refresh(Origin::Manual);
                        }
                        KeyCode::Down => state.scroll_news_down(),
                        KeyCode::Up => state.scroll_news_up(),
                        KeyCode::PageDown => state.scroll_signals_down(),
                        KeyCode::PageUp => state.scroll_signals_up(),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
