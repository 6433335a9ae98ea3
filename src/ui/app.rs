//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::widget_consts::{POLL_INTERVAL_MS, SPLASH_DURATION_MS};
use crate::ui::login::{LoginScreenState, render_login};
use crate::ui::splash::render_splash;
use crate::widget::{Clock, FailureSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub failure_injection: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, failure_injection: bool) -> Self {
        Self {
            with_background_color,
            failure_injection,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login screen with the form and metrics.
    Login,
}

/// Whether the UI loop should keep going after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// When the splash screen was first shown.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Login widget and its view state. Lives for the whole run.
    login: LoginScreenState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        ui_config: UIConfig,
        clock: Box<dyn Clock>,
        failure: Box<dyn FailureSource>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            login: LoginScreenState::new(&ui_config, clock, failure),
        }
    }

    #[allow(unused)]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    #[allow(unused)]
    pub fn login_state(&self) -> &LoginScreenState {
        &self.login
    }

    /// Leave the splash screen once its time is up.
    fn tick(&mut self) {
        if self.current_screen == Screen::Splash
            && self.start_time.elapsed() >= Duration::from_millis(SPLASH_DURATION_MS)
        {
            self.current_screen = Screen::Login;
        }
    }

    /// Handle one key press to completion.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            return KeyResult::Quit;
        }

        match self.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => self.current_screen = Screen::Login,
            Screen::Login => {
                self.login.handle_key(key);
            }
        }
        KeyResult::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == KeyResult::Quit {
                    log::debug!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Login => render_login(f, &app.login),
    }
}
