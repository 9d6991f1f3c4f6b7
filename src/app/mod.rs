//! Application module
//!
//! Contains the main application struct and its event loop.
//!
//! # Module Structure
//! - `state` - `AppState`, the data the renderer draws
//! - Main module - `App`, key handling, and the blocking event loop

mod state;

pub use state::AppState;

use crate::actions::{self, ActionContext, SetupAction, StatusMessage};
use crate::command_runner::CommandRunner;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::SetupConfig;
use crate::error::Result;
use crate::process_guard::ProcessGuard;
use crate::theme::Theme;
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 5;

/// What the loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State may have changed; just redraw
    Continue,
    /// Run this action, then redraw
    Run(SetupAction),
    /// Leave the loop
    Quit,
}

/// Main application struct
pub struct App {
    state: AppState,
    config: SetupConfig,
    runner: CommandRunner,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// Terminates any still-running child when the App is dropped
    _process_guard: ProcessGuard,
}

impl App {
    /// Create a new application instance.
    ///
    /// `config` and `theme` are fixed for the lifetime of the App.
    pub fn new(config: SetupConfig, theme: Theme) -> Self {
        info!("Creating new App instance");
        let keybinding_context = KeybindingContext::new();
        let runner = CommandRunner::from_config(&config);
        debug!(
            "Command timeout {}s, dry run {}",
            runner.timeout().as_secs(),
            runner.is_dry_run()
        );

        Self {
            state: AppState::default(),
            ui_renderer: UiRenderer::new(theme, &keybinding_context),
            config,
            runner,
            keybinding_context,
            _process_guard: ProcessGuard::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    /// Apply a key press to the state.
    ///
    /// Never runs an action itself; `Enter` is reported as `Run` so the
    /// caller decides when to block.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> KeyOutcome {
        let Some(action) = self
            .keybinding_context
            .resolve(&key_event, self.state.help_visible)
        else {
            return KeyOutcome::Continue;
        };

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.quitting = true;
                return KeyOutcome::Quit;
            }
            KeyAction::NavigateUp => self.state.move_up(),
            KeyAction::NavigateDown => self.state.move_down(),
            KeyAction::PageUp => self.state.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.state.page_down(PAGE_SIZE),
            KeyAction::Home => self.state.move_to_first(),
            KeyAction::End => self.state.move_to_last(),
            KeyAction::Help | KeyAction::Dismiss => self.state.toggle_help(),
            KeyAction::Select => {
                if let Some(selected) = self.state.selected_action() {
                    return KeyOutcome::Run(selected);
                }
            }
        }
        KeyOutcome::Continue
    }

    /// Run `action` synchronously and show its outcome
    pub fn execute(&mut self, action: SetupAction) -> &StatusMessage {
        let ctx = ActionContext::new(&self.config, &self.runner);
        let message = actions::dispatch(action, &ctx);
        self.state.last_message.insert(message)
    }

    /// Run the main loop until the user quits.
    ///
    /// Blocks on terminal input between frames. Actions block the loop for
    /// at most the command timeout per external command.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.quitting {
            self.draw(terminal)?;

            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let KeyOutcome::Run(action) = self.handle_key_event(key_event) {
                        self.state.last_message =
                            Some(StatusMessage::pending(format!("Running {}...", action)));
                        self.draw(terminal)?;
                        self.execute(action);
                    }
                }
                Event::Resize(width, height) => {
                    // Layout follows the frame size on the next draw
                    debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        Ok(())
    }
}
