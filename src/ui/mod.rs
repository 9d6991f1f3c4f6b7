//! User interface rendering module
//!
//! Rendering is a pure function of `AppState`: `UiRenderer::render` reads the
//! state and the theme it was built with and draws a frame, nothing more.
//!
//! Layout, top to bottom:
//! - title bar
//! - bordered action list (title + description per entry)
//! - status line with the last action's outcome
//! - key hint line

mod menu;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const APP_TITLE: &str = "Sway & Wayland Setup for FreeBSD";
pub const KEY_HINT: &str = "Press q to quit, ↑/↓ to navigate, Enter to select an option";

/// Draws frames with a fixed theme
pub struct UiRenderer {
    theme: Theme,
    help_overlay: HelpOverlay,
}

impl UiRenderer {
    pub fn new(theme: Theme, keybinding_ctx: &KeybindingContext) -> Self {
        let help_overlay = HelpOverlay::new(keybinding_ctx, &theme);
        Self {
            theme,
            help_overlay,
        }
    }

    /// Draw the whole screen for `state`
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let area = f.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let [title_area, list_area, status_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", APP_TITLE),
            self.theme.title,
        )));
        f.render_widget(title, title_area);

        menu::render_action_list(f, state, list_area, &self.theme);

        if let Some(message) = &state.last_message {
            let status = Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(message.text.clone(), self.theme.status_style(message.kind)),
            ]));
            f.render_widget(status, status_area);
        }

        let hint = Paragraph::new(Line::from(Span::styled(
            format!(" {}", KEY_HINT),
            self.theme.hint,
        )));
        f.render_widget(hint, hint_area);

        if state.help_visible {
            self.help_overlay.render(f, area, &self.theme);
        }
    }
}
