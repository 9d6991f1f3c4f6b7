//! Centralized theme and styling for the TUI
//!
//! Colors live in `Colors`; `Theme` bundles the styles the renderer needs.
//! A `Theme` is built once at startup and handed to every render call, so
//! there is no global style state.
//!
//! # Usage
//! ```rust
//! use swaysetup::theme::{Colors, Theme};
//!
//! let theme = Theme::default();
//! assert_eq!(theme.error.fg, Some(Colors::ERROR));
//! ```

use crate::actions::StatusKind;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette (xterm 256-color indices)
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::Indexed(249);

    /// Status line text
    pub const FG_STATUS: Color = Color::Indexed(255);

    /// Key hints and other muted text
    pub const FG_MUTED: Color = Color::Indexed(244);

    // -------------------------------------------------------------------------
    // Title bar
    // -------------------------------------------------------------------------

    pub const TITLE_FG: Color = Color::Indexed(117);
    pub const TITLE_BG: Color = Color::Indexed(236);

    // -------------------------------------------------------------------------
    // List
    // -------------------------------------------------------------------------

    /// Unselected list item
    pub const ITEM: Color = Color::Indexed(250);

    /// Unselected item description
    pub const ITEM_DESC: Color = Color::Indexed(243);

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Indexed(32);

    /// Selected item text (for contrast on blue bg)
    pub const SELECTED_FG: Color = Color::Indexed(230);

    /// Active border color
    pub const BORDER: Color = Color::Indexed(240);

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Indexed(41);
    pub const ERROR: Color = Color::Indexed(203);
    pub const PENDING: Color = Color::Indexed(221);
}

// =============================================================================
// THEME
// =============================================================================

/// Immutable set of styles used by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub base: Style,
    pub title: Style,
    pub status: Style,
    pub hint: Style,
    pub success: Style,
    pub error: Style,
    pub pending: Style,
    pub list_item: Style,
    pub list_description: Style,
    pub list_selected: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Style::default().fg(Colors::FG_PRIMARY),
            title: Style::default()
                .fg(Colors::TITLE_FG)
                .bg(Colors::TITLE_BG)
                .add_modifier(Modifier::BOLD),
            status: Style::default().fg(Colors::FG_STATUS),
            hint: Style::default().fg(Colors::FG_MUTED),
            success: Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
            pending: Style::default().fg(Colors::PENDING),
            list_item: Style::default().fg(Colors::ITEM),
            list_description: Style::default().fg(Colors::ITEM_DESC),
            list_selected: Style::default()
                .bg(Colors::SELECTED_BG)
                .fg(Colors::SELECTED_FG)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Colors::BORDER),
        }
    }
}

impl Theme {
    /// Style for a status line of the given kind
    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Success => self.success,
            StatusKind::Failure => self.error,
            StatusKind::Pending => self.pending,
        }
    }
}
