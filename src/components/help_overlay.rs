//! Help overlay component
//!
//! Lists the keybindings in a centered popup over the menu.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 60;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    pub fn new(keybinding_ctx: &KeybindingContext, theme: &Theme) -> Self {
        let sections = keybinding_ctx.get_help_content();
        Self {
            content: Self::build_content(&sections, theme),
        }
    }

    fn build_content(sections: &[HelpSection], theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                theme.success,
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        theme.base.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), theme.status),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("Press ? or Esc to close", theme.hint)));
        lines
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render centered within `parent`, clearing what is underneath
    pub fn render(&self, f: &mut Frame, parent: Rect, theme: &Theme) {
        let width = parent.width.clamp(MIN_WIDTH.min(parent.width), MAX_WIDTH);
        let height = (self.content.len() as u16 + 2).min(parent.height);
        let area = centered(parent, width, height);

        let popup = Paragraph::new(self.content.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Help "),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

/// A `width` x `height` rectangle centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
