//! Action list rendering

use crate::app::AppState;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub const LIST_TITLE: &str = "Choose an action";

/// Render the action list, scrolled so the selection is visible
pub fn render_action_list(f: &mut Frame, state: &AppState, area: Rect, theme: &Theme) {
    let items: Vec<ListItem> = state
        .items
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let selected = index == state.selected;
            let marker = if selected { "▸ " } else { "  " };
            let description_style = if selected {
                theme.list_selected
            } else {
                theme.list_description
            };
            ListItem::new(vec![
                Line::from(Span::raw(format!("{}{}", marker, action.title()))),
                Line::from(Span::styled(
                    format!("    {}", action.description()),
                    description_style,
                )),
            ])
            .style(theme.list_item)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(format!(" {} ", LIST_TITLE))
                .title_style(theme.base),
        )
        .highlight_style(theme.list_selected);

    // Rebuilt per frame so rendering never mutates AppState
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
