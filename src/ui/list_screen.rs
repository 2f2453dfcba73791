//! List screen rendering
//!
//! The app's entry screen: title, add-city button, the entry field while
//! revealed, the selectable city list, and a hint footer.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::app::state::EntryState;
use crate::domain::city::CityList;
use crate::ui::layout::ListLayout;

/// Renders the list screen
///
/// # Arguments
/// * `cities` - Session city list, in display order
/// * `entry` - Entry control sub-state (drives the field's visibility)
/// * `cursor` - Highlighted row index
pub fn render(frame: &mut Frame, cities: &CityList, entry: &EntryState, cursor: usize) {
    let layout = ListLayout::new(frame.area(), entry.is_revealed());

    let title = Paragraph::new("citybook")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, layout.title);

    let add_button = Paragraph::new("[ Add City ]")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(add_button, layout.add_button);

    if let (EntryState::Revealed { draft }, Some(entry_area), Some(confirm_area)) =
        (entry, layout.entry, layout.confirm_button)
    {
        let field = Paragraph::new(draft.as_str()).block(
            Block::bordered()
                .title(" New city ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(field, entry_area);

        // Terminal cursor sits right after the draft, clamped to the field
        let text_end = entry_area.x + 1 + draft.chars().count() as u16;
        let cursor_x = text_end.min(entry_area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, entry_area.y + 1));

        let confirm_button = Paragraph::new("[ Confirm ]")
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(confirm_button, confirm_area);
    }

    let block = Block::bordered().title(" Cities ");
    if cities.is_empty() {
        let placeholder = Paragraph::new("No cities yet - press a or click [ Add City ]")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, layout.list);
    } else {
        let items: Vec<ListItem> = cities.iter().map(|city| ListItem::new(city.as_str())).collect();
        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default()
            .with_offset(layout.first_visible(cursor))
            .with_selected(Some(cursor));
        frame.render_stateful_widget(list, layout.list, &mut state);
    }

    let hints = if entry.is_revealed() {
        "[Enter] Confirm  [Esc] Cancel"
    } else {
        "[a] Add city  [Up/Down] Select  [Enter] Open  [q] Quit"
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}
