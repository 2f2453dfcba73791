//! Detail screen rendering
//!
//! Shows exactly the city name carried in the navigation payload, plus a
//! back button.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::domain::city::CityName;
use crate::ui::layout::DetailLayout;

/// Renders the detail screen for one city
pub fn render(frame: &mut Frame, city: &CityName) {
    let layout = DetailLayout::new(frame.area());

    let title = Paragraph::new("citybook")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, layout.title);

    let name = Paragraph::new(city.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::bordered()
                .title(" City ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(name, layout.name);

    let back_button = Paragraph::new("[ Back ]")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(back_button, layout.back_button);

    let footer = Paragraph::new("[Esc/b] Back  [q] Quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}
