//! Screen rendering
//!
//! One render function per screen plus the shared layout geometry used by
//! both drawing and mouse hit-testing.

pub mod detail_screen;
pub mod layout;
pub mod list_screen;

use ratatui::Frame;

use crate::app::controller::AppController;
use crate::app::state::Screen;

/// Renders whichever screen the controller is currently showing
pub fn render(frame: &mut Frame, app: &AppController) {
    match app.screen() {
        Screen::List { entry } => list_screen::render(frame, app.city_list(), entry, app.cursor()),
        Screen::Detail { city } => detail_screen::render(frame, city),
    }
}
