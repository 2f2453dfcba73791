//! Application controller and coordination layer
//!
//! The controller orchestrates between input, domain, and UI layers. It
//! owns the stable session state (the city list and the list cursor) and
//! routes events through the screen state machine. Transient screen state
//! lives in the state machine itself.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::{EntryState, Screen, ScreenEvent, StateMachine};
use crate::domain::city::{CityList, CityName};
use crate::input::keymap::{self, Action};
use crate::ui::layout::{DetailHit, DetailLayout, ListHit, ListLayout};

/// Main application controller
///
/// Holds the city list for the whole session and the current screen.
/// The list is injected nowhere else; screens receive it by reference
/// at render time.
#[derive(Debug, Default)]
pub struct AppController {
    /// Session city list, append-only
    city_list: CityList,
    /// Current screen state
    screen: Screen,
    /// Highlighted list row; stable across navigation
    cursor: usize,
    /// Set when the user asks to leave
    should_quit: bool,
}

impl AppController {
    /// Creates a controller with an empty city list on the list screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session city list
    pub fn city_list(&self) -> &CityList {
        &self.city_list
    }

    /// Returns the current screen state
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the highlighted list row
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Checks whether the user asked to leave
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs one event through the screen state machine
    fn process_event(&mut self, event: ScreenEvent) {
        self.screen = StateMachine::process_event(self.screen.clone(), event);
    }

    /// Reveals the entry field
    ///
    /// Ignored unless the list screen is showing with the entry hidden.
    pub fn activate_entry(&mut self) {
        self.process_event(ScreenEvent::EntryActivated);
    }

    /// Confirms the current draft
    ///
    /// A valid draft is appended at the end of the list, the highlight
    /// moves to the new row, and the entry control returns to hidden. An
    /// empty or whitespace-only draft is rejected: the list is unchanged
    /// and the field stays visible so the user can keep typing.
    pub fn confirm_entry(&mut self) {
        let Screen::List {
            entry: EntryState::Revealed { draft },
        } = &self.screen
        else {
            return;
        };

        if let Ok(name) = CityName::new(draft.clone()) {
            self.city_list.push(name);
            self.cursor = self.city_list.len() - 1;
            self.process_event(ScreenEvent::EntryConfirmed);
        }
    }

    /// Dismisses the entry field without appending
    pub fn cancel_entry(&mut self) {
        self.process_event(ScreenEvent::EntryCancelled);
    }

    /// Appends one character to the draft
    pub fn entry_input(&mut self, ch: char) {
        if let Screen::List {
            entry: EntryState::Revealed { draft },
        } = &mut self.screen
        {
            draft.push(ch);
        }
    }

    /// Deletes the last draft character
    pub fn entry_backspace(&mut self) {
        if let Screen::List {
            entry: EntryState::Revealed { draft },
        } = &mut self.screen
        {
            draft.pop();
        }
    }

    /// Opens the detail screen for the city at `index`
    ///
    /// The name is cloned out of the list into the navigation payload.
    /// Out-of-range indices cannot be produced through the UI (cursor
    /// movement and click hit-testing are both bounds-checked) and are
    /// ignored.
    pub fn select_city(&mut self, index: usize) {
        let Some(city) = self.city_list.get(index) else {
            return;
        };
        let city = city.clone();
        self.cursor = index;
        self.process_event(ScreenEvent::CityOpened(city));
    }

    /// Opens the detail screen for the highlighted row
    pub fn open_selected(&mut self) {
        self.select_city(self.cursor);
    }

    /// Returns from the detail screen to the list screen
    ///
    /// The list is untouched and the entry control comes back hidden.
    pub fn go_back(&mut self) {
        self.process_event(ScreenEvent::WentBack);
    }

    /// Moves the list highlight up one row
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the list highlight down one row
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.city_list.len() {
            self.cursor += 1;
        }
    }

    /// Applies one semantic action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ActivateEntry => self.activate_entry(),
            Action::ConfirmEntry => self.confirm_entry(),
            Action::CancelEntry => self.cancel_entry(),
            Action::EntryInput(ch) => self.entry_input(ch),
            Action::EntryBackspace => self.entry_backspace(),
            Action::CursorUp => self.cursor_up(),
            Action::CursorDown => self.cursor_down(),
            Action::OpenSelected => self.open_selected(),
            Action::OpenRow(index) => self.select_city(index),
            Action::GoBack => self.go_back(),
        }
    }

    /// Handles a raw key event
    ///
    /// Shared by the live event loop and the instrumented tests, so both
    /// exercise exactly the same path. Only key presses are processed;
    /// repeats and releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = keymap::action_for(&self.screen, key) {
            self.apply(action);
        }
    }

    /// Handles a raw mouse event against the screen area `area`
    ///
    /// Hit-testing uses the same layout rectangles the renderer draws
    /// into. Only left-button presses are taps; everything else is
    /// ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let action = match &self.screen {
            Screen::List { entry } => {
                let layout = ListLayout::new(area, entry.is_revealed());
                match layout.hit(mouse.column, mouse.row, self.city_list.len(), self.cursor) {
                    Some(ListHit::AddButton) => Some(Action::ActivateEntry),
                    Some(ListHit::ConfirmButton) => Some(Action::ConfirmEntry),
                    Some(ListHit::Row(index)) => Some(Action::OpenRow(index)),
                    Some(ListHit::Entry) | None => None,
                }
            }
            Screen::Detail { .. } => {
                let layout = DetailLayout::new(area);
                match layout.hit(mouse.column, mouse.row) {
                    Some(DetailHit::BackButton) => Some(Action::GoBack),
                    None => None,
                }
            }
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }
}
