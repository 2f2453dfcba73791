//! Screen geometry
//!
//! Computes the widget rectangles for both screens. Render functions and
//! mouse hit-testing share these rectangles, so a click target is always
//! exactly the control that was drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Controls a click can land on within the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    /// The add-city button
    AddButton,
    /// The entry field itself (focus is implicit, nothing to do)
    Entry,
    /// The confirm button next to the entry field
    ConfirmButton,
    /// A list row, by city index
    Row(usize),
}

/// Controls a click can land on within the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailHit {
    /// The back button
    BackButton,
}

/// Widget rectangles for the list screen
///
/// The entry field and confirm button only exist while the entry control
/// is revealed.
#[derive(Debug, Clone)]
pub struct ListLayout {
    pub title: Rect,
    pub add_button: Rect,
    pub entry: Option<Rect>,
    pub confirm_button: Option<Rect>,
    pub list: Rect,
    pub footer: Rect,
}

impl ListLayout {
    /// Splits the screen area into list-screen rectangles
    ///
    /// # Arguments
    /// * `area` - Full terminal area
    /// * `entry_revealed` - Whether the entry field is currently shown
    pub fn new(area: Rect, entry_revealed: bool) -> Self {
        if entry_revealed {
            let chunks = Layout::vertical([
                Constraint::Length(1), // title
                Constraint::Length(1), // add button
                Constraint::Length(3), // entry field
                Constraint::Length(1), // confirm button
                Constraint::Min(3),    // city list
                Constraint::Length(1), // hint footer
            ])
            .split(area);
            Self {
                title: chunks[0],
                add_button: chunks[1],
                entry: Some(chunks[2]),
                confirm_button: Some(chunks[3]),
                list: chunks[4],
                footer: chunks[5],
            }
        } else {
            let chunks = Layout::vertical([
                Constraint::Length(1), // title
                Constraint::Length(1), // add button
                Constraint::Min(3),    // city list
                Constraint::Length(1), // hint footer
            ])
            .split(area);
            Self {
                title: chunks[0],
                add_button: chunks[1],
                entry: None,
                confirm_button: None,
                list: chunks[2],
                footer: chunks[3],
            }
        }
    }

    /// Number of list rows that fit inside the list block's borders
    pub fn viewport_rows(&self) -> usize {
        self.list.height.saturating_sub(2) as usize
    }

    /// First list index shown, chosen so the cursor row stays visible
    ///
    /// Render and hit-testing both use this offset; they can never scroll
    /// out of step.
    pub fn first_visible(&self, cursor: usize) -> usize {
        let rows = self.viewport_rows().max(1);
        cursor.saturating_sub(rows - 1)
    }

    /// Returns the control under the given terminal cell, if any
    ///
    /// # Arguments
    /// * `column`, `row` - Click position in terminal cells
    /// * `len` - Current number of cities
    /// * `cursor` - Currently highlighted row (determines scroll offset)
    pub fn hit(&self, column: u16, row: u16, len: usize, cursor: usize) -> Option<ListHit> {
        let pos = Position::new(column, row);
        if self.add_button.contains(pos) {
            return Some(ListHit::AddButton);
        }
        if let Some(entry) = self.entry {
            if entry.contains(pos) {
                return Some(ListHit::Entry);
            }
        }
        if let Some(confirm) = self.confirm_button {
            if confirm.contains(pos) {
                return Some(ListHit::ConfirmButton);
            }
        }

        // Rows are drawn inside the list block's border
        let inner = self.list.inner(ratatui::layout::Margin::new(1, 1));
        if inner.contains(pos) {
            let rel = (row - inner.y) as usize;
            let index = self.first_visible(cursor) + rel;
            if index < len {
                return Some(ListHit::Row(index));
            }
        }
        None
    }
}

/// Widget rectangles for the detail screen
#[derive(Debug, Clone)]
pub struct DetailLayout {
    pub title: Rect,
    pub name: Rect,
    pub back_button: Rect,
    pub footer: Rect,
}

impl DetailLayout {
    /// Splits the screen area into detail-screen rectangles
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(3), // city name
            Constraint::Length(1), // back button
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // hint footer
        ])
        .split(area);
        Self {
            title: chunks[0],
            name: chunks[1],
            back_button: chunks[2],
            footer: chunks[4],
        }
    }

    /// Returns the control under the given terminal cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<DetailHit> {
        if self.back_button.contains(Position::new(column, row)) {
            return Some(DetailHit::BackButton);
        }
        None
    }
}
