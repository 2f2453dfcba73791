//! Screen state management
//!
//! Defines the two-screen navigation state machine and its transitions.
//! The machine holds transient screen state only; the city list and the
//! list cursor live in AppController.

use crate::domain::city::CityName;

/// Visibility state of the list screen's entry control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Entry field is not shown
    #[default]
    Hidden,
    /// Entry field is visible and focused, holding the draft text
    Revealed {
        /// Text typed so far, discarded on confirm or cancel
        draft: String,
    },
}

impl EntryState {
    /// Checks whether the entry field is currently shown
    pub fn is_revealed(&self) -> bool {
        matches!(self, EntryState::Revealed { .. })
    }
}

/// Current screen - the city list or one city's detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// List screen with its entry control sub-state
    List {
        /// Entry control visibility and draft
        entry: EntryState,
    },
    /// Detail screen carrying the opened city as its navigation payload
    ///
    /// The payload is required by construction, so a detail screen can
    /// never exist without the name it is supposed to display.
    Detail {
        /// The city name selected on the list screen
        city: CityName,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::List {
            entry: EntryState::Hidden,
        }
    }
}

/// Possible screen transition events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The add-city control was activated
    EntryActivated,
    /// The current draft was confirmed and appended to the list
    EntryConfirmed,
    /// The entry field was dismissed without confirming
    EntryCancelled,
    /// A list row was opened, carrying its city name
    CityOpened(CityName),
    /// The detail screen's back action fired
    WentBack,
}

/// State machine for screen transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes a screen event and returns the new screen state
    ///
    /// # Arguments
    /// * `current` - Current screen state
    /// * `event` - Event to process
    ///
    /// # Returns
    /// New screen state after processing the event. Combinations not
    /// listed are invalid transitions and leave the state unchanged.
    pub fn process_event(current: Screen, event: ScreenEvent) -> Screen {
        match (current, event) {
            // Reveal the entry field from its initial hidden state
            (
                Screen::List {
                    entry: EntryState::Hidden,
                },
                ScreenEvent::EntryActivated,
            ) => Screen::List {
                entry: EntryState::Revealed {
                    draft: String::new(),
                },
            },

            // Confirm and cancel both hide the field; dropping the Revealed
            // state is what clears the draft
            (
                Screen::List {
                    entry: EntryState::Revealed { .. },
                },
                ScreenEvent::EntryConfirmed | ScreenEvent::EntryCancelled,
            ) => Screen::List {
                entry: EntryState::Hidden,
            },

            // Opening a row works from either entry sub-state; an open
            // draft is abandoned
            (Screen::List { .. }, ScreenEvent::CityOpened(city)) => Screen::Detail { city },

            // Back always lands on the list with the entry hidden
            (Screen::Detail { .. }, ScreenEvent::WentBack) => Screen::default(),

            // Invalid transitions - ignore event
            (current, _) => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_list_with_hidden_entry() {
        let screen = Screen::default();
        assert_eq!(
            screen,
            Screen::List {
                entry: EntryState::Hidden
            }
        );
    }

    #[test]
    fn activation_reveals_entry_with_empty_draft() {
        let screen = StateMachine::process_event(Screen::default(), ScreenEvent::EntryActivated);

        assert_eq!(
            screen,
            Screen::List {
                entry: EntryState::Revealed {
                    draft: String::new()
                }
            }
        );
    }

    #[test]
    fn activation_is_ignored_while_revealed() {
        let revealed = Screen::List {
            entry: EntryState::Revealed {
                draft: "Cal".to_string(),
            },
        };

        let screen = StateMachine::process_event(revealed.clone(), ScreenEvent::EntryActivated);

        assert_eq!(screen, revealed);
    }

    #[test]
    fn confirmation_returns_to_hidden() {
        let revealed = Screen::List {
            entry: EntryState::Revealed {
                draft: "Calgary".to_string(),
            },
        };

        let screen = StateMachine::process_event(revealed, ScreenEvent::EntryConfirmed);

        assert_eq!(
            screen,
            Screen::List {
                entry: EntryState::Hidden
            }
        );
    }

    #[test]
    fn cancellation_discards_draft() {
        let revealed = Screen::List {
            entry: EntryState::Revealed {
                draft: "Calg".to_string(),
            },
        };

        let screen = StateMachine::process_event(revealed, ScreenEvent::EntryCancelled);

        assert_eq!(
            screen,
            Screen::List {
                entry: EntryState::Hidden
            }
        );
    }

    #[test]
    fn opening_a_city_carries_its_name() {
        let city = CityName::new("Edmonton").unwrap();

        let screen =
            StateMachine::process_event(Screen::default(), ScreenEvent::CityOpened(city.clone()));

        assert_eq!(screen, Screen::Detail { city });
    }

    #[test]
    fn opening_works_while_entry_is_revealed() {
        let revealed = Screen::List {
            entry: EntryState::Revealed {
                draft: "abandoned".to_string(),
            },
        };
        let city = CityName::new("Edmonton").unwrap();

        let screen = StateMachine::process_event(revealed, ScreenEvent::CityOpened(city.clone()));

        assert_eq!(screen, Screen::Detail { city });
    }

    #[test]
    fn back_restores_list_with_hidden_entry() {
        let detail = Screen::Detail {
            city: CityName::new("Toronto").unwrap(),
        };

        let screen = StateMachine::process_event(detail, ScreenEvent::WentBack);

        assert_eq!(screen, Screen::default());
    }

    #[test]
    fn back_is_ignored_on_list_screen() {
        let screen = StateMachine::process_event(Screen::default(), ScreenEvent::WentBack);
        assert_eq!(screen, Screen::default());
    }

    #[test]
    fn confirmation_is_ignored_while_hidden() {
        let screen = StateMachine::process_event(Screen::default(), ScreenEvent::EntryConfirmed);
        assert_eq!(screen, Screen::default());
    }
}
