//! Terminal event source
//!
//! A reader thread forwards terminal input over a channel and emits a
//! periodic tick while the terminal is quiet, so the draw loop never
//! blocks indefinitely on input. The thread owns no application state.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use thiserror::Error;

/// Events delivered to the run loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed, repeated, or released
    Key(KeyEvent),
    /// A mouse button, scroll, or motion event
    Mouse(MouseEvent),
    /// The terminal was resized to the given dimensions
    Resize(u16, u16),
    /// No input arrived within one tick interval
    Tick,
}

/// Errors that can occur while waiting for events
#[derive(Debug, Error)]
pub enum EventError {
    /// The reader thread stopped; the terminal is gone
    #[error("event channel disconnected")]
    Disconnected,
}

/// Background terminal event reader
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Starts the reader thread
    ///
    /// # Arguments
    /// * `tick_rate` - Interval between ticks when no input arrives
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            loop {
                let ready = match event::poll(tick_rate) {
                    Ok(ready) => ready,
                    Err(_) => break,
                };
                let message = if ready {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                        Ok(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
                        Ok(_) => continue,
                        Err(_) => break,
                    }
                } else {
                    Event::Tick
                };
                if tx.send(message).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// Blocks until the next event
    pub fn next(&self) -> Result<Event, EventError> {
        self.rx.recv().map_err(|_| EventError::Disconnected)
    }
}
