//! citybook - a small interactive terminal city list
//!
//! A list screen where the user adds city names, and a detail screen
//! showing one selected name with a back action. The list lives only in
//! memory for the duration of the session.
//!
//! The crate is split the same way the binary behaves: `domain` holds the
//! city list model, `app` the screen state machine and controller, `input`
//! the key-to-action mapping, `ui` the per-screen rendering, and `event`
//! the terminal event source.

pub mod app;
pub mod domain;
pub mod event;
pub mod input;
pub mod ui;
