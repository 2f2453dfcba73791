//! Application orchestration layer
//!
//! This module coordinates between input, domain, and UI layers. It
//! manages the screen state machine and event handling.

pub mod controller;
pub mod state;
