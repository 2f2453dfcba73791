//! Input translation layer
//!
//! Maps raw terminal events to the semantic actions the controller
//! understands.

pub mod keymap;

pub use keymap::Action;
