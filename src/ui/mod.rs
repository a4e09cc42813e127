//! User Interface Module
//!
//! Rendering for the launcher overlay. Everything here reads state; nothing mutates the
//! launcher except for recording where the result list was drawn.

pub mod colors;
pub mod components;
pub mod overlay;
