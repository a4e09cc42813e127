//! snix-launcher - Snippet Launcher Overlay
//!
//! A keyboard-driven overlay for picking text snippets. Type to filter, move through a
//! sliding window of matches, and either commit one snippet or combine several into one
//! payload. The committed text is written to stdout for whatever tool performs the
//! injection.

pub mod app;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod models;
pub mod selection;
pub mod ui;
