//! Event Handling Module
//!
//! Translates raw terminal events into launcher commands.
//!
//! - **`keys`**: search editing, navigation, combination and commit keys
//! - **`mouse`**: hover and click on the result list

pub mod keys;
pub mod mouse;
