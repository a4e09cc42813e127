//! Selection Core
//!
//! Filtering, navigation and combination state for the launcher overlay. Nothing in this
//! module touches the filesystem, the terminal or other processes.
//!
//! - **`validator`**: structural and size checks on snippet records
//! - **`search`**: case-insensitive filtering into a `FilteredView`
//! - **`navigation`**: sliding window and cursor with wrap-around
//! - **`combination`**: multi-snippet selection with duplicate and size limits
//! - **`launcher`**: wires the above together and resolves commits

pub mod combination;
pub mod error;
pub mod launcher;
pub mod navigation;
pub mod search;
pub mod validator;

pub use combination::{CombinationController, CombinedPayload};
pub use error::{CombinationError, ValidationError};
pub use launcher::{CancelOutcome, Launcher, Payload};
pub use navigation::{NavigationController, NavigationState};
pub use search::{FilteredView, filter};
pub use validator::SelectionValidator;
