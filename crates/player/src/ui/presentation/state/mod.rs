//! View-local reactive state
//!
//! Each struct bundles the signals one view owns. They are `Copy`, so event
//! handlers and spawned tasks can capture them freely.

pub mod roster_state;

pub use roster_state::{GmRosterState, PlayerRosterState};
