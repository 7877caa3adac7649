//! End-to-end flows against the in-memory backend.
//!
//! Each test wires real services, session stores and the typed API onto a
//! shared `FakeBackend`, so GM and player sessions see each other's writes.
//!
//! ```bash
//! cargo test -p roster-player --lib e2e_tests
//! ```

mod e2e_helpers;
mod gm_flow_tests;
mod player_flow_tests;
mod session_flow_tests;

pub use e2e_helpers::*;
