//! Shared vocabulary types
//!
//! Pure data types with no I/O, used by both the domain entities and the
//! client's session handling.

mod role;
pub use role::Role;
