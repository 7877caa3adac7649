//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate services and adapters.

mod platform;

pub use platform::{Platform, PlatformStorageAdapter};
