//! Test support: fixtures and an in-memory backend.

pub mod fake_backend;
pub mod fixtures;

pub use fake_backend::{FakeBackend, FakeClient};
