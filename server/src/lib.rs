//! HTTP boundary for the Lab mock APIs.
//!
//! Decodes and validates requests into the engine's typed keys and
//! renders engine replies and errors as JSON. No decisions live here.

pub mod error;
pub mod handlers;
pub mod router;

pub use router::build_router;
