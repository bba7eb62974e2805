//! Deterministic mock-response engine for the Lab APIs.
//!
//! Given a request's key (report number, MSISDN, or nothing) the engine
//! decides whether the simulated operation succeeds and synthesizes
//! shape-correct data. The same key always reproduces the same reply.

pub mod auth_subsystem;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod frigos_subsystem;
pub mod gio_subsystem;
pub mod name_generator;
pub mod outcome;
pub mod request;
pub mod response;
pub mod rng;
pub mod types;

pub use config::MockConfig;
pub use engine::{Endpoint, MockEngine};
pub use error::{MockError, MockResult};
