//! Vehicle access-control lookup for a facility gate.
//!
//! The [`roster`] module holds the filtering and aggregation engine together with the
//! importer, views, and HTTP router built on top of it. Configuration, telemetry, and the
//! top-level error type are shared with the `gate-access-api` service.

pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;
