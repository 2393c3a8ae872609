//! Staircase geometry engine.
//!
//! Derives step count, riser height and a flight/landing/winder layout from a
//! handful of architectural inputs, and exposes it as HTTP endpoints for the
//! estimating wizard.

pub mod defaults;
pub mod designer;
pub mod models;
mod requests;
mod routes;
pub mod synthesizer;
pub mod validator;

pub use routes::router;
