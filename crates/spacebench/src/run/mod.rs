//! Generation dispatcher: validates a configuration once, then runs every enabled
//! family and writes its data file.
//!
//! Start with [`runner::GenerationRunner`]. Progress can be observed through the
//! sinks in [`events`]; per-family random streams come from [`seed`].
pub mod events;
pub mod runner;
pub mod seed;
