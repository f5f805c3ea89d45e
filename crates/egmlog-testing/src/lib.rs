//! Testing infrastructure for egmlog tests.
//!
//! - `LogScript`: builder for synthetic terminal logs with advancing timestamps
//! - `TestWorld`: isolated folder + config for driving the CLI
//! - `assertions`: checks over written summary files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::LogScript;
pub use world::TestWorld;
