//! Conference track scheduler CLI library.
//!
//! The engine lives in `cts-core`; this crate wires it to the world:
//! argument parsing, configuration, the talk list parser and the
//! agenda renderer.

mod cli;
mod config;
pub mod parser;
pub mod render;

pub use cli::Cli;
pub use config::Config;
