//! Command-line front end for Parlia.
//!
//! Reads a party list, runs the layout engine from `parlia-logic` and
//! writes the result as JSON or SVG. The `harness` subcommand runs a
//! headless self-check sweep over the engine.

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod harness;
pub mod logging;
pub mod svg;

pub use cli::run_from_env;
