//! Pure layout logic for Parlia parliament diagrams.
//!
//! This crate computes where every seat of a semicircular parliament goes.
//! It knows nothing about rendering surfaces: functions take plain data
//! (a drawing area and a party list) and return plain geometric records,
//! making them unit-testable and usable from any renderer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`area`] | Fit a padded 2:1 frame inside the drawing area |
//! | [`csv`] | Party list import/export (`id,color,name,seats`) |
//! | [`emit`] | Seat plane coordinates |
//! | [`error`] | Layout error taxonomy |
//! | [`layout`] | Pipeline entry point and options |
//! | [`matrix`] | Trapezoidal seat grid and zigzag party assignment |
//! | [`party`] | Party records and seating order |
//! | [`reconcile`] | Thin rows down to the requested seat total |
//! | [`rows`] | Concentric rows and their maximum capacity |
//! | [`selection`] | Caller-owned party selection and opacity |
//! | [`sizing`] | Half-annulus geometry and seat radius |

pub mod area;
pub mod csv;
pub mod emit;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod party;
pub mod reconcile;
pub mod rows;
pub mod selection;
pub mod sizing;

pub use area::DrawingArea;
pub use emit::SeatPoint;
pub use error::LayoutError;
pub use layout::{layout, LayoutOptions, LayoutResult};
pub use party::{Party, SortField, SortOrder};
