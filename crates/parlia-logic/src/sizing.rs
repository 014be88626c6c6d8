//! Seat sizing over the half-annulus.
//!
//! The semicircle area is split into `N` hypothetical squares; each seat is a
//! circle whose radius is a fraction (`1 / seat_radius_ratio`) of the side of
//! such a square.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::area::ParliamentFrame;
use crate::error::LayoutError;

/// The half-annulus where seats live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemicircleGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub thickness: f64,
    pub area: f64,
}

impl SemicircleGeometry {
    /// Derive the half-annulus for a frame.
    ///
    /// `inner_radius_ratio` divides the frame width; the outer radius is
    /// always half the frame width.
    pub fn from_frame(
        frame: &ParliamentFrame,
        inner_radius_ratio: f64,
    ) -> Result<Self, LayoutError> {
        if !inner_radius_ratio.is_finite() || inner_radius_ratio <= 0.0 {
            return Err(LayoutError::geometry(format!(
                "inner radius ratio must be positive, got {}",
                inner_radius_ratio
            )));
        }
        let inner_radius = frame.width / inner_radius_ratio;
        let outer_radius = frame.width / 2.0;
        let thickness = outer_radius - inner_radius;
        if thickness < 0.0 {
            return Err(LayoutError::geometry(format!(
                "inner radius {:.2} exceeds outer radius {:.2}",
                inner_radius, outer_radius
            )));
        }
        let area = PI * (outer_radius - inner_radius) * (outer_radius + inner_radius) / 2.0;
        Ok(Self {
            inner_radius,
            outer_radius,
            thickness,
            area,
        })
    }
}

/// Uniform seat radius for `total_seats` seats.
pub fn seat_radius(
    geometry: &SemicircleGeometry,
    total_seats: u64,
    seat_radius_ratio: f64,
) -> Result<f64, LayoutError> {
    if total_seats == 0 {
        return Err(LayoutError::input("total seat count must be positive"));
    }
    if !seat_radius_ratio.is_finite() || seat_radius_ratio <= 0.0 {
        return Err(LayoutError::geometry(format!(
            "seat radius ratio must be positive, got {}",
            seat_radius_ratio
        )));
    }
    let square_area = geometry.area / total_seats as f64;
    let side = square_area.sqrt();
    Ok(side / seat_radius_ratio)
}
