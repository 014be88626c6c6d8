//! Row construction: concentric arc-bands of seats.
//!
//! Rows are stacked radially from the inner radius outward with an equal
//! radial margin above and below each row. Each row's maximum capacity is the
//! number of seat chords that fit along its 180° arc.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::sizing::SemicircleGeometry;

/// Most rows a layout may stack. Tiny seats beyond this are rejected rather
/// than allocated.
pub const MAX_ROWS: u32 = 10_000;

/// Most seats all rows together may hold before reconciliation.
pub const MAX_SEAT_CAPACITY: u64 = 2_000_000;

/// One radial band of seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Distance from the semicircle center to the seat centers.
    pub radius: f64,
    /// Length of the 180° arc at `radius`.
    pub arc_length: f64,
    /// Half the angle subtended by one seat's diameter as a chord.
    pub seat_half_angle: f64,
    /// Arc length consumed by one seat.
    pub seat_arc: f64,
    /// Empty gap above and below the row (same for every row).
    pub radial_margin: f64,
    /// Arc-length gap between adjacent seats.
    pub circumferential_margin: f64,
    /// `circumferential_margin` expressed as an angle.
    pub circumferential_angle: f64,
    /// Number of seats placed in this row.
    pub capacity: u32,
}

impl Row {
    /// Set the capacity and respace the seats along the arc.
    ///
    /// Rows holding zero or one seat have no neighbour to space against and
    /// get a zero margin.
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
        self.circumferential_margin = if capacity <= 1 {
            0.0
        } else {
            (self.arc_length - capacity as f64 * self.seat_arc) / (capacity - 1) as f64
        };
        self.circumferential_angle = self.circumferential_margin / self.radius;
    }

    /// Angular position of the `k`-th seat (0-based) measured from the
    /// left end of the arc.
    pub fn seat_angle(&self, k: u32) -> f64 {
        self.seat_half_angle + k as f64 * (2.0 * self.seat_half_angle + self.circumferential_angle)
    }
}

/// Number of rows that fit radially for a given seat radius, saturating at
/// `u32::MAX`.
pub fn row_count(geometry: &SemicircleGeometry, seat_radius: f64) -> u32 {
    let count = (geometry.thickness / (2.0 * seat_radius)).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}

/// Build every row at its maximum capacity, innermost first.
///
/// An empty vector means nothing fits radially; the caller reports this as
/// a full shortfall. Seats so small that more than [`MAX_ROWS`] rows or
/// [`MAX_SEAT_CAPACITY`] seats would fit are a `GeometryError`.
pub fn build_rows(
    geometry: &SemicircleGeometry,
    seat_radius: f64,
) -> Result<Vec<Row>, LayoutError> {
    if !seat_radius.is_finite() || seat_radius <= 0.0 {
        return Err(LayoutError::geometry(format!(
            "seat radius must be positive, got {}",
            seat_radius
        )));
    }

    let count = row_count(geometry, seat_radius);
    if count == 0 {
        return Ok(Vec::new());
    }
    if count > MAX_ROWS {
        return Err(LayoutError::geometry(format!(
            "seat radius {:e} gives more than {} rows",
            seat_radius, MAX_ROWS
        )));
    }

    let radial_margin =
        (geometry.thickness - count as f64 * (2.0 * seat_radius)) / (2.0 * count as f64);

    let mut rows = Vec::with_capacity(count as usize);
    let mut seats = 0u64;
    for i in 1..=count {
        let band = 2.0 * f64::from(i) - 1.0;
        let radius = geometry.inner_radius + (seat_radius + radial_margin) * band;
        if radius <= 0.0 || seat_radius > radius {
            return Err(LayoutError::geometry(format!(
                "row {} radius {:.3} cannot hold seats of radius {:.3}",
                i, radius, seat_radius
            )));
        }
        let arc_length = radius * PI;
        let seat_half_angle = (seat_radius / radius).asin();
        let seat_arc = 2.0 * seat_half_angle * radius;
        let capacity = (arc_length / seat_arc).floor();
        if !capacity.is_finite() || capacity > (MAX_SEAT_CAPACITY - seats) as f64 {
            return Err(LayoutError::geometry(format!(
                "seat radius {:e} gives more than {} seats",
                seat_radius, MAX_SEAT_CAPACITY
            )));
        }
        let capacity = capacity as u32;
        seats += u64::from(capacity);

        let mut row = Row {
            radius,
            arc_length,
            seat_half_angle,
            seat_arc,
            radial_margin,
            circumferential_margin: 0.0,
            circumferential_angle: 0.0,
            capacity: 0,
        };
        row.set_capacity(capacity);
        rows.push(row);
    }

    log::debug!(
        "Built {} rows (seat radius {:.3}, radial margin {:.3}, max capacity {})",
        rows.len(),
        seat_radius,
        radial_margin,
        total_capacity(&rows)
    );
    Ok(rows)
}

/// Sum of all row capacities.
pub fn total_capacity(rows: &[Row]) -> u64 {
    rows.iter().map(|r| r.capacity as u64).sum()
}
