//! The layout pipeline entry point.
//!
//! # Pipeline
//!
//! 1. [`resolve_frame`]: padded 2:1 frame inside the drawing area
//! 2. [`SemicircleGeometry::from_frame`] + [`seat_radius`]: seat size
//! 3. [`build_rows`]: rows at maximum capacity
//! 4. [`reconcile`]: thin rows down to the requested total
//! 5. [`SeatMatrix::assign`]: zigzag party assignment
//! 6. [`emit_seats`]: plane coordinates
//!
//! ```
//! use parlia_logic::area::DrawingArea;
//! use parlia_logic::layout::{layout, LayoutOptions};
//! use parlia_logic::party::Party;
//!
//! let parties = vec![
//!     Party::new(1, "#e41a1c", "Reds", 50),
//!     Party::new(2, "#377eb8", "Blues", 50),
//! ];
//! let result = layout(DrawingArea::new(1000.0, 500.0), &parties, &LayoutOptions::default()).unwrap();
//! assert_eq!(result.seats_drawn, 100);
//! assert!(result.is_complete());
//! ```

use serde::{Deserialize, Serialize};

use crate::area::{resolve_frame, DrawingArea, ParliamentFrame};
use crate::emit::{emit_seats, SeatPoint};
use crate::error::LayoutError;
use crate::matrix::SeatMatrix;
use crate::party::{order_parties, total_seats, Party, SortField, SortOrder};
use crate::reconcile::reconcile;
use crate::rows::{build_rows, total_capacity, Row};
use crate::sizing::{seat_radius, SemicircleGeometry};

/// Tuning knobs for a layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Frame width divided by this gives the inner radius.
    pub inner_radius_ratio: f64,
    /// Side of the per-seat square divided by this gives the seat radius.
    pub seat_radius_ratio: f64,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Space left around the frame, in drawing-area units.
    pub padding: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            inner_radius_ratio: 5.0,
            seat_radius_ratio: 2.5,
            sort_field: SortField::ById,
            sort_order: SortOrder::Ascending,
            padding: 12.0,
        }
    }
}

impl LayoutOptions {
    /// Check the tuning ratios. Padding is checked against the drawing area
    /// in [`resolve_frame`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.inner_radius_ratio.is_finite() || self.inner_radius_ratio <= 0.0 {
            return Err(LayoutError::geometry(format!(
                "inner radius ratio must be positive, got {}",
                self.inner_radius_ratio
            )));
        }
        if !self.seat_radius_ratio.is_finite() || self.seat_radius_ratio <= 0.0 {
            return Err(LayoutError::geometry(format!(
                "seat radius ratio must be positive, got {}",
                self.seat_radius_ratio
            )));
        }
        Ok(())
    }
}

/// Output of one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Seats requested (sum over all parties).
    pub seats_total: u64,
    /// Seats actually placed.
    pub seats_drawn: u64,
    /// Placed seats in traversal order.
    pub seats: Vec<SeatPoint>,
    pub frame: ParliamentFrame,
    pub geometry: SemicircleGeometry,
    pub seat_radius: f64,
    /// Reconciled rows, innermost first.
    pub rows: Vec<Row>,
}

impl LayoutResult {
    /// All requested seats were placed.
    pub fn is_complete(&self) -> bool {
        self.seats_drawn == self.seats_total
    }

    /// Number of requested seats that could not be placed.
    pub fn shortfall(&self) -> u64 {
        self.seats_total.saturating_sub(self.seats_drawn)
    }
}

fn validate_parties(parties: &[Party]) -> Result<u64, LayoutError> {
    if parties.is_empty() {
        return Err(LayoutError::input("no parties given"));
    }
    if let Some(p) = parties.iter().find(|p| p.seats == 0) {
        return Err(LayoutError::input(format!(
            "party #{} ({}) has no seats",
            p.id, p.name
        )));
    }
    Ok(total_seats(parties))
}

/// Lay out `parties` as a parliament inside `area`.
///
/// A seat shortfall is not an error: check [`LayoutResult::is_complete`].
pub fn layout(
    area: DrawingArea,
    parties: &[Party],
    options: &LayoutOptions,
) -> Result<LayoutResult, LayoutError> {
    options.validate()?;
    let seats_total = validate_parties(parties)?;

    let frame = resolve_frame(area, options.padding)?;
    let geometry = SemicircleGeometry::from_frame(&frame, options.inner_radius_ratio)?;
    let radius = seat_radius(&geometry, seats_total, options.seat_radius_ratio)?;
    log::debug!(
        "Frame {:.1}×{:.1} at ({:.1}, {:.1}), radii {:.1}..{:.1}, seat radius {:.3}",
        frame.width,
        frame.height,
        frame.left,
        frame.top,
        geometry.inner_radius,
        geometry.outer_radius,
        radius
    );

    let max_rows = build_rows(&geometry, radius)?;
    if max_rows.is_empty() {
        log::warn!(
            "No row fits for seat radius {:.3}; 0 of {} seats drawn",
            radius,
            seats_total
        );
        return Ok(LayoutResult {
            seats_total,
            seats_drawn: 0,
            seats: Vec::new(),
            frame,
            geometry,
            seat_radius: radius,
            rows: Vec::new(),
        });
    }

    let rows = reconcile(&max_rows, seats_total);
    let ordered = order_parties(parties, options.sort_field, options.sort_order);
    let quotas: Vec<u32> = ordered.iter().map(|p| p.seats).collect();
    let assignment = SeatMatrix::new(&rows).assign(&quotas);
    let seats = emit_seats(
        &frame,
        &geometry,
        &rows,
        radius,
        &assignment.placements,
        &ordered,
    );

    let seats_drawn = seats.len() as u64;
    if seats_drawn < seats_total {
        log::warn!(
            "Can't fit all seats: {} of {} drawn (capacity {}), reduce seat size",
            seats_drawn,
            seats_total,
            total_capacity(&rows)
        );
    }

    Ok(LayoutResult {
        seats_total,
        seats_drawn,
        seats,
        frame,
        geometry,
        seat_radius: radius,
        rows,
    })
}
