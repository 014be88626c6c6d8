//! Coordinate emission: turn assigned grid cells into plane coordinates.
//!
//! Angles run from the left end of the semicircle (0) to the right end (π);
//! the semicircle center sits at the middle of the frame's bottom edge.

use serde::{Deserialize, Serialize};

use crate::area::ParliamentFrame;
use crate::matrix::Placement;
use crate::party::Party;
use crate::rows::Row;
use crate::sizing::SemicircleGeometry;

/// One placed seat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatPoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub party_id: i64,
    /// Row index, 0 = innermost.
    pub row: usize,
    /// Index among the row's seats, left to right.
    pub position: u32,
}

/// Emit one [`SeatPoint`] per placement, preserving traversal order.
///
/// `ordered` is the seating order the placements' party indices refer to.
pub fn emit_seats(
    frame: &ParliamentFrame,
    geometry: &SemicircleGeometry,
    rows: &[Row],
    seat_radius: f64,
    placements: &[Placement],
    ordered: &[&Party],
) -> Vec<SeatPoint> {
    let cx = frame.left + geometry.outer_radius;
    let cy = frame.top + frame.height;

    placements
        .iter()
        .filter_map(|p| {
            let row = rows.get(p.row)?;
            let party = ordered.get(p.party)?;
            let angle = row.seat_angle(p.position);
            Some(SeatPoint {
                x: cx - angle.cos() * row.radius,
                y: cy - angle.sin() * row.radius,
                radius: seat_radius,
                party_id: party.id,
                row: p.row,
                position: p.position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn frame() -> ParliamentFrame {
        ParliamentFrame {
            width: 200.0,
            height: 100.0,
            left: 10.0,
            top: 5.0,
            area: 20_000.0,
        }
    }

    fn geometry() -> SemicircleGeometry {
        SemicircleGeometry {
            inner_radius: 40.0,
            outer_radius: 100.0,
            thickness: 60.0,
            area: PI * (100.0f64.powi(2) - 40.0f64.powi(2)) / 2.0,
        }
    }

    fn row() -> Row {
        let radius = 50.0;
        let seat_half_angle = PI / 4.0;
        Row {
            radius,
            arc_length: radius * PI,
            seat_half_angle,
            seat_arc: 2.0 * seat_half_angle * radius,
            radial_margin: 0.0,
            circumferential_margin: 0.0,
            circumferential_angle: 0.0,
            capacity: 2,
        }
    }

    #[test]
    fn seats_sit_on_row_arc() {
        let party = Party::new(7, "#123456", "Test", 2);
        let ordered = vec![&party];
        let placements = vec![
            Placement {
                row: 0,
                column: 0,
                position: 0,
                party: 0,
            },
            Placement {
                row: 0,
                column: 1,
                position: 1,
                party: 0,
            },
        ];
        let seats = emit_seats(&frame(), &geometry(), &[row()], 5.0, &placements, &ordered);
        assert_eq!(seats.len(), 2);

        let (cx, cy) = (110.0, 105.0);
        for seat in &seats {
            let dist = ((seat.x - cx).powi(2) + (seat.y - cy).powi(2)).sqrt();
            assert!((dist - 50.0).abs() < 1e-9);
            assert!(seat.y <= cy);
            assert_eq!(seat.party_id, 7);
            assert!((seat.radius - 5.0).abs() < 1e-12);
        }
        // First seat at 45° on the left, second at 135° on the right.
        assert!(seats[0].x < cx);
        assert!(seats[1].x > cx);
        assert!((seats[0].y - seats[1].y).abs() < 1e-9);
    }

    #[test]
    fn preserves_placement_order() {
        let a = Party::new(1, "a", "A", 1);
        let b = Party::new(2, "b", "B", 1);
        let ordered = vec![&a, &b];
        let placements = vec![
            Placement {
                row: 0,
                column: 1,
                position: 1,
                party: 1,
            },
            Placement {
                row: 0,
                column: 0,
                position: 0,
                party: 0,
            },
        ];
        let seats = emit_seats(&frame(), &geometry(), &[row()], 5.0, &placements, &ordered);
        assert_eq!(seats[0].party_id, 2);
        assert_eq!(seats[0].position, 1);
        assert_eq!(seats[1].party_id, 1);
    }
}
