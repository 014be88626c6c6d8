//! Seat matrix: a trapezoidal occupancy grid and its zigzag assignment.
//!
//! Every row is centered under the widest row by padding both ends with
//! [`SeatSlot::Empty`] cells. Seats are then handed out column by column,
//! alternating direction each column, so each party occupies a contiguous
//! wedge of the hemicycle.
//!
//! ```text
//!   col:  0 1 2 3 4 5 6
//!   out:  ↓ ↑ ↓ ↑ ↓ ↑ ↓      ■ = seat   · = Empty
//!         ■ ■ ■ ■ ■ ■ ■
//!         · ■ ■ ■ ■ ■ ·
//!         · · ■ ■ ■ · ·
//!   in:
//! ```

use serde::{Deserialize, Serialize};

use crate::rows::Row;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatSlot {
    /// Padding that equalizes row widths. Never drawn.
    Empty,
    /// A real seat with no party assigned.
    Vacant,
    /// A seat held by the party at this index in the seating order.
    Party(usize),
}

/// A seat that received a party, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Row index, 0 = innermost.
    pub row: usize,
    /// Grid column.
    pub column: usize,
    /// Index among the row's real seats, left to right.
    pub position: u32,
    /// Index into the seating order.
    pub party: usize,
}

/// `rows × width` occupancy grid, row 0 innermost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMatrix {
    width: usize,
    cells: Vec<Vec<SeatSlot>>,
}

impl SeatMatrix {
    /// Build the padded grid for reconciled rows.
    pub fn new(rows: &[Row]) -> Self {
        let width = rows.iter().map(|r| r.capacity as usize).max().unwrap_or(0);
        let cells = rows
            .iter()
            .map(|row| {
                let (left, right) = padding(width, row.capacity as usize);
                (0..width)
                    .map(|j| {
                        if j < left || j >= width - right {
                            SeatSlot::Empty
                        } else {
                            SeatSlot::Vacant
                        }
                    })
                    .collect()
            })
            .collect();
        Self { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<SeatSlot> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[SeatSlot] {
        self.cells.get(row).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Number of `Empty` cells at the left and right end of a row.
    pub fn row_padding(&self, row: usize) -> (usize, usize) {
        let cells = self.row(row);
        let left = cells.iter().take_while(|c| **c == SeatSlot::Empty).count();
        if left == cells.len() {
            return (left, 0);
        }
        let right = cells
            .iter()
            .rev()
            .take_while(|c| **c == SeatSlot::Empty)
            .count();
        (left, right)
    }

    /// Hand out seats following the zigzag walk.
    ///
    /// `quotas[i]` is the seat count of the `i`-th party in seating order.
    /// Seats beyond the grid's capacity are silently left out; cells beyond
    /// the total quota stay `Vacant`.
    pub fn assign(mut self, quotas: &[u32]) -> Assignment {
        let mut placements = Vec::new();
        let mut party = 0usize;
        let mut used = 0u32;
        let n_rows = self.cells.len();
        let lefts: Vec<usize> = (0..n_rows).map(|r| self.row_padding(r).0).collect();

        for column in 0..self.width {
            let walk: Box<dyn Iterator<Item = usize>> = if column % 2 == 0 {
                Box::new((0..n_rows).rev())
            } else {
                Box::new(0..n_rows)
            };
            for row in walk {
                if self.cells[row][column] == SeatSlot::Empty {
                    continue;
                }
                while party < quotas.len() && used >= quotas[party] {
                    party += 1;
                    used = 0;
                }
                if party >= quotas.len() {
                    continue;
                }
                self.cells[row][column] = SeatSlot::Party(party);
                used += 1;
                placements.push(Placement {
                    row,
                    column,
                    position: (column - lefts[row]) as u32,
                    party,
                });
            }
        }

        Assignment {
            matrix: self,
            placements,
        }
    }
}

/// Result of [`SeatMatrix::assign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub matrix: SeatMatrix,
    /// Assigned seats in traversal order.
    pub placements: Vec<Placement>,
}

/// Left/right `Empty` padding for a row of `capacity` seats in a grid of
/// `width` columns; the odd remainder goes left.
fn padding(width: usize, capacity: usize) -> (usize, usize) {
    let deficit = width.saturating_sub(capacity);
    let left = deficit.div_ceil(2);
    (left, deficit - left)
}
