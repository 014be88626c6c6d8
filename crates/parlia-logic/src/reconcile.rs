//! Capacity reconciliation.
//!
//! Rows start at their maximum capacity, which is almost always more than
//! the number of seats requested. Seats are removed one at a time from the
//! most crowded row (smallest circumferential margin) until the total fits.
//! Rows wait in a priority queue, so each removal costs `O(log rows)`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::rows::{total_capacity, Row};

/// Queue entry for one nonempty row. The max-heap pops the smallest margin
/// first and the innermost row among equal margins.
#[derive(Debug, Clone, Copy)]
struct Crowding {
    margin: f64,
    index: usize,
}

impl Crowding {
    fn of(rows: &[Row], index: usize) -> Option<Self> {
        let row = &rows[index];
        let margin = match row.capacity {
            0 => return None,
            1 => f64::INFINITY,
            _ => row.circumferential_margin,
        };
        Some(Self { margin, index })
    }
}

impl PartialEq for Crowding {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Crowding {}

impl PartialOrd for Crowding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Crowding {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .margin
            .total_cmp(&self.margin)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Shrink row capacities until their sum is at most `target`.
///
/// Returns a new row list; `rows` is left untouched. Ties on margin go to
/// the innermost row. Rows down to a single seat have no spacing to
/// equalize, so they are only thinned once every other row is also down to
/// one seat. A row emptied to zero stays in the list.
pub fn reconcile(rows: &[Row], target: u64) -> Vec<Row> {
    let mut rows = rows.to_vec();
    let mut sum = total_capacity(&rows);
    let mut removed = 0u64;

    if sum > target {
        let mut queue: BinaryHeap<Crowding> = (0..rows.len())
            .filter_map(|i| Crowding::of(&rows, i))
            .collect();
        while sum > target {
            let Some(Crowding { index, .. }) = queue.pop() else {
                break;
            };
            let row = &mut rows[index];
            row.set_capacity(row.capacity - 1);
            sum -= 1;
            removed += 1;
            if let Some(entry) = Crowding::of(&rows, index) {
                queue.push(entry);
            }
        }
    }

    log::debug!(
        "Reconciled capacity to {} (target {}, removed {} seats)",
        sum,
        target,
        removed
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::build_rows;
    use crate::sizing::SemicircleGeometry;

    /// Reference thinning: rescan every row for each removed seat.
    fn reconcile_by_scan(rows: &[Row], target: u64) -> Vec<Row> {
        let mut rows = rows.to_vec();
        let mut sum = total_capacity(&rows);
        while sum > target {
            let mut best: Option<(usize, f64)> = None;
            for (i, row) in rows.iter().enumerate() {
                let margin = match row.capacity {
                    0 => continue,
                    1 => f64::INFINITY,
                    _ => row.circumferential_margin,
                };
                match best {
                    Some((_, min)) if margin >= min => {}
                    _ => best = Some((i, margin)),
                }
            }
            let Some((index, _)) = best else {
                break;
            };
            let row = &mut rows[index];
            row.set_capacity(row.capacity - 1);
            sum -= 1;
        }
        rows
    }

    fn rows() -> Vec<Row> {
        let g = SemicircleGeometry {
            inner_radius: 200.0,
            outer_radius: 500.0,
            thickness: 300.0,
            area: std::f64::consts::PI * 210_000.0 / 2.0,
        };
        build_rows(&g, 10.0).unwrap()
    }

    fn stub_row(capacity: u32, margin: f64) -> Row {
        Row {
            radius: 100.0,
            arc_length: 100.0 * std::f64::consts::PI,
            seat_half_angle: 0.05,
            seat_arc: 10.0,
            radial_margin: 0.0,
            circumferential_margin: margin,
            circumferential_angle: margin / 100.0,
            capacity,
        }
    }

    #[test]
    fn reaches_target_exactly() {
        let initial = rows();
        let max = total_capacity(&initial);
        let target = max - 57;
        let reconciled = reconcile(&initial, target);
        assert_eq!(total_capacity(&reconciled), target);
    }

    #[test]
    fn input_rows_untouched() {
        let initial = rows();
        let copy = initial.clone();
        let _ = reconcile(&initial, 10);
        assert_eq!(initial, copy);
    }

    #[test]
    fn capacities_never_increase() {
        let initial = rows();
        let reconciled = reconcile(&initial, 300);
        for (before, after) in initial.iter().zip(&reconciled) {
            assert!(after.capacity <= before.capacity);
        }
    }

    #[test]
    fn target_above_capacity_is_noop() {
        let initial = rows();
        let max = total_capacity(&initial);
        let reconciled = reconcile(&initial, max + 100);
        assert_eq!(reconciled, initial);
    }

    #[test]
    fn tightest_row_thinned_first() {
        let initial = vec![stub_row(5, 4.0), stub_row(5, 1.0), stub_row(5, 2.0)];
        let reconciled = reconcile(&initial, 14);
        assert_eq!(reconciled[0].capacity, 5);
        assert_eq!(reconciled[1].capacity, 4);
        assert_eq!(reconciled[2].capacity, 5);
    }

    #[test]
    fn tie_goes_to_innermost() {
        let initial = vec![stub_row(5, 2.0), stub_row(5, 2.0)];
        let reconciled = reconcile(&initial, 9);
        assert_eq!(reconciled[0].capacity, 4);
        assert_eq!(reconciled[1].capacity, 5);
    }

    #[test]
    fn single_seat_rows_spared_until_last() {
        let initial = vec![stub_row(1, 0.0), stub_row(3, 5.0)];
        let reconciled = reconcile(&initial, 2);
        assert_eq!(reconciled[0].capacity, 1);
        assert_eq!(reconciled[1].capacity, 1);

        let reconciled = reconcile(&initial, 1);
        assert_eq!(reconciled[0].capacity, 0);
        assert_eq!(reconciled[1].capacity, 1);
    }

    #[test]
    fn zero_target_empties_every_row() {
        let reconciled = reconcile(&rows(), 0);
        assert_eq!(total_capacity(&reconciled), 0);
        assert_eq!(reconciled.len(), rows().len());
    }

    #[test]
    fn matches_full_rescan_on_fine_rows() {
        let g = SemicircleGeometry {
            inner_radius: 195.2,
            outer_radius: 488.0,
            thickness: 292.8,
            area: std::f64::consts::PI * (488.0f64.powi(2) - 195.2f64.powi(2)) / 2.0,
        };
        for seat_r in [1.8, 3.0, 7.5] {
            let initial = build_rows(&g, seat_r).unwrap();
            let max = total_capacity(&initial);
            for target in [0, 1, 17, 100, 1_000, max / 2, max - 1] {
                assert_eq!(
                    reconcile(&initial, target),
                    reconcile_by_scan(&initial, target),
                    "seat radius {seat_r}, target {target}"
                );
            }
        }
    }

    #[test]
    fn matches_full_rescan_with_ties_and_single_seats() {
        let initial = vec![
            stub_row(1, 0.0),
            stub_row(4, 2.0),
            stub_row(6, 2.0),
            stub_row(2, 0.5),
            stub_row(0, 0.0),
            stub_row(3, 2.0),
        ];
        for target in 0..=total_capacity(&initial) {
            assert_eq!(
                reconcile(&initial, target),
                reconcile_by_scan(&initial, target),
                "target {target}"
            );
        }
    }
}
