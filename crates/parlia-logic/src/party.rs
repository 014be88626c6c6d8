//! Party records and seating order.
//!
//! Parties are immutable input to a layout run. The engine only reorders
//! them; it never edits a record.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A party taking part in the parliament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Caller-assigned unique id.
    pub id: i64,
    /// Opaque display token (e.g. `#d62728`), passed through to renderers.
    pub color: String,
    pub name: String,
    pub seats: u32,
}

impl Party {
    pub fn new(id: i64, color: impl Into<String>, name: impl Into<String>, seats: u32) -> Self {
        Self {
            id,
            color: color.into(),
            name: name.into(),
            seats,
        }
    }
}

/// Field used to sort parties before seating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    ById,
    BySeats,
    ByName,
}

/// Order transform applied after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
    /// Even-indexed entries in order, then odd-indexed entries reversed.
    /// Puts the first entries at both ends of the hemicycle.
    Alternating,
}

/// Total number of seats across all parties.
pub fn total_seats(parties: &[Party]) -> u64 {
    parties.iter().map(|p| p.seats as u64).sum()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Seating order for `parties`.
///
/// Sorting is stable. With [`SortOrder::Alternating`], the list is reversed
/// before interleaving only when sorting by seat count, so the largest
/// parties land at the ends.
pub fn order_parties<'a>(
    parties: &'a [Party],
    field: SortField,
    order: SortOrder,
) -> Vec<&'a Party> {
    let mut sorted: Vec<&Party> = parties.iter().collect();
    match field {
        SortField::ById => sorted.sort_by_key(|p| p.id),
        SortField::BySeats => sorted.sort_by_key(|p| p.seats),
        SortField::ByName => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }

    match order {
        SortOrder::Ascending => sorted,
        SortOrder::Descending => {
            sorted.reverse();
            sorted
        }
        SortOrder::Alternating => {
            if field == SortField::BySeats {
                sorted.reverse();
            }
            let evens = sorted.iter().step_by(2).copied();
            let odds: Vec<&Party> = sorted.iter().skip(1).step_by(2).copied().collect();
            evens.chain(odds.into_iter().rev()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(parties: &[&Party]) -> Vec<i64> {
        parties.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Party> {
        vec![
            Party::new(3, "#ff0000", "Reds", 10),
            Party::new(1, "#0000ff", "blues", 30),
            Party::new(2, "#00ff00", "Greens", 20),
            Party::new(4, "#ffff00", "Yellows", 5),
        ]
    }

    #[test]
    fn by_id_ascending() {
        let parties = sample();
        let ordered = order_parties(&parties, SortField::ById, SortOrder::Ascending);
        assert_eq!(ids(&ordered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn by_seats_descending() {
        let parties = sample();
        let ordered = order_parties(&parties, SortField::BySeats, SortOrder::Descending);
        assert_eq!(ids(&ordered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn by_name_ignores_case() {
        let parties = sample();
        let ordered = order_parties(&parties, SortField::ByName, SortOrder::Ascending);
        assert_eq!(ids(&ordered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn alternating_by_seats_puts_largest_first() {
        let parties = vec![
            Party::new(1, "a", "A", 10),
            Party::new(2, "b", "B", 30),
            Party::new(3, "c", "C", 20),
        ];
        let ordered = order_parties(&parties, SortField::BySeats, SortOrder::Alternating);
        // Descending is B, C, A; evens B, A then odds reversed C.
        assert_eq!(ids(&ordered), vec![2, 1, 3]);
    }

    #[test]
    fn alternating_by_id_does_not_reverse() {
        let parties = sample();
        let ordered = order_parties(&parties, SortField::ById, SortOrder::Alternating);
        // Sorted 1, 2, 3, 4 → evens 1, 3 then odds reversed 4, 2.
        assert_eq!(ids(&ordered), vec![1, 3, 4, 2]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let parties = vec![
            Party::new(1, "a", "A", 5),
            Party::new(2, "b", "B", 5),
            Party::new(3, "c", "C", 5),
        ];
        let ordered = order_parties(&parties, SortField::BySeats, SortOrder::Ascending);
        assert_eq!(ids(&ordered), vec![1, 2, 3]);
    }

    #[test]
    fn sort_enums_use_snake_case() {
        let json = serde_json::to_string(&SortField::BySeats).unwrap();
        assert_eq!(json, "\"by_seats\"");
        let order: SortOrder = serde_json::from_str("\"alternating\"").unwrap();
        assert_eq!(order, SortOrder::Alternating);
    }

    #[test]
    fn total_seats_sums() {
        assert_eq!(total_seats(&sample()), 65);
    }
}
