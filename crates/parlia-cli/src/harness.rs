//! Headless self-check harness.
//!
//! Sweeps the layout engine over built-in scenarios, seat-count and option
//! grids, and the bundled sample party file. Runs entirely in-process and
//! touches no files.
//!
//! Usage:
//!   parlia harness
//!   parlia harness --verbose

use clap::Args;
use parlia_logic::area::DrawingArea;
use parlia_logic::csv::{parse_csv, to_csv};
use parlia_logic::layout::{layout, LayoutOptions, LayoutResult};
use parlia_logic::matrix::SeatMatrix;
use parlia_logic::party::{Party, SortField, SortOrder};
use parlia_logic::rows::total_capacity;
use parlia_logic::selection::Selection;

use crate::error::{CliError, Result};

/// Below this many seats the default seat size leaves too few rows to fit
/// every seat, so the sweep only checks invariants there.
const SWEEP_COMPLETE_FROM: u32 = 10;

// ── Sample party file (bundled with the repository) ────────────────────
const SAMPLE_CSV: &str = include_str!("../../../data/sample_parties.csv");

#[derive(Debug, Args)]
pub struct HarnessArgs {
    /// Print every check, not only failures.
    #[arg(long)]
    pub verbose: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

fn check(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> CheckResult {
    CheckResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

pub fn run_harness(args: HarnessArgs) -> Result<()> {
    println!("=== Parlia Layout Harness ===\n");
    let results = collect_results(args.verbose);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        return Err(CliError::HarnessFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Run every section and gather the results.
pub fn collect_results(verbose: bool) -> Vec<CheckResult> {
    let mut results = Vec::new();

    // 1. Bundled sample file
    results.extend(validate_sample_file(verbose));

    // 2. Reference scenarios
    results.extend(validate_scenarios(verbose));

    // 3. Seat-count sweep
    results.extend(validate_seat_sweep(verbose));

    // 4. Option grid
    results.extend(validate_option_grid(verbose));

    // 5. Selection bookkeeping
    results.extend(validate_selection(verbose));

    results
}

/// Structural invariants that hold for every successful layout.
fn invariant_violations(result: &LayoutResult) -> Vec<String> {
    let mut problems = Vec::new();

    if result.seats_drawn > result.seats_total {
        problems.push(format!(
            "drew {} of {} seats",
            result.seats_drawn, result.seats_total
        ));
    }
    let capacity = total_capacity(&result.rows);
    if capacity > result.seats_total {
        problems.push(format!(
            "capacity {} exceeds {} seats",
            capacity, result.seats_total
        ));
    }

    let matrix = SeatMatrix::new(&result.rows);
    for (i, row) in result.rows.iter().enumerate() {
        if row.capacity == 0 {
            continue;
        }
        let (left, right) = matrix.row_padding(i);
        if left != right && left != right + 1 {
            problems.push(format!("row {} padded {}/{}", i, left, right));
        }
    }

    let min = 2.0 * result.seat_radius - 1e-6;
    'outer: for (i, a) in result.seats.iter().enumerate() {
        for b in &result.seats[i + 1..] {
            let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if d < min {
                problems.push(format!(
                    "seats at ({:.1},{:.1}) and ({:.1},{:.1}) overlap",
                    a.x, a.y, b.x, b.y
                ));
                break 'outer;
            }
        }
    }

    problems
}

fn invariant_check(name: String, result: &LayoutResult) -> CheckResult {
    let problems = invariant_violations(result);
    let detail = if problems.is_empty() {
        format!(
            "{}/{} seats in {} rows",
            result.seats_drawn,
            result.seats_total,
            result.rows.len()
        )
    } else {
        problems.join("; ")
    };
    check(name, problems.is_empty(), detail)
}

// ── 1. Sample File ──────────────────────────────────────────────────────

fn validate_sample_file(verbose: bool) -> Vec<CheckResult> {
    println!("--- Sample Party File ---");
    let mut results = Vec::new();

    let parties = match parse_csv(SAMPLE_CSV) {
        Ok(p) => p,
        Err(e) => {
            results.push(check("sample_parse", false, format!("CSV error: {}", e)));
            return results;
        }
    };
    results.push(check(
        "sample_parse",
        !parties.is_empty(),
        format!("{} parties loaded", parties.len()),
    ));

    let round_trip = parse_csv(&to_csv(&parties));
    results.push(check(
        "sample_csv_round_trip",
        round_trip.as_ref() == Ok(&parties),
        "export then import yields the same parties",
    ));

    match layout(
        DrawingArea::new(1000.0, 500.0),
        &parties,
        &LayoutOptions::default(),
    ) {
        Ok(result) => {
            results.push(check(
                "sample_complete",
                result.is_complete(),
                format!("{}/{} seats drawn", result.seats_drawn, result.seats_total),
            ));
            results.push(invariant_check("sample_invariants".into(), &result));
            if verbose {
                println!("  Rows (inner → outer):");
                for (i, row) in result.rows.iter().enumerate() {
                    println!(
                        "    {:2}: r={:7.2} seats={:3} margin={:.3}",
                        i, row.radius, row.capacity, row.circumferential_margin
                    );
                }
            }
        }
        Err(e) => results.push(check("sample_complete", false, e.to_string())),
    }

    results
}

// ── 2. Reference Scenarios ──────────────────────────────────────────────

fn validate_scenarios(_verbose: bool) -> Vec<CheckResult> {
    println!("--- Reference Scenarios ---");
    let mut results = Vec::new();
    let defaults = LayoutOptions::default();

    // Two equal parties
    let parties = vec![
        Party::new(2, "#377eb8", "Blues", 50),
        Party::new(1, "#e41a1c", "Reds", 50),
    ];
    match layout(DrawingArea::new(1000.0, 500.0), &parties, &defaults) {
        Ok(r) => results.push(check(
            "scenario_even_split",
            r.seats_drawn == 100 && r.seats.first().map(|s| s.party_id) == Some(1),
            format!(
                "{} drawn, first seat party {:?}",
                r.seats_drawn,
                r.seats.first().map(|s| s.party_id)
            ),
        )),
        Err(e) => results.push(check("scenario_even_split", false, e.to_string())),
    }

    // Single party
    let parties = vec![Party::new(1, "#4daf4a", "Greens", 10)];
    match layout(DrawingArea::new(800.0, 400.0), &parties, &defaults) {
        Ok(r) => results.push(check(
            "scenario_single_party",
            r.seats_drawn == 10 && r.seats.iter().all(|s| s.party_id == 1),
            format!("{} drawn in {} rows", r.seats_drawn, r.rows.len()),
        )),
        Err(e) => results.push(check("scenario_single_party", false, e.to_string())),
    }

    // Alternating by seats
    let parties = vec![
        Party::new(1, "a", "A", 10),
        Party::new(2, "b", "B", 30),
        Party::new(3, "c", "C", 20),
    ];
    let options = LayoutOptions {
        sort_field: SortField::BySeats,
        sort_order: SortOrder::Alternating,
        ..LayoutOptions::default()
    };
    match layout(DrawingArea::new(1000.0, 500.0), &parties, &options) {
        Ok(r) => {
            let mut order: Vec<i64> = Vec::new();
            for s in &r.seats {
                if order.last() != Some(&s.party_id) {
                    order.push(s.party_id);
                }
            }
            results.push(check(
                "scenario_alternating",
                order == vec![2, 1, 3],
                format!("seating order {:?}", order),
            ));
        }
        Err(e) => results.push(check("scenario_alternating", false, e.to_string())),
    }

    // Seats too large for a single row
    let parties = vec![Party::new(1, "a", "A", 50), Party::new(2, "b", "B", 50)];
    let options = LayoutOptions {
        seat_radius_ratio: 0.05,
        ..LayoutOptions::default()
    };
    match layout(DrawingArea::new(1000.0, 500.0), &parties, &options) {
        Ok(r) => results.push(check(
            "scenario_no_rows",
            r.seats_drawn == 0 && r.seats_total == 100 && !r.is_complete(),
            format!("{}/{} drawn", r.seats_drawn, r.seats_total),
        )),
        Err(e) => results.push(check("scenario_no_rows", false, e.to_string())),
    }

    // Idempotence
    let parties = vec![
        Party::new(4, "d", "Delta", 17),
        Party::new(1, "a", "Alpha", 41),
        Party::new(3, "c", "Charlie", 8),
    ];
    let area = DrawingArea::new(900.0, 700.0);
    let a = layout(area, &parties, &defaults);
    let b = layout(area, &parties, &defaults);
    results.push(check(
        "scenario_idempotent",
        a.is_ok() && a == b,
        "two identical runs produce identical seats",
    ));

    results
}

// ── 3. Seat-Count Sweep ─────────────────────────────────────────────────

fn validate_seat_sweep(verbose: bool) -> Vec<CheckResult> {
    println!("--- Seat-Count Sweep ---");
    let mut results = Vec::new();
    let area = DrawingArea::new(1000.0, 500.0);
    let defaults = LayoutOptions::default();

    let mut incomplete = Vec::new();
    let mut broken = Vec::new();
    for total in (1u32..=60).chain((75..=750).step_by(25)) {
        let big = total.div_ceil(2);
        let small = total - big;
        let mut parties = vec![Party::new(1, "#111111", "Majority", big)];
        if small > 0 {
            parties.push(Party::new(2, "#222222", "Minority", small));
        }
        match layout(area, &parties, &defaults) {
            Ok(r) => {
                if !r.is_complete() && total >= SWEEP_COMPLETE_FROM {
                    incomplete.push(total);
                }
                let problems = invariant_violations(&r);
                if !problems.is_empty() {
                    broken.push(format!("{}: {}", total, problems.join("; ")));
                }
                if verbose && total % 150 == 0 {
                    println!("  {:4} seats → {:2} rows", total, r.rows.len());
                }
            }
            Err(e) => broken.push(format!("{}: {}", total, e)),
        }
    }

    results.push(check(
        "sweep_invariants",
        broken.is_empty(),
        if broken.is_empty() {
            "all seat counts satisfy layout invariants".to_string()
        } else {
            broken.join(" | ")
        },
    ));
    results.push(check(
        "sweep_complete",
        incomplete.is_empty(),
        if incomplete.is_empty() {
            format!(
                "every seat count from {} fits with default options",
                SWEEP_COMPLETE_FROM
            )
        } else {
            format!("shortfall at {:?}", incomplete)
        },
    ));

    results
}

// ── 4. Option Grid ──────────────────────────────────────────────────────

fn validate_option_grid(_verbose: bool) -> Vec<CheckResult> {
    println!("--- Option Grid ---");
    let mut results = Vec::new();
    let parties = match parse_csv(SAMPLE_CSV) {
        Ok(p) => p,
        Err(e) => {
            results.push(check("grid_parties", false, e.to_string()));
            return results;
        }
    };

    let areas = [(1000.0, 500.0), (640.0, 900.0), (1920.0, 400.0)];
    let inner_ratios = [2.5, 4.0, 5.0, 8.0];
    let seat_ratios = [1.5, 2.5, 4.0];

    for &(w, h) in &areas {
        for &inner in &inner_ratios {
            for &seat in &seat_ratios {
                let options = LayoutOptions {
                    inner_radius_ratio: inner,
                    seat_radius_ratio: seat,
                    ..LayoutOptions::default()
                };
                let name = format!("grid_{}x{}_inner{}_seat{}", w, h, inner, seat);
                match layout(DrawingArea::new(w, h), &parties, &options) {
                    Ok(r) => results.push(invariant_check(name, &r)),
                    Err(e) => results.push(check(name, false, e.to_string())),
                }
            }
        }
    }

    results
}

// ── 5. Selection ────────────────────────────────────────────────────────

fn validate_selection(verbose: bool) -> Vec<CheckResult> {
    println!("--- Selection ---");
    let mut results = Vec::new();

    let mut selection = Selection::new();
    results.push(check(
        "selection_empty_shows_all",
        selection.is_selected(1) && selection.seat_opacity(1) == 1.0,
        "empty selection keeps every party opaque",
    ));

    selection.toggle(1, 3);
    results.push(check(
        "selection_dims_others",
        selection.is_selected(1) && !selection.is_selected(2),
        format!(
            "seat opacity of unselected party {}",
            selection.seat_opacity(2)
        ),
    ));

    selection.toggle(2, 3);
    selection.toggle(3, 3);
    results.push(check(
        "selection_full_resets",
        selection.is_empty(),
        "selecting every party clears the selection",
    ));

    let parties = parse_csv(SAMPLE_CSV).unwrap_or_default();
    let mut selection = Selection::new();
    selection.toggle(1, parties.len());
    selection.toggle(5, parties.len());
    let (seats, percent) = selection.selected_seats(&parties);
    if verbose {
        println!("  selected parties 1, 5: {} seats ({}%)", seats, percent);
    }
    results.push(check(
        "selection_seat_share",
        (seats, percent) == (138, 53),
        format!("{seats} seats ({percent}%) selected, expected 138 (53%)"),
    ));

    results
}
