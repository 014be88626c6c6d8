//! End-to-end tests: CSV file on disk → layout → SVG file on disk.

use clap::Parser;
use parlia_cli::cli::{compute, run, Cli, Commands};
use parlia_cli::error::CliError;
use tempfile::tempdir;

const PARTIES: &str = "id,color,name,seats\n\
    1,#e41a1c,Reds,40\n\
    2,#377eb8,Blues,25\n\
    3,#4daf4a,Greens,15\n";

#[test]
fn svg_command_writes_document() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("parties.csv");
    let out = dir.path().join("parliament.svg");
    std::fs::write(&csv, PARTIES).unwrap();

    let cli = Cli::try_parse_from([
        "parlia",
        "svg",
        csv.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--width",
        "800",
        "--height",
        "400",
    ])
    .unwrap();
    run(cli).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<!-- Created with parlia -->"));
    assert_eq!(svg.matches("class=\"seat-party-1\"").count(), 40);
    assert_eq!(svg.matches("class=\"seat-party-2\"").count(), 25);
    assert_eq!(svg.matches("class=\"seat-party-3\"").count(), 15);
    assert!(!svg.contains("CAN&apos;T FIT"));
}

#[test]
fn compute_applies_sort_flags() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("parties.csv");
    std::fs::write(&csv, PARTIES).unwrap();

    let cli = Cli::try_parse_from([
        "parlia",
        "layout",
        csv.to_str().unwrap(),
        "--sort-order",
        "descending",
    ])
    .unwrap();
    let Commands::Layout(args) = cli.command else {
        panic!("expected layout command");
    };
    let (_, parties, result) = compute(&args.input).unwrap();
    assert_eq!(parties.len(), 3);
    assert!(result.is_complete());
    assert_eq!(result.seats[0].party_id, 3);
}

#[test]
fn invalid_csv_reports_path() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("broken.csv");
    std::fs::write(&csv, "id,colour,name,seats\n1,a,b,2\n").unwrap();

    let cli = Cli::try_parse_from(["parlia", "layout", csv.to_str().unwrap()]).unwrap();
    let err = run(cli).unwrap_err();
    assert!(matches!(err, CliError::Csv { .. }));
    assert!(err.to_string().contains("broken.csv"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let cli = Cli::try_parse_from([
        "parlia",
        "layout",
        dir.path().join("nope.csv").to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(run(cli), Err(CliError::Io(_))));
}
