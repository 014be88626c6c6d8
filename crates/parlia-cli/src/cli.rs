use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use parlia_logic::area::DrawingArea;
use parlia_logic::csv::parse_csv;
use parlia_logic::layout::{layout, LayoutOptions, LayoutResult};
use parlia_logic::party::{Party, SortField, SortOrder};
use parlia_logic::selection::Selection;

use crate::error::{CliError, Result};
use crate::harness::{run_harness, HarnessArgs};
use crate::logging::init_logging;
use crate::svg::{render_svg, SvgStyle};

#[derive(Debug, Parser)]
#[command(
    name = "parlia",
    about = "Semicircular parliament diagram layouts as JSON or SVG",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute a layout and print it as JSON.
    Layout(LayoutArgs),

    /// Render a layout as an SVG document.
    Svg(SvgArgs),

    /// Run the headless self-check sweep.
    Harness(HarnessArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortFieldArg {
    ById,
    BySeats,
    ByName,
}

impl From<SortFieldArg> for SortField {
    fn from(arg: SortFieldArg) -> Self {
        match arg {
            SortFieldArg::ById => SortField::ById,
            SortFieldArg::BySeats => SortField::BySeats,
            SortFieldArg::ByName => SortField::ByName,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    Ascending,
    Descending,
    Alternating,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Ascending => SortOrder::Ascending,
            SortOrderArg::Descending => SortOrder::Descending,
            SortOrderArg::Alternating => SortOrder::Alternating,
        }
    }
}

/// Inputs shared by every command that runs a layout.
#[derive(Debug, Args)]
pub struct LayoutInput {
    /// Party list CSV with header `id,color,name,seats`.
    pub parties: PathBuf,

    /// Drawing area width.
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// Drawing area height.
    #[arg(long, default_value_t = 500.0)]
    pub height: f64,

    /// JSON file with layout options; flags below override it.
    #[arg(long)]
    pub options: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub sort_field: Option<SortFieldArg>,

    #[arg(long, value_enum)]
    pub sort_order: Option<SortOrderArg>,

    #[arg(long)]
    pub inner_radius_ratio: Option<f64>,

    #[arg(long)]
    pub seat_radius_ratio: Option<f64>,

    #[arg(long)]
    pub padding: Option<f64>,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub input: LayoutInput,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct SvgArgs {
    #[command(flatten)]
    pub input: LayoutInput,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub no_border: bool,

    #[arg(long)]
    pub no_shadow: bool,

    #[arg(long, default_value = "#f2f2f2")]
    pub background: String,

    /// Highlight a party id (repeatable); others are dimmed.
    #[arg(long = "select")]
    pub select: Vec<i64>,
}

pub fn run_from_env() -> Result<()> {
    init_logging("info");
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Layout(args) => run_layout(args),
        Commands::Svg(args) => run_svg(args),
        Commands::Harness(args) => run_harness(args),
    }
}

pub fn load_parties(path: &Path) -> Result<Vec<Party>> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text).map_err(|source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Options file first, then command-line overrides.
pub fn resolve_options(input: &LayoutInput) -> Result<LayoutOptions> {
    let mut options = match &input.options {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => LayoutOptions::default(),
    };
    if let Some(field) = input.sort_field {
        options.sort_field = field.into();
    }
    if let Some(order) = input.sort_order {
        options.sort_order = order.into();
    }
    if let Some(ratio) = input.inner_radius_ratio {
        options.inner_radius_ratio = ratio;
    }
    if let Some(ratio) = input.seat_radius_ratio {
        options.seat_radius_ratio = ratio;
    }
    if let Some(padding) = input.padding {
        options.padding = padding;
    }
    Ok(options)
}

fn drawing_area(input: &LayoutInput) -> Result<DrawingArea> {
    if !(input.width > 0.0 && input.height > 0.0) {
        return Err(CliError::invalid(format!(
            "drawing area must be positive, got {}×{}",
            input.width, input.height
        )));
    }
    Ok(DrawingArea::new(input.width, input.height))
}

/// Load parties, resolve options and run the layout.
pub fn compute(input: &LayoutInput) -> Result<(DrawingArea, Vec<Party>, LayoutResult)> {
    let parties = load_parties(&input.parties)?;
    let options = resolve_options(input)?;
    let area = drawing_area(input)?;
    let result = layout(area, &parties, &options)?;
    if result.is_complete() {
        log::info!(
            "Laid out {} seats for {} parties in {} rows",
            result.seats_drawn,
            parties.len(),
            result.rows.len()
        );
    } else {
        log::warn!(
            "Can't fit all seats ({} of {} drawn), try reducing the seat size",
            result.seats_drawn,
            result.seats_total
        );
    }
    Ok((area, parties, result))
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_layout(args: LayoutArgs) -> Result<()> {
    let (_, _, result) = compute(&args.input)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    write_output(None, &format!("{json}\n"))
}

pub fn svg_style(args: &SvgArgs, party_count: usize) -> SvgStyle {
    let mut selection = Selection::new();
    for id in &args.select {
        selection.toggle(*id, party_count);
    }
    SvgStyle {
        border: !args.no_border,
        shadow: !args.no_shadow,
        background: args.background.clone(),
        selection,
    }
}

fn run_svg(args: SvgArgs) -> Result<()> {
    let (area, parties, result) = compute(&args.input)?;
    let style = svg_style(&args, parties.len());
    let svg = render_svg(area, &parties, &result, &style);
    write_output(args.output.as_deref(), &svg)
}
