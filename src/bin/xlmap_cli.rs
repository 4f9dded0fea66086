//! CLI tool for xlmap - turns an XLSX floor plan into an SVG diagram
//!
//! Usage:
//!   xlmap_cli plano.xlsx                       # SVG to stdout
//!   xlmap_cli plano.xlsx -o plano.svg          # SVG to file
//!   xlmap_cli plano.xlsx --mode npr --sheet NPR --json slots.json
//!   xlmap_cli plano.xlsx --list-sheets

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use xlmap::{
    build_floor_plan, parse_reference_list, LayoutConfig, ProcessingMode, SheetSelector,
    SheetSource, Workbook, XlmapError,
};

#[derive(Parser)]
#[command(name = "xlmap_cli")]
#[command(about = "Generate an SVG warehouse map from an Excel floor plan")]
#[command(version)]
struct Cli {
    #[arg(help = "Path to the .xlsx workbook")]
    input: PathBuf,
    #[arg(long, value_enum, help = "Sheet convention [default: general]")]
    mode: Option<ProcessingMode>,
    #[arg(long, conflicts_with = "sheet_index", help = "Sheet name to read")]
    sheet: Option<String>,
    #[arg(long, value_name = "N", help = "Zero-based sheet index to read")]
    sheet_index: Option<usize>,
    #[arg(long = "reference", value_name = "ID", help = "Reference location id (repeatable)")]
    references: Vec<String>,
    #[arg(long, value_name = "PATH", help = "File with one reference location id per line")]
    references_file: Option<PathBuf>,
    #[arg(long, value_name = "COLOR", help = "Fill color for reference locations")]
    color: Option<String>,
    #[arg(long, value_name = "PATH", help = "JSON config file; flags override it")]
    config: Option<PathBuf>,
    #[arg(long, short, value_name = "PATH", help = "Write the SVG here instead of stdout")]
    output: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Also write the location table as JSON")]
    json: Option<PathBuf>,
    #[arg(long, help = "Print the workbook's sheet names and exit")]
    list_sheets: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                XlmapError::SheetNotFound(_) | XlmapError::Config(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> xlmap::Result<()> {
    let data = fs::read(&cli.input)?;
    let mut workbook = Workbook::from_bytes(&data)?;

    if cli.list_sheets {
        let mut stdout = io::stdout().lock();
        for (idx, name) in workbook.sheet_names().iter().enumerate() {
            writeln!(stdout, "{idx}\t{name}")?;
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let plan = build_floor_plan(&mut workbook, &config)?;

    let stats = plan.stats();
    tracing::info!(
        input = %cli.input.display(),
        total = stats.total,
        references = stats.references,
        normal = stats.normal,
        "floor plan generated"
    );

    if let Some(path) = &cli.json {
        fs::write(path, plan.table.to_json()?)?;
        tracing::info!(path = %path.display(), "wrote location table");
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &plan.svg)?;
            tracing::info!(path = %path.display(), "wrote svg");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(plan.svg.as_bytes())?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> xlmap::Result<LayoutConfig> {
    let mut config = match &cli.config {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(name) = &cli.sheet {
        config.sheet = SheetSelector::Name(name.clone());
    } else if let Some(idx) = cli.sheet_index {
        config.sheet = SheetSelector::Index(idx);
    }
    if let Some(color) = &cli.color {
        config.reference_color.clone_from(color);
    }

    if references_given(cli) {
        let mut references = cli.references.clone();
        if let Some(path) = &cli.references_file {
            references.extend(parse_reference_list(&fs::read_to_string(path)?));
        }
        config.reference_locations = references;
    }

    if references_ignored(cli, &config) {
        tracing::warn!("reference ids are ignored in npr mode");
    }

    Ok(config)
}

fn references_given(cli: &Cli) -> bool {
    !cli.references.is_empty() || cli.references_file.is_some()
}

/// NPR sheets use a fixed reference marker, so user ids have no effect.
fn references_ignored(cli: &Cli, config: &LayoutConfig) -> bool {
    config.mode == ProcessingMode::Npr && references_given(cli)
}
