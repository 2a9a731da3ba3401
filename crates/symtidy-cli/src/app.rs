//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use symtidy_core::outline::parse_response;
use symtidy_core::{kind_table, OutlineBuilder, Settings, TextRenderer};

/// Output format for outlines and tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "symtidy")]
#[command(author, version, about = "Clean outlines from language server symbols", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the outline of a documentSymbol response
    Outline {
        /// JSON file holding the response (`-` reads stdin)
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep the server's order instead of sorting by kind
        #[arg(long)]
        no_sort: bool,

        /// Deepest level shown, 1 being the top level
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List every symbol kind with its weight and label
    Kinds {
        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Outline {
            input,
            format,
            config,
            no_sort,
            max_depth,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            if no_sort {
                settings.outline.sort = false;
            }
            if max_depth.is_some() {
                settings.outline.max_depth = max_depth;
            }
            outline_command(&input, format, &settings)?
        }
        Commands::Kinds { format } => kinds_command(format)?,
    };

    print!("{}", output);
    Ok(())
}

/// Execute the outline command, returning the rendered output
pub fn outline_command(input: &Path, format: OutputFormat, settings: &Settings) -> Result<String> {
    let content = read_input(input)?;
    let symbols = parse_response(&content)
        .with_context(|| format!("Failed to parse symbols from {}", input.display()))?;
    info!("Read {} top-level symbols from {}", symbols.len(), input.display());

    let outline = OutlineBuilder::new(settings.outline.clone()).build(&symbols);

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&outline)
                .context("Failed to serialize outline to JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(TextRenderer::new(settings.render.clone()).render(&outline)),
    }
}

/// Execute the kinds command, returning the rendered table
pub fn kinds_command(format: OutputFormat) -> Result<String> {
    let table = kind_table();

    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&table).context("Failed to serialize kind table")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut output = format!("{:<14} {:>7} {:>6}\n", "LABEL", "ORDINAL", "WEIGHT");
            for info in &table {
                output.push_str(&format!(
                    "{:<14} {:>7} {:>6}\n",
                    info.label, info.ordinal, info.weight
                ));
            }
            Ok(output)
        }
    }
}

/// Read the input file, or stdin for `-`
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read symbols from stdin")?;
        return Ok(content);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

/// Load settings from a config file, or discover one in the current directory
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => {
            let settings = Settings::discover(Path::new("."))
                .context("Failed to load config from current directory")?;
            debug!("Using settings: {:?}", settings);
            Ok(settings)
        }
    }
}
