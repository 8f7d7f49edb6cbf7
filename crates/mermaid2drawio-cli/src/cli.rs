//! Command-line interface for the mermaid2drawio utility
//!
//! Converts Mermaid sequence and ER diagrams into draw.io XML.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use mermaid2drawio::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use mermaid2drawio::plugins::Orchestrator;
use mermaid2drawio::{DiagramKind, LayoutConfig};

/// mermaid2drawio - Convert Mermaid diagrams to draw.io XML
///
/// Without a subcommand, reads a diagram from stdin and writes the document
/// to stdout.
#[derive(Parser)]
#[command(name = "mermaid2drawio")]
#[command(about = "Convert Mermaid sequence and ER diagrams to draw.io XML")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print errors and progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Mermaid diagram to draw.io XML
    Convert {
        /// Input file containing the diagram (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the XML document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the input as this dialect instead of detecting it (sequence|er)
        #[arg(long, value_name = "TYPE")]
        diagram_type: Option<String>,

        /// Number of entities per row in ER layouts
        #[arg(long, value_name = "N")]
        entities_per_row: Option<usize>,
    },

    /// Detect the diagram dialect of the input
    Detect {
        /// Input file to analyze (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported diagram types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the program version
    Version,
}

/// One row of the `types` listing
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub name: &'static str,
    pub keyword: &'static str,
    pub description: &'static str,
}

impl From<DiagramKind> for TypeInfo {
    fn from(kind: DiagramKind) -> Self {
        Self {
            name: kind.as_str(),
            keyword: kind.keyword(),
            description: kind.description(),
        }
    }
}

/// Main CLI application
pub struct ConvertApp {
    orchestrator: Orchestrator,
}

impl ConvertApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_layout(LayoutConfig::default())
    }

    /// Create a new application instance with a layout config
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            orchestrator: Orchestrator::new().with_layout(layout),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("mermaid2drawio v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            None => self.convert_command(None, None, None, None, cli.verbose),
            Some(Commands::Convert {
                input,
                output,
                diagram_type,
                entities_per_row,
            }) => self.convert_command(input, output, diagram_type, entities_per_row, cli.verbose),
            Some(Commands::Detect { input }) => self.detect_command(input, cli.verbose),
            Some(Commands::Types { json }) => self.types_command(json, cli.verbose),
            Some(Commands::Version) => {
                println!("{}", version_line());
                Ok(())
            }
        }
    }

    /// Handle the convert command
    fn convert_command(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        diagram_type: Option<String>,
        entities_per_row: Option<usize>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        if let Some(n) = entities_per_row {
            let layout = self.orchestrator.layout().clone().with_entities_per_row(n);
            self.orchestrator = Orchestrator::new().with_layout(layout);
        }

        let kind = match diagram_type {
            Some(name) => {
                let kind: DiagramKind = name.parse()?;
                debug!(diagram_type = kind.as_str(), "Detection skipped");
                kind
            }
            None => self.orchestrator.detect_diagram_type(&content),
        };

        let xml = self.orchestrator.process_as(kind, &content)?;

        if verbose {
            eprintln!("Converted {} diagram", kind);
        }
        info!(output_len = xml.len(), "Conversion finished");

        self.write_output(output, &xml)
    }

    /// Handle the detect command
    fn detect_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        println!("{}", self.orchestrator.detect_diagram_type(&content));
        Ok(())
    }

    /// Handle the types command
    fn types_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported diagram types");
        }

        println!("{}", render_types(json)?);
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.is_empty() && !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for ConvertApp {
    fn default() -> Self {
        Self::new()
    }
}

/// `mermaid2drawio v<version>`
pub fn version_line() -> String {
    format!("mermaid2drawio v{}", env!("CARGO_PKG_VERSION"))
}

/// Text for the `types` command
pub fn render_types(json: bool) -> Result<String> {
    let types: Vec<TypeInfo> = DiagramKind::ALL.into_iter().map(TypeInfo::from).collect();

    if json {
        let listing = serde_json::json!({
            "supported_types": types,
            "total": types.len(),
        });
        return Ok(serde_json::to_string_pretty(&listing)?);
    }

    let mut out = String::from("Supported diagram types:\n");
    for t in &types {
        out.push_str(&format!("  {:<9}- {}\n", t.name, t.description));
    }
    out.push_str(&format!("\nTotal: {} diagram types supported", types.len()));
    Ok(out)
}
