//! Command-line interface implementation.
//!
//! The `hcard` binary is a development surface around the pure rendering
//! core: it owns all file I/O, reads an adventurer snapshot from JSON, and
//! writes the rendered document to stdout or a file.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::RenderConfig;
use crate::metadata;
use crate::render;
use crate::snapshot::AdventurerSnapshot;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// HeroCard - render adventurer snapshots to SVG and JSON metadata
#[derive(Parser)]
#[command(name = "hcard")]
#[command(about = "HeroCard - render adventurer snapshots to SVG and JSON metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output flavor for the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The SVG document itself
    Svg,
    /// The Base64 JSON metadata data URI
    Metadata,
    /// The trait list as plain JSON
    Traits,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a snapshot JSON file
    Render {
        /// Input JSON file containing the adventurer snapshot
        input: PathBuf,

        /// Output file. Writes to stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to emit
        #[arg(long, value_enum, default_value = "svg")]
        format: Format,

        /// Token id baked into the metadata document
        #[arg(long, default_value = "1")]
        token_id: u64,

        /// Render only this page (0-based) instead of the full cycle
        #[arg(long)]
        page: Option<usize>,

        /// Optional hcard.toml with page/timing overrides
        #[arg(long)]
        config: Option<PathBuf>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            format,
            token_id,
            page,
            config,
            strict,
        } => run_render(
            &input,
            output.as_deref(),
            format,
            token_id,
            page,
            config.as_deref(),
            strict,
        ),
    }
}

/// Execute the render command
fn run_render(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    format: Format,
    token_id: u64,
    page: Option<usize>,
    config_path: Option<&std::path::Path>,
    strict: bool,
) -> ExitCode {
    let raw = match fs::read_to_string(input) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let snapshot: AdventurerSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: Invalid snapshot in '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let config = match config_path {
        Some(path) => match RenderConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => RenderConfig::default(),
    };

    let (document, warnings) = match render_document(&snapshot, &config, format, token_id, page) {
        Ok(result) => result,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for warning in &warnings {
        eprintln!("Warning: {}", warning.message);
    }
    if strict && !warnings.is_empty() {
        eprintln!("Error: {} warning(s) in strict mode", warnings.len());
        return ExitCode::from(EXIT_ERROR);
    }

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &document) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        None => println!("{}", document),
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Produce the requested document plus collected warnings.
fn render_document(
    snapshot: &AdventurerSnapshot,
    config: &RenderConfig,
    format: Format,
    token_id: u64,
    page: Option<usize>,
) -> Result<(String, Vec<crate::template::Warning>), String> {
    match (format, page) {
        (Format::Svg, None) => Ok(render::render_image_with_warnings(snapshot, config)),
        (Format::Svg, Some(index)) => {
            render::render_page_image_with_warnings(snapshot, index, config)
                .map_err(|e| e.to_string())
        }
        (Format::Metadata, None) => Ok(metadata::render_metadata_with_warnings(
            token_id, snapshot, config,
        )),
        (Format::Metadata, Some(index)) => metadata::render_page(token_id, snapshot, index, config)
            .map(|document| (document, Vec::new()))
            .map_err(|e| e.to_string()),
        (Format::Traits, _) => {
            let traits = metadata::render_traits(snapshot);
            serde_json::to_string_pretty(&traits)
                .map(|json| (json, Vec::new()))
                .map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::AdventurerSnapshot;

    #[test]
    fn test_render_document_svg() {
        let snapshot = AdventurerSnapshot {
            health: 40,
            ..AdventurerSnapshot::default()
        };
        let (document, _) = render_document(
            &snapshot,
            &RenderConfig::default(),
            Format::Svg,
            1,
            None,
        )
        .unwrap();
        assert!(document.starts_with("<svg "));
    }

    #[test]
    fn test_render_document_page_out_of_range() {
        let snapshot = AdventurerSnapshot {
            health: 40,
            ..AdventurerSnapshot::default()
        };
        let err = render_document(
            &snapshot,
            &RenderConfig::default(),
            Format::Svg,
            1,
            Some(9),
        )
        .unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_render_document_traits_json() {
        let snapshot = AdventurerSnapshot::default();
        let (document, warnings) = render_document(
            &snapshot,
            &RenderConfig::default(),
            Format::Traits,
            1,
            None,
        )
        .unwrap();
        assert!(warnings.is_empty());
        let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert!(parsed.as_array().unwrap().len() >= 8);
    }
}
