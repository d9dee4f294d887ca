//! Command-line interface for the restructurer.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::io::default_output_path;
use crate::restructure::restructure_file_with;
use crate::splitting::{KeywordFallback, SplitEngine};

/// Yoga KB Restructurer - split knowledge records into info and precautions.
#[derive(Parser)]
#[command(name = "yogakb-restructurer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Restructure a JSON knowledge file.
    Restructure {
        /// JSON file holding an array of records
        input: PathBuf,

        /// Output file (default: <input stem>_restructured.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Split records in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Split a single block of text and print both parts.
    Split {
        /// Text file to read (default: stdin)
        file: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Restructure {
            input,
            output,
            parallel,
        } => restructure_command(&input, output.as_deref(), parallel),
        Commands::Split { file } => split_command(file.as_deref()),
    }
}

/// Execute the restructure command.
fn restructure_command(input: &Path, output: Option<&Path>, parallel: bool) -> Result<()> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    println!(
        "{} {}",
        style("Restructuring").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new(0);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} records")
            .expect("valid template"),
    );

    let result = restructure_file_with(input, &output_path, parallel, |total| {
        pb.set_length(total as u64);
        pb.inc(1);
    });
    pb.finish_and_clear();
    let summary = result?;

    println!("  Records: {}", summary.total);
    println!("  Restructured: {}", style(summary.restructured).green());
    println!("  Passed through: {}", summary.passed_through);
    println!("  With explicit precautions: {}", summary.with_clauses);
    if summary.with_fallback > 0 {
        println!(
            "  Fallback precautions: {}",
            style(summary.with_fallback).yellow().bold()
        );
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Execute the split command.
fn split_command(file: Option<&Path>) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let engine: SplitEngine<KeywordFallback> = SplitEngine::default();
    let result = engine.split(&content);

    println!("{}", style("Info:").bold());
    println!("{}", result.info);
    println!();
    println!("{}", style("Precautions:").bold());
    println!("{}", result.precautions);

    if result.used_fallback {
        tracing::info!("No safety clause found, used fallback precaution");
    }

    Ok(())
}
