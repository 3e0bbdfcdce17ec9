//! Command-line interface for the formatter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DEFAULT_VAR_NAME;
use crate::error::Result;
use crate::formatter::{default_output_path, format_constitution, format_sources, FormatSummary};
use crate::parser::parse_with_warnings;
use crate::source::{list_sources, read_source};

/// Constitution Formatter - Convert plain-text constitutions into structured literals.
#[derive(Parser)]
#[command(name = "constitution-formatter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a single constitution text file.
    Format {
        /// Unformatted constitution text file
        input: PathBuf,

        /// Output file (default: input path with a .js extension, or formatted_<stem>.js for .js input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variable name the literal is assigned to
        #[arg(short = 'n', long, default_value = DEFAULT_VAR_NAME)]
        var_name: String,
    },

    /// Format every .txt file in a directory.
    Batch {
        /// Directory containing unformatted constitution text files
        input_dir: PathBuf,

        /// Output directory (default: the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variable name for every file (default: derived from each file name)
        #[arg(short = 'n', long)]
        var_name: Option<String>,
    },

    /// Print the article outline of a constitution without writing anything.
    Inspect {
        /// Unformatted constitution text file
        input: PathBuf,

        /// Also list parser warnings
        #[arg(short, long)]
        warnings: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            var_name,
        } => format_command(&input, output.as_deref(), &var_name),
        Commands::Batch {
            input_dir,
            output,
            var_name,
        } => batch_command(&input_dir, output.as_deref(), var_name.as_deref()),
        Commands::Inspect { input, warnings } => inspect_command(&input, warnings),
    }
}

/// Print the counts line shared by `format` and `batch`.
fn print_summary(summary: &FormatSummary) {
    println!(
        "  {} articles, {} sections as {}",
        summary.articles,
        summary.sections,
        style(&summary.var_name).cyan()
    );
    if !summary.warnings.is_empty() {
        println!("  Warnings: {}", style(summary.warnings.len()).yellow().bold());
    }
}

/// Execute the format command.
fn format_command(input: &Path, output: Option<&Path>, var_name: &str) -> Result<()> {
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);

    println!(
        "{} {}",
        style("Formatting").bold(),
        style(input.display()).cyan()
    );

    let summary = format_constitution(input, &output, var_name)?;
    print_summary(&summary);

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        summary.output.display()
    );

    Ok(())
}

/// Execute the batch command.
fn batch_command(input_dir: &Path, output: Option<&Path>, var_name: Option<&str>) -> Result<()> {
    let output_dir = output.unwrap_or(input_dir);
    let sources = list_sources(input_dir)?;

    let pb = ProgressBar::new(sources.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let result = format_sources(&sources, output_dir, var_name, |path| {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_and_clear();

    let summaries = result?;
    for summary in &summaries {
        println!("{}", summary.output.display());
        print_summary(summary);
    }

    println!();
    println!(
        "{} {} file(s) into {}",
        style("Formatted").green().bold(),
        summaries.len(),
        output_dir.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(input: &Path, show_warnings: bool) -> Result<()> {
    let raw_text = read_source(input)?;
    let (document, warnings) = parse_with_warnings(&raw_text);

    for article in &document {
        println!(
            "{} {:<40} {} section(s)",
            style(format!("{:<14}", article.identifier)).cyan(),
            article.title,
            article.sections.len()
        );
    }

    println!();
    println!(
        "{} articles, {} sections, {} warning(s)",
        document.len(),
        document.section_count(),
        warnings.len()
    );

    if show_warnings {
        for warning in &warnings {
            println!("  {} {warning}", style("warning:").yellow());
        }
    }

    Ok(())
}
