//! CLI binary for urnal-md.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use urnal_md::{
    convert_entries, convert_entry, convert_file, journal, scan_journal, ConversionConfig,
    ConversionOutput, HeadingStyle,
};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Render one entry (stdout)
  urnal entry.md

  # Render from stdin
  cat entry.md | urnal -

  # Render a whole month file, one <article> per entry
  urnal --entries "journal/October 2026.txt" -o october.html

  # Conventional <h1>-<h6> headings instead of bold header lines
  urnal --heading-style leveled entry.md

  # JSON output with per-entry results and stats
  urnal --entries --json "journal/October 2026.txt"

  # List the months present in a journal directory
  urnal --index journal/

ENVIRONMENT VARIABLES:
  RUST_LOG    Override log filtering (e.g. urnal_md=trace shows every pass)
"#;

/// Render journal markdown to HTML fragments.
#[derive(Parser, Debug)]
#[command(
    name = "urnal",
    version,
    about = "Render journal markdown to HTML fragments",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to convert, or `-` for stdin.
    #[arg(required_unless_present = "index")]
    input: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "URNAL_OUTPUT")]
    output: Option<PathBuf>,

    /// Treat the input as a month file: split on `--` lines, one <article> per entry.
    #[arg(long, env = "URNAL_ENTRIES")]
    entries: bool,

    /// How `#` header lines are rendered.
    #[arg(long, env = "URNAL_HEADING_STYLE", value_enum, default_value = "bold-line")]
    heading_style: HeadingStyleArg,

    /// Output structured JSON (ConversionOutput) instead of HTML.
    #[arg(long, env = "URNAL_JSON")]
    json: bool,

    /// Print the years and months found in a journal directory, then exit.
    #[arg(long, value_name = "DIR", conflicts_with_all = ["output", "entries"])]
    index: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "URNAL_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "URNAL_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum HeadingStyleArg {
    BoldLine,
    Leveled,
}

impl From<HeadingStyleArg> for HeadingStyle {
    fn from(v: HeadingStyleArg) -> Self {
        match v {
            HeadingStyleArg::BoldLine => HeadingStyle::BoldLine,
            HeadingStyleArg::Leveled => HeadingStyle::Leveled,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Index mode ───────────────────────────────────────────────────────
    if let Some(ref dir) = cli.index {
        let years = scan_journal(dir).context("Failed to scan journal directory")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&years).context("Failed to serialise index")?
            );
        } else if years.is_empty() {
            if !cli.quiet {
                eprintln!("No month files found in {}", dir.display());
            }
        } else {
            for group in &years {
                println!("{}", group.year);
                for month in &group.months {
                    let path = journal::month_path(dir, *month, group.year);
                    println!("  {:<10} {}", month.name(), path.display());
                }
            }
        }
        return Ok(());
    }

    let config = ConversionConfig::builder()
        .heading_style(cli.heading_style.clone().into())
        .build()
        .context("Invalid configuration")?;
    let input = cli.input.as_deref().unwrap_or("-");

    // ── Convert ──────────────────────────────────────────────────────────
    let output = match (cli.entries, input) {
        (true, "-") => convert_entries(&read_input(input)?, &config),
        (true, path) => convert_file(path, &config).context("Conversion failed")?,
        (false, _) => convert_entry(&read_input(input)?, &config),
    };

    let rendered = if cli.json {
        serde_json::to_string_pretty(&output).context("Failed to serialise output")?
    } else {
        output.html.clone()
    };

    match cli.output {
        Some(ref path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!(
                    "Rendered {} entries ({} code blocks) in {}ms  →  {}",
                    output.stats.entries,
                    output.stats.code_blocks,
                    output.stats.duration_ms,
                    path.display(),
                );
            }
        }
        None => {
            write_stdout(&rendered)?;
            if cli.verbose {
                report(&output);
            }
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
    }
}

fn write_stdout(rendered: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .context("Failed to write to stdout")?;
    // Ensure a trailing newline on stdout.
    if !rendered.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}

fn report(output: &ConversionOutput) {
    eprintln!(
        "Rendered {} entries, {} code blocks, {} → {} bytes in {}ms",
        output.stats.entries,
        output.stats.code_blocks,
        output.stats.input_bytes,
        output.stats.output_bytes,
        output.stats.duration_ms,
    );
}
