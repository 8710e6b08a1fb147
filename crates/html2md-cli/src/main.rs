//! `html2md`: convert an HTML document to Markdown.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use html2md::{BulletStyle, Conversion, ConversionOptions, EmphasisSymbol, ListIndentType, NewlineStyle};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Exit code used by `--strict` when the conversion reported anomalies.
const STRICT_FAILURE: u8 = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Bullet {
    #[value(alias = "-")]
    Dash,
    #[value(alias = "*")]
    Asterisk,
    #[value(alias = "+")]
    Plus,
}

impl From<Bullet> for BulletStyle {
    fn from(bullet: Bullet) -> Self {
        match bullet {
            Bullet::Dash => Self::Dash,
            Bullet::Asterisk => Self::Asterisk,
            Bullet::Plus => Self::Plus,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emphasis {
    #[value(alias = "*")]
    Asterisk,
    #[value(alias = "_")]
    Underscore,
}

impl From<Emphasis> for EmphasisSymbol {
    fn from(symbol: Emphasis) -> Self {
        match symbol {
            Emphasis::Asterisk => Self::Asterisk,
            Emphasis::Underscore => Self::Underscore,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndentType {
    Spaces,
    Tabs,
}

impl From<IndentType> for ListIndentType {
    fn from(indent: IndentType) -> Self {
        match indent {
            IndentType::Spaces => Self::Spaces,
            IndentType::Tabs => Self::Tabs,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Newline {
    Spaces,
    Backslash,
}

impl From<Newline> for NewlineStyle {
    fn from(newline: Newline) -> Self {
        match newline {
            Newline::Spaces => Self::Spaces,
            Newline::Backslash => Self::Backslash,
        }
    }
}

/// Convert HTML to Markdown
#[derive(Parser, Debug)]
#[command(name = "html2md", author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Input HTML file, `-` or nothing for stdin
    input: Option<PathBuf>,

    /// Write the output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file with conversion options; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bullet character for unordered lists
    #[arg(long, value_enum)]
    bullet: Option<Bullet>,

    /// Marker used for emphasis and strong emphasis
    #[arg(long, value_enum)]
    emphasis_symbol: Option<Emphasis>,

    /// Spaces per nested list level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    list_indent_width: Option<u8>,

    /// Indent nested lists with spaces or tabs
    #[arg(long, value_enum)]
    list_indent_type: Option<IndentType>,

    /// How `<br>` is written
    #[arg(long, value_enum)]
    newline_style: Option<Newline>,

    /// Prepend YAML front matter built from `<head>`
    #[arg(long)]
    with_metadata: bool,

    /// Print `{"markdown", "diagnostics"}` as JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 2 when any anomaly was reported
    #[arg(long)]
    strict: bool,

    /// Do not print diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

#[tracing::instrument(skip_all)]
fn run(cli: &Cli) -> Result<ExitCode> {
    let options = build_options(cli)?;
    let html = read_input(cli.input.as_deref())?;

    let conversion = html2md::convert_reader(html.as_slice(), &options).context("Failed to convert HTML")?;
    tracing::debug!(
        bytes = conversion.markdown.len(),
        diagnostics = conversion.diagnostics.len(),
        "conversion finished"
    );

    if !cli.quiet {
        for diagnostic in &conversion.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }

    let rendered = if cli.json {
        render_json(&conversion)?
    } else {
        with_trailing_newline(conversion.markdown.clone())
    };
    write_output(cli.output.as_deref(), &rendered)?;

    if cli.strict && !conversion.diagnostics.is_empty() {
        return Ok(ExitCode::from(STRICT_FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

fn build_options(cli: &Cli) -> Result<ConversionOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Error reading config file {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ConversionOptions::default(),
    };

    if let Some(bullet) = cli.bullet {
        options.bullet = bullet.into();
    }
    if let Some(symbol) = cli.emphasis_symbol {
        options.emphasis_symbol = symbol.into();
    }
    if let Some(width) = cli.list_indent_width {
        options.list_indent_width = usize::from(width);
    }
    if let Some(indent) = cli.list_indent_type {
        options.list_indent_type = indent.into();
    }
    if let Some(newline) = cli.newline_style {
        options.newline_style = newline.into();
    }
    if cli.with_metadata {
        options.extract_metadata = true;
    }

    tracing::debug!(?options, "resolved conversion options");
    Ok(options)
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("Error reading file {}", path.display()))
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Error reading from stdin")?;
            Ok(buffer)
        }
    }
}

fn render_json(conversion: &Conversion) -> Result<String> {
    let json = serde_json::to_string_pretty(conversion).context("Failed to serialize output")?;
    Ok(with_trailing_newline(json))
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output {
        return fs::write(path, content).with_context(|| format!("Error writing file {}", path.display()));
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes()).context("Error writing to stdout")?;
    stdout.flush().context("Error writing to stdout")
}
