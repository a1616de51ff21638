use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use sitemap::{manifest, FormatConfig};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(
    name = "sitemap",
    version,
    about = "Render a sitemaps.org XML document from a TOML or JSON manifest"
)]
struct Args {
    /// Manifest file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Manifest format (json, toml)
    #[arg(short, long, value_enum)]
    from: Option<FormatArg>,
    /// Output file (defaults to stdout); either way the document ends with one newline
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Escape `& < > " '` in locations
    #[arg(long)]
    escape: bool,
    /// Log debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for sitemap::Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_logging(&args)?;

    let from = match args
        .from
        .map(sitemap::Format::from)
        .or_else(|| args.input.as_ref().and_then(sitemap::Format::from_path))
    {
        Some(format) => format,
        None => {
            bail!(
                "could not infer manifest format; pass --from or provide an input file with extension"
            );
        }
    };

    let input_data = read_input(&args.input)?;
    let sitemap = manifest::from_str(&input_data, from).context("failed to load manifest")?;
    debug!(urls = sitemap.len(), "manifest loaded");

    let config = FormatConfig {
        escape_text: args.escape,
    };
    let mut xml = sitemap.xml_with_config(&config);
    xml.push('\n');

    write_output(&args.output, xml.as_bytes())?;
    Ok(())
}

fn initialize_logging(args: &Args) -> Result<()> {
    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
