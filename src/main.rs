//! typst-engine - Convert Quarto documents for Typst rendering

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use typst_engine::engine::{self, EngineConfig, FsHost};
use typst_engine::{Renderer, parse};

#[derive(Parser)]
#[command(name = "typst-engine")]
#[command(version, about = "Convert Quarto documents for Typst rendering", long_about = None)]
#[command(after_help = "EXAMPLES:
    typst-engine report.qmd report.out.qmd    Convert prose to raw Typst blocks
    typst-engine --chunks report.qmd          Print the chunk list as JSON
    typst-engine --check notes.md             Reject executable code in .md")]
struct Cli {
    /// Input document (.qmd, .md, .markdown)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Print the parsed chunks as JSON instead of converting
    #[arg(long, conflicts_with = "check")]
    chunks: bool,

    /// Only validate the document against the extension policy
    #[arg(long)]
    check: bool,

    /// Raw block format for prose
    #[arg(short, long, value_name = "TAG", default_value = "typst")]
    format: String,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,

    /// Log parsing details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = EngineConfig::default().with_raw_format(cli.format.clone());

    let result = if cli.chunks {
        print_chunks(&cli.input)
    } else if cli.check {
        check(&config, &cli.input)
    } else {
        convert(&config, &cli.input, cli.output.as_deref())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn print_chunks(input: &Path) -> typst_engine::Result<()> {
    let target = engine::target(&FsHost, input, None)?;
    let chunks = parse(&target.markdown);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &chunks)?;
    writeln!(stdout)?;
    Ok(())
}

fn check(config: &EngineConfig, input: &Path) -> typst_engine::Result<()> {
    let target = engine::target(&FsHost, input, None)?;
    engine::check(config, input, &parse(&target.markdown))?;
    info!(input = %input.display(), "document ok");
    Ok(())
}

fn convert(config: &EngineConfig, input: &Path, output: Option<&Path>) -> typst_engine::Result<()> {
    let target = engine::target(&FsHost, input, None)?;

    match output {
        Some(path) => {
            let result = engine::execute(config, &target)?;
            std::fs::write(path, result.markdown)?;
            info!(input = %input.display(), output = %path.display(), "converted");
        }
        None => {
            let chunks = parse(&target.markdown);
            engine::check(config, input, &chunks)?;
            let renderer = Renderer::with_config(config.render.clone());
            renderer.write_to(&chunks, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
