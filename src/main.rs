//! changelog-html CLI - generate the changelog help page
//!
//! ```bash
//! # Render to stdout
//! changelog-html changelog.txt template.html
//!
//! # Render into the help build directory with a custom banner
//! changelog-html changelog.txt template.html -o build/changelog.html -c changelog.toml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use changelog_html::{Destination, Job, Options, generate};

/// Convert a plain-text changelog into an HTML help page
#[derive(Parser)]
#[command(name = "changelog-html", version, about, long_about = None)]
struct Cli {
    /// Changelog text file
    #[arg(value_name = "CHANGELOG", value_hint = ValueHint::FilePath)]
    changelog: PathBuf,

    /// HTML template containing `<!-- contents -->` exactly once
    #[arg(value_name = "TEMPLATE", value_hint = ValueHint::FilePath)]
    template: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short, long, value_name = "PATH", default_value = "-", value_hint = ValueHint::FilePath)]
    output: String,

    /// TOML file overriding the banner and bug tracker URLs
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log each version block and flagged line
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error[{}]: {e}", e.kind());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> changelog_html::Result<()> {
    let options = match &cli.config {
        Some(path) => Options::load_from_path(path)?,
        None => Options::default(),
    };

    let job = Job {
        changelog: cli.changelog.clone(),
        template: cli.template.clone(),
        output: Destination::from_arg(&cli.output),
    };
    generate(&job, &options)?;
    Ok(())
}

/// Log to stderr so stdout stays clean for the generated page.
fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
