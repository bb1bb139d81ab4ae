use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use miniwing_cli::{explain, run_build, BuildOptions, TokenSummary};
use miniwing_resolve::Resolver;
use miniwing_scanner::scan_files;
use miniwing_tokens::{load_and_merge, DEFAULT_CONFIG_FILE, DEFAULT_TOKENS_FILE};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "miniwing")]
#[command(about = "Utility-first CSS generator driven by design tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Design token file
    #[arg(long, default_value = DEFAULT_TOKENS_FILE)]
    tokens: PathBuf,
    /// Config file with token overrides and settings
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Scan HTML files and write the stylesheet
    Build {
        /// HTML files to scan (defaults to `scan` in the config)
        files: Vec<PathBuf>,
        #[command(flatten)]
        source: SourceArgs,
        /// Output path (defaults to `output.path` in the config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write the stylesheet here (repeatable)
        #[arg(long = "copy-to")]
        copy_to: Vec<PathBuf>,
    },

    /// Print the class names found in HTML files
    Scan {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a summary of the effective token table
    Tokens {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show how class names resolve and which utilities compete for them
    Explain {
        #[arg(required = true)]
        classes: Vec<String>,
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            files,
            source,
            out,
            copy_to,
        } => build(BuildOptions {
            files,
            tokens: source.tokens,
            config: source.config,
            out,
            copy_to,
        }),
        Command::Scan { files } => scan(&files),
        Command::Tokens { source } => tokens(&source),
        Command::Explain { classes, source } => explain_classes(&classes, &source),
    }
}

fn build(options: BuildOptions) -> Result<()> {
    info!("Starting miniwing build...");
    let outcome = run_build(&options)?;
    info!(
        rules = outcome.rules_emitted,
        skipped = outcome.skipped.len(),
        fingerprint = %outcome.fingerprint,
        "miniwing build complete!"
    );
    println!("\n{}", outcome.summary);
    Ok(())
}

fn scan(files: &[PathBuf]) -> Result<()> {
    let result = scan_files(files);
    for class in &result.classes {
        println!("{}", class);
    }
    info!(
        "Found {} unique class names in {} file(s)",
        result.classes.len(),
        result.files_scanned
    );
    Ok(())
}

fn tokens(source: &SourceArgs) -> Result<()> {
    let loaded = load_and_merge(&source.tokens, &source.config);
    print!("{}", TokenSummary::new(&loaded.tokens).detailed());
    Ok(())
}

fn explain_classes(classes: &[String], source: &SourceArgs) -> Result<()> {
    let loaded = load_and_merge(&source.tokens, &source.config);
    let resolver = Resolver::with_utilities(&loaded.tokens, loaded.settings.utilities);
    for class in classes {
        println!("{}", explain(&resolver, class));
    }
    Ok(())
}
