mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cifsort",
    version,
    about = "Sort invoices and their attachments into folders by CIF"
)]
struct Cli {
    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Backend {
    /// Pure Rust extraction (default)
    PdfExtract,
    /// poppler's pdftotext, must be installed
    Pdftotext,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a batch of files and write the sorted result as a zip archive
    Run {
        /// PDFs and their sidecar files (same base name)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Where to write the archive
        #[arg(short = 'O', long = "out", value_name = "ZIP")]
        out: PathBuf,

        /// Access password (compared with APP_PASSWORD)
        #[arg(long, env = "CIFSORT_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,

        /// JSON code set to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "pdf-extract")]
        backend: Backend,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the CIFs found in one PDF and where it would go
    Scan {
        /// Path to the PDF
        input_file: PathBuf,

        /// Access password (compared with APP_PASSWORD)
        #[arg(long, env = "CIFSORT_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,

        /// JSON code set to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "pdf-extract")]
        backend: Backend,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the recognized CIF list
    Codes {
        #[command(subcommand)]
        action: CodesAction,
    },
}

#[derive(Subcommand)]
enum CodesAction {
    /// List the recognized CIFs in effect
    List {
        /// JSON code set to use instead of the configured one
        #[arg(long, value_name = "FILE")]
        codes: Option<PathBuf>,
    },
    /// Validate a JSON code set file
    Validate {
        /// Path to JSON code set
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            files,
            out,
            password,
            codes,
            backend,
            output,
        } => commands::run::run(&files, &out, &password, codes.as_deref(), backend, &output),
        Commands::Scan {
            input_file,
            password,
            codes,
            backend,
            output,
        } => commands::scan::run(&input_file, &password, codes.as_deref(), backend, &output),
        Commands::Codes { action } => match action {
            CodesAction::List { codes } => commands::codes::list(codes.as_deref()),
            CodesAction::Validate { file } => commands::codes::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
