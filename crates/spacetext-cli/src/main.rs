mod commands;
mod dry_run;
mod output;

use clap::{Args, Parser, Subcommand};
use spacetext_core::ocr::space::DEFAULT_ENDPOINT;
use spacetext_core::platform::documentcloud::DEFAULT_API_URL;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spacetext",
    version,
    about = "OCR DocumentCloud documents with OCR.space and store word positions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OCR the selected documents and write their text back to DocumentCloud
    Run(RunArgs),
    /// Turn a saved OCR.space response into a pages payload (offline)
    Normalize {
        /// Path to an OCR.space JSON response
        response_file: PathBuf,

        /// Crunched page dimensions, e.g. "612.0x792.0:0-3"
        #[arg(long, value_name = "SPEC")]
        page_spec: String,

        /// Value written to each page's "ocr" field
        #[arg(long, default_value = "ocrspace1")]
        engine_tag: String,

        /// Write the payload to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Document id to process (repeatable)
    #[arg(short, long = "document", value_name = "ID")]
    pub documents: Vec<u64>,

    /// Process every document matching this search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// OCR.space API key
    #[arg(long, env = "KEY", hide_env_values = true)]
    pub key: String,

    /// DocumentCloud API token
    #[arg(long, env = "DOCUMENTCLOUD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// DocumentCloud API root
    #[arg(long, env = "DOCUMENTCLOUD_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// OCR.space endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub ocr_url: String,

    /// Add-on run id that receives status messages
    #[arg(long, value_name = "UUID")]
    pub run_id: Option<String>,

    /// OCR.space engine: 1 or 2
    #[arg(long, default_value_t = 1)]
    pub engine: u8,

    /// Override each document's language (ISO 639-2, e.g. "eng")
    #[arg(short, long)]
    pub language: Option<String>,

    /// Print the pages payload instead of writing it to DocumentCloud
    #[arg(long)]
    pub dry_run: bool,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text")]
    pub output: String,
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Normalize {
            response_file,
            page_spec,
            engine_tag,
            out,
        } => commands::normalize::run(response_file, &page_spec, &engine_tag, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
