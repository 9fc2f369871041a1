//! meiprov CLI: MEI header metadata as JSON or PROV-O Turtle.
//!
//! Usage:
//!   meiprov json <FILE>
//!   meiprov prov <FILE>
//!   meiprov batch <DIR> [--format json|turtle] [--output FILE]

use clap::{Parser, Subcommand, ValueEnum};
use meiprov::{collect_documents, convert_file, run_batch, MapperConfig, OutputFormat};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "meiprov",
    version,
    about = "Extract MEI header metadata as JSON or as a PROV-O provenance graph"
)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the <meiHead> of one file as JSON
    Json {
        /// MEI file
        file: PathBuf,
    },
    /// Convert the <meiHead> of one file to PROV-O Turtle
    Prov {
        /// MEI file
        file: PathBuf,
    },
    /// Convert every MEI/TEI file under a directory
    Batch {
        /// Directory to walk
        dir: PathBuf,
        /// Output view
        #[arg(long, value_enum, default_value_t = FormatArg::Turtle)]
        format: FormatArg,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Turtle,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Turtle => OutputFormat::Turtle,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meiprov=info".into()),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<MapperConfig, String> {
    match path {
        Some(p) => MapperConfig::from_yaml_file(p)
            .map_err(|e| format!("Failed to load config '{}': {}", p.display(), e)),
        None => Ok(MapperConfig::default()),
    }
}

fn cmd_single(file: &Path, format: OutputFormat, config: &MapperConfig) -> i32 {
    if !file.is_file() {
        eprintln!("Error: '{}' is not a file.", file.display());
        return 2;
    }
    match convert_file(file, format, config) {
        Ok(text) => {
            println!("{}", text.trim_end());
            0
        }
        Err(e) => {
            eprintln!("Error processing file: {}", e);
            1
        }
    }
}

fn cmd_batch(dir: &Path, format: OutputFormat, output: Option<&Path>, config: &MapperConfig) -> i32 {
    if !dir.is_dir() {
        eprintln!("The specified path '{}' is not a directory.", dir.display());
        return 1;
    }

    let files = collect_documents(dir, config);
    if files.is_empty() {
        eprintln!("No .{} files found in '{}'.", config.extensions.join(" or ."), dir.display());
        return 0;
    }

    let report = run_batch(&files, format, config);
    for failure in report.failures() {
        eprintln!(
            "Failed: {}: {}",
            failure.file_path,
            failure.error.as_deref().unwrap_or("unknown error")
        );
    }

    let text = match format {
        OutputFormat::Turtle => report.combined_turtle(),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &text) {
                eprintln!("Error: cannot write '{}': {}", path.display(), e);
                return 1;
            }
            eprintln!("Wrote: {}", path.display());
        }
        None => println!("{}", text.trim_end()),
    }

    if report.is_success() {
        0
    } else {
        1
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Json { file } => cmd_single(&file, OutputFormat::Json, &config),
        Commands::Prov { file } => cmd_single(&file, OutputFormat::Turtle, &config),
        Commands::Batch { dir, format, output } => {
            cmd_batch(&dir, format.into(), output.as_deref(), &config)
        }
    };
    std::process::exit(code);
}
