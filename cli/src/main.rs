//! nonofetch CLI - nonogram retrieval tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use nonofetch::client::DEFAULT_BASE_URL;
use nonofetch::size::resolve;
use nonofetch::{
    fetch_metadata, normalize_file, write_document, AcquireEvent, ClientConfig, Dimensions,
    FetchOptions, Nonofetch, PuzzleId, PuzzleMetadata, WebpbnClient,
};

#[derive(Parser)]
#[command(name = "nonofetch")]
#[command(version)]
#[command(about = "Fetch nonograms from webpbn.com in renderer format", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Path to nonogram file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    selection: SelectionArgs,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve a nonogram and save it in renderer format
    Fetch {
        /// Path to nonogram file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show nonogram metadata
    Info {
        /// Nonogram ID
        #[arg(long, value_name = "ID")]
        id: u64,

        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a saved MK export to renderer format
    Normalize {
        /// MK export file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Size of the nonogram: any, small, medium, large or huge
    #[arg(short, long, conflicts_with = "id")]
    size: Option<String>,

    /// Nonogram ID
    #[arg(long)]
    id: Option<u64>,

    /// Give up after this many attempts in random mode (0 = never)
    #[arg(long, value_name = "N", default_value = "0")]
    max_attempts: u32,
}

impl SelectionArgs {
    fn fetch_options(&self) -> nonofetch::Result<FetchOptions> {
        let options = FetchOptions::new().with_max_attempts(self.max_attempts);
        Ok(match self.id {
            Some(id) => options.with_id(PuzzleId::new(id)),
            None => options.with_size(resolve(self.size.as_deref())?),
        })
    }
}

#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Repository base URL
    #[arg(long, global = true, env = "NONOFETCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (0 = none)
    #[arg(long, value_name = "SECS", global = true, default_value = "30")]
    timeout: u64,
}

impl ConnectionArgs {
    fn config(&self) -> ClientConfig {
        let config = ClientConfig::new().with_base_url(&self.base_url);
        if self.timeout == 0 {
            config.without_timeout()
        } else {
            config.with_timeout(Duration::from_secs(self.timeout))
        }
    }

    fn client(&self) -> nonofetch::Result<WebpbnClient> {
        let config = self.config();
        debug!("Using repository at {}", config.base_url);
        WebpbnClient::with_config(config)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Fetch {
            output,
            selection,
            json,
        }) => cmd_fetch(&output, &selection, &cli.connection, json),
        Some(Commands::Info { id, json }) => cmd_info(PuzzleId::new(id), &cli.connection, json),
        Some(Commands::Normalize { input, output }) => cmd_normalize(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: fetch if an output path is provided
            if let Some(output) = cli.output {
                cmd_fetch(&output, &cli.selection, &cli.connection, false)
            } else {
                println!("{}", "Usage: nonofetch -o <FILE> [--size <SIZE> | --id <ID>]".yellow());
                println!("       nonofetch --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_fetch(
    output: &Path,
    selection: &SelectionArgs,
    connection: &ConnectionArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = selection.fetch_options()?;
    let random = !options.selection.is_explicit();

    if !json {
        println!("Retrieving {} for {}.", options.selection, output.display());
    }

    let client = connection.client()?;

    let pb = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = Nonofetch::with_options(options).fetch_to_with(&client, output, |event| {
        match *event {
            AcquireEvent::Selected { id, attempt } => {
                pb.set_message(format!("Fetching puzzle {} (attempt {})...", id, attempt));
            }
            AcquireEvent::Rejected { id, .. } if random => {
                pb.println(format!("Puzzle ID {} is invalid, retrying...", id).yellow().to_string());
            }
            AcquireEvent::Rejected { .. } => {}
            AcquireEvent::Accepted { id, .. } => {
                pb.set_message(format!("Fetching metadata for puzzle {}...", id));
            }
        }
    });
    pb.finish_and_clear();
    let report = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_metadata(&report.metadata, Some(report.dimensions));
        println!("{} {}", "Saved to".green(), report.output.display());
    }

    Ok(())
}

fn cmd_info(
    id: PuzzleId,
    connection: &ConnectionArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = connection.client()?;
    let metadata = fetch_metadata(&client, id, None)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        print_metadata(&metadata, None);
    }

    Ok(())
}

fn cmd_normalize(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = normalize_file(input)?;

    if let Some(path) = output {
        write_document(path, &doc)?;
        println!(
            "{} {} ({})",
            "Saved to".green(),
            path.display(),
            doc.dimensions()
        );
    } else {
        print!("{}", doc.as_str());
    }

    Ok(())
}

fn print_metadata(metadata: &PuzzleMetadata, dimensions: Option<Dimensions>) {
    println!("{}: {}.", "Title".bold(), metadata.title);
    println!("{}: {}.", "Author".bold(), metadata.author);
    println!("{}: {}.", "Description".bold(), metadata.description);
    println!("{}: {}.", "ID".bold(), metadata.id);
    if let Some(dims) = dimensions {
        println!("{}: {}.", "Size".bold(), dims);
    }
}

fn cmd_version() {
    println!("{} {}", "nonofetch".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Nonogram retrieval tool for webpbn.com");
    println!();
    println!("License: MIT");
}
