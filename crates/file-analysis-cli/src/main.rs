// Rust guideline compliant 2026-10-19

//! CLI for the File Analysis tools.
//!
//! Subcommands:
//!  - `analyze`  : text statistics for `--text`, `--file` or stdin.
//!  - `read`     : print a file's contents.
//!  - `ls`       : list files and subdirectories of a directory.
//!  - `resource` : read a `file://{file_path}` resource.
//!  - `mcp`      : run the MCP stdio server.
//!
//! JSON results go to stdout; error messages go to stderr with exit code 1.
//!
//! Usage examples:
//!  cargo run -p file-analysis -- analyze --file README.md
//!  cargo run -p file-analysis -- ls crates

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use file_analysis::{
    analyze_text, list_files, read_file, read_file_resource, ListingReport, DEFAULT_DIRECTORY,
};
use file_analysis_mcp::{init_tracing, run_stdio_server, ServerArgs, ServerConfig};

/// CLI entrypoint.
#[derive(Parser)]
#[command(
    name = "file-analysis",
    about = "File Analysis CLI: text statistics, file reading and directory listing",
    version
)]
struct Cli {
    /// Print JSON on a single line instead of pretty-printing.
    #[arg(long, global = true)]
    compact: bool,

    /// Log directives used when RUST_LOG is unset (logs go to stderr).
    #[arg(long, global = true, env = "FILE_ANALYSIS_LOG", default_value = "warn")]
    log_level: String,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text and print statistics, character frequency and top words.
    Analyze(AnalyzeArgs),

    /// Print the contents of a text file.
    Read(ReadArgs),

    /// List files and directories in a directory.
    Ls(LsArgs),

    /// Read a `file://{file_path}` resource.
    Resource(ResourceArgs),

    /// Run the MCP stdio server.
    Mcp(ServerArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Text to analyze.
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text to analyze from this file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

/// Arguments for the `read` subcommand.
#[derive(Args, Debug)]
struct ReadArgs {
    /// Path to the file to read.
    path: String,
}

/// Arguments for the `ls` subcommand.
#[derive(Args, Debug)]
struct LsArgs {
    /// Directory to list (defaults to current directory).
    #[arg(default_value = DEFAULT_DIRECTORY)]
    directory: String,
}

/// Arguments for the `resource` subcommand.
#[derive(Args, Debug)]
struct ResourceArgs {
    /// Resource URI, e.g. file:///etc/hosts
    uri: String,
}

/// Application entry point.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Analyze(args) => run_analyze(args, cli.compact),
        Commands::Read(args) => Ok(print_text(read_file(&args.path))),
        Commands::Ls(args) => run_ls(args, cli.compact),
        Commands::Resource(args) => Ok(print_text(read_file_resource(&args.uri))),
        Commands::Mcp(args) => {
            run_stdio_server(ServerConfig::from(&args))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the `analyze` subcommand.
fn run_analyze(args: AnalyzeArgs, compact: bool) -> Result<ExitCode> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => match read_file(&path.to_string_lossy()) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        },
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            buf
        }
    };

    print_json(&analyze_text(&text), compact)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the `ls` subcommand.
fn run_ls(args: LsArgs, compact: bool) -> Result<ExitCode> {
    let report = ListingReport::from(list_files(&args.directory));
    print_json(&report, compact)?;
    Ok(if report.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_text<E: std::fmt::Display>(result: std::result::Result<String, E>) -> ExitCode {
    match result {
        Ok(content) => {
            print!("{content}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("serializing JSON output")?;
    println!("{out}");
    Ok(())
}
