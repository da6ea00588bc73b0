//! # posbridge CLI
//!
//! Command-line interface for the local receipt print service.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP print API (Ctrl-C to stop)
//! posbridge serve
//!
//! # Serve on another address without touching a printer
//! posbridge serve --listen 0.0.0.0:8082 --backend memory
//!
//! # Print a receipt file (or stdin) on a named printer
//! posbridge print --printer POS-80 receipt.txt
//!
//! # Write the encoded job to a file instead of printing
//! posbridge print --output job.bin receipt.txt
//!
//! # List printers
//! posbridge printers
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` (e.g. `RUST_LOG=posbridge=debug`)
//! to change verbosity.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use posbridge::{
    PosBridgeError,
    config::{AppConfig, Backend},
    dispatcher::assemble,
    receipt::ReceiptDocument,
    server,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// posbridge - local ESC/POS receipt print service
#[derive(Parser, Debug)]
#[command(name = "posbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./posbridge.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print subsystem to use, overriding the config file
    #[arg(long, global = true, value_enum)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP print API
    Serve {
        /// Address to listen on, overriding the config file
        #[arg(long)]
        listen: Option<String>,
    },

    /// Print a marked-up receipt from a file or stdin
    Print {
        /// Receipt file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Printer name (first printer when omitted or not found)
        #[arg(long)]
        printer: Option<String>,

        /// Write the encoded job to FILE instead of printing
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List available printers
    Printers,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("posbridge=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), PosBridgeError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.printing.backend = backend;
    }

    match cli.command {
        Commands::Serve { listen } => {
            if let Some(listen) = listen {
                config.server.listen_addr = listen;
            }
            serve(config)
        }
        Commands::Print {
            file,
            printer,
            output,
        } => {
            let content = read_content(file.as_ref())?;

            if let Some(path) = output {
                let job = assemble(&ReceiptDocument::parse(&content));
                std::fs::write(&path, job.as_bytes())?;
                println!("Wrote {} bytes to {}", job.len(), path.display());
                return Ok(());
            }

            let dispatcher = config.dispatcher()?;
            let used = dispatcher.try_print(&content, printer.as_deref())?;
            println!("Printed on {}", used.name());
            Ok(())
        }
        Commands::Printers => {
            let printers = config.dispatcher()?.printers()?;
            if printers.is_empty() {
                println!("No printers available");
            }
            for (i, printer) in printers.iter().enumerate() {
                if i == 0 {
                    println!("  {} (default)", printer.name());
                } else {
                    println!("  {}", printer.name());
                }
            }
            Ok(())
        }
    }
}

/// Run the HTTP server until Ctrl-C.
fn serve(config: AppConfig) -> Result<(), PosBridgeError> {
    let dispatcher = config.dispatcher()?;
    info!(backend = ?config.printing.backend, "starting print service");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config.server, dispatcher, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutting down");
        }
    }))
}

fn read_content(file: Option<&PathBuf>) -> Result<String, PosBridgeError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            PosBridgeError::Config(format!("Failed to read {}: {}", path.display(), e))
        }),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
