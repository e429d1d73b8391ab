//! CLI argument definitions using clap
//!
//! Commands:
//! - rollcall serve [--host <addr>] [--port <port>] [--empty] [--cors-origin <origin>]...

use clap::{Parser, Subcommand};

use crate::http_server::DEFAULT_PORT;

/// rollcall - in-memory student records over HTTP
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (JSON API and management UI)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Start without the demo students
        #[arg(long)]
        empty: bool,

        /// Restrict CORS to this origin (repeatable; default allows any)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
