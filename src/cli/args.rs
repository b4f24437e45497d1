//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

/// NetClip - receive clipboard data from remote machines
#[derive(Parser, Debug)]
#[command(name = "netclip")]
#[command(version = "1.0.0")]
#[command(about = "Receive clipboard data from a remote machine over TCP")]
#[command(long_about = None)]
pub struct Cli {
    /// Listen address
    #[arg(long, value_name = "ADDR")]
    pub address: Option<String>,

    /// Listen port
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Let the OS assign a free port (the given port is ignored)
    #[arg(long)]
    pub random_port: bool,

    /// PID file path
    #[arg(long, value_name = "PATH")]
    pub pid_file: Option<PathBuf>,

    /// Port file path
    #[arg(long, value_name = "PATH")]
    pub port_file: Option<PathBuf>,

    /// Maximum accepted message size in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Print the bundled license text and exit
    #[arg(long)]
    pub license: bool,
}

/// Resolved server options after config merging
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: String,
    pub port: u16,
    pub random_port: bool,
    pub pid_file: PathBuf,
    pub port_file: PathBuf,
    pub max_message_bytes: usize,
}
