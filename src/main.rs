//! NetClip CLI entry point

use std::process::ExitCode;

use clap::Parser;

use netclip::cli::{
    app::{load_merged_config, print_license, run_server, EXIT_USAGE_ERROR},
    args::{Cli, ServerOptions},
    presenter::Presenter,
};
use netclip::domain::config::AppConfig;
use netclip::infrastructure::{default_pid_path, default_port_path};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    if cli.license {
        print_license(&presenter);
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        address: cli.address.clone(),
        port: cli.port,
        random_port: if cli.random_port { Some(true) } else { None },
        pid_file: cli.pid_file.clone(),
        port_file: cli.port_file.clone(),
        max_message_bytes: cli.max_bytes,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let random_port = config.random_port_or_default();
    let port = config.port_or_default();
    if port == 0 && !random_port {
        presenter.error("Port 0 is reserved; use --random-port for an OS-assigned port");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let options = ServerOptions {
        address: config.address_or_default().to_string(),
        port,
        random_port,
        pid_file: config.pid_file.clone().unwrap_or_else(default_pid_path),
        port_file: config.port_file.clone().unwrap_or_else(default_port_path),
        max_message_bytes: config.max_message_bytes_or_default(),
    };

    run_server(options).await
}
