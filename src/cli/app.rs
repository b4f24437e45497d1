//! Server app runner

use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::ReceiveUseCase;
use crate::domain::config::AppConfig;
use crate::domain::instance::ServiceInstance;
use crate::infrastructure::{create_probe, ArboardClipboard, XdgConfigStore};

use super::args::ServerOptions;
use super::pid_file::{Acquisition, PidFile};
use super::port_file::PortFile;
use super::presenter::Presenter;
use super::server::ClipboardServer;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Bundled license text for `--license`
const LICENSE_TEXT: &str = include_str!("../../LICENSE");

/// Print the bundled license text
pub fn print_license(presenter: &Presenter) {
    presenter.output(LICENSE_TEXT.trim_end());
}

/// Run the receive server.
///
/// Singleton coordination comes first: when a live instance already owns
/// the PID record, its endpoint is reported and the process exits without
/// binding a socket. Otherwise the port is resolved (and persisted when
/// OS-assigned), the listener binds, and the accept loop runs until the
/// process is terminated.
pub async fn run_server(options: ServerOptions) -> ExitCode {
    let presenter = Presenter::new();

    if let Err(e) = ensure_parent_dir(&options.pid_file) {
        presenter.error(&format!("Failed to create record directory: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let probe = create_probe();
    let pid_file = PidFile::with_path(&options.pid_file);
    let acquisition = match pid_file.acquire_or_detect(probe.as_ref()) {
        Ok(acquisition) => acquisition,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Acquisition::AlreadyRunning(pid) = acquisition {
        // The record on disk is authoritative for what the running
        // instance actually bound; the configured port is only a fallback
        // for instances that never wrote one.
        let port = match PortFile::with_path(&options.port_file).load() {
            Ok(Some(port)) => port,
            Ok(None) => options.port,
            Err(e) => {
                presenter.warn(&e.to_string());
                options.port
            }
        };

        presenter.status(&format!("Already running (PID: {})", pid));
        report_instance(
            &presenter,
            &ServiceInstance {
                pid,
                address: options.address,
                port,
            },
        );
        return ExitCode::from(EXIT_SUCCESS);
    }

    // The clipboard must be usable before the listener binds. A failed
    // probe leaves the fresh PID record behind; the next invocation's
    // staleness check removes it.
    let clipboard = match ArboardClipboard::probe() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let server = if options.random_port {
        let server = match ClipboardServer::bind_ephemeral(&options.address) {
            Ok(server) => server,
            Err(e) => {
                presenter.error(&format!("Failed to bind {}: {}", options.address, e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        // Persist the OS-assigned port so later invocations can report it
        if let Err(e) = PortFile::with_path(&options.port_file).save(server.port()) {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        server
    } else {
        match ClipboardServer::bind(&options.address, options.port) {
            Ok(server) => server,
            Err(e) => {
                presenter.error(&format!(
                    "Failed to bind {}:{}: {}",
                    options.address, options.port, e
                ));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    let instance = ServiceInstance {
        pid: std::process::id(),
        address: options.address,
        port: server.port(),
    };

    presenter.status(&format!("Listening on {}", instance.endpoint()));
    report_instance(&presenter, &instance);

    let use_case = Arc::new(ReceiveUseCase::new(clipboard, options.max_message_bytes));
    if let Err(e) = server.serve(use_case).await {
        presenter.error(&format!("Server failed: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Emit the structured startup report block to stdout
fn report_instance(presenter: &Presenter, instance: &ServiceInstance) {
    presenter.key_value("pid", &instance.pid.to_string());
    presenter.key_value("address", &instance.address);
    presenter.key_value("port", &instance.port.to_string());
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
