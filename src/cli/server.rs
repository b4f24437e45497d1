//! TCP listener that feeds received streams into the clipboard

use std::io;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::application::ports::Clipboard;
use crate::application::ReceiveUseCase;

/// Bound TCP listener for the receive loop.
///
/// The socket is bound synchronously (before the singleton report goes
/// out) and kept open; `serve` adopts the same socket, so the reported
/// port is always the port actually being listened on.
pub struct ClipboardServer {
    listener: StdTcpListener,
    port: u16,
}

impl ClipboardServer {
    /// Bind on an explicit port. Failure here is a startup precondition
    /// violation (port in use, invalid address, permission denied).
    pub fn bind(address: &str, port: u16) -> io::Result<Self> {
        Self::bind_inner(address, port)
    }

    /// Bind on an OS-assigned free port
    pub fn bind_ephemeral(address: &str) -> io::Result<Self> {
        Self::bind_inner(address, 0)
    }

    fn bind_inner(address: &str, port: u16) -> io::Result<Self> {
        let listener = StdTcpListener::bind((address, port))?;
        // Required for the later tokio adoption
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();
        Ok(Self { listener, port })
    }

    /// The port this listener is bound to
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Accept connections until the process is terminated.
    ///
    /// Each accepted connection runs as its own task; the accept loop
    /// never waits on handler progress and puts no limit on how many
    /// handlers are live at once. Per-connection failures are logged and
    /// stay local to their task.
    pub async fn serve<C>(self, use_case: Arc<ReceiveUseCase<C>>) -> io::Result<()>
    where
        C: Clipboard + 'static,
    {
        let listener = TcpListener::from_std(self.listener)?;

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    let use_case = Arc::clone(&use_case);
                    tokio::spawn(async move {
                        match use_case.receive(stream).await {
                            Ok(received) => {
                                eprintln!("Received {} bytes from {}", received, peer);
                            }
                            Err(e) => {
                                eprintln!("Connection from {} failed: {}", peer, e);
                            }
                        }
                    });
                }
                Err(e) => {
                    eprintln!("Accept error: {}", e);
                }
            }
        }
    }
}
