//! Receive use case - drain a connection and hand the result to the clipboard

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::Mutex;

use super::ports::{Clipboard, ClipboardError};

/// Size of the per-read chunk while draining a connection.
const RECEIVE_BUFFER_SIZE: usize = 1024;

/// Per-connection receive errors. All of these are recoverable: they
/// abort the one connection and leave the listener untouched.
#[derive(Debug, Error)]
pub enum ReceiveError {
    #[error("Read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("Message exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Reads each connection to completion and forwards the bytes to the
/// clipboard.
///
/// A connection's bytes are accumulated until the peer closes its send
/// side; only then is the whole message delivered, exactly once. Deliveries
/// from concurrent connections are serialized through an internal gate so
/// at most one clipboard write is in flight at a time.
pub struct ReceiveUseCase<C: Clipboard> {
    clipboard: C,
    write_gate: Mutex<()>,
    max_message_bytes: usize,
}

impl<C: Clipboard> ReceiveUseCase<C> {
    /// Create a new receive use case with the given message size cap
    pub fn new(clipboard: C, max_message_bytes: usize) -> Self {
        Self {
            clipboard,
            write_gate: Mutex::new(()),
            max_message_bytes,
        }
    }

    /// Drain `reader` until end of data, then deliver the message.
    ///
    /// A zero-length read with no error signals end of data. Any read
    /// failure discards whatever was accumulated. Returns the number of
    /// bytes delivered to the clipboard.
    pub async fn receive<R>(&self, mut reader: R) -> Result<usize, ReceiveError>
    where
        R: AsyncRead + Unpin,
    {
        let mut message = Vec::new();
        let mut chunk = [0u8; RECEIVE_BUFFER_SIZE];

        loop {
            let read = reader.read(&mut chunk).await?;
            if read == 0 {
                break;
            }
            if message.len() + read > self.max_message_bytes {
                return Err(ReceiveError::TooLarge {
                    limit: self.max_message_bytes,
                });
            }
            message.extend_from_slice(&chunk[..read]);
        }

        let _gate = self.write_gate.lock().await;
        self.clipboard.write(&message).await?;
        Ok(message.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex as StdMutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::io::AsyncWriteExt;

    /// Clipboard stub that records every delivered message
    #[derive(Clone, Default)]
    struct RecordingClipboard {
        writes: Arc<StdMutex<Vec<Vec<u8>>>>,
    }

    impl RecordingClipboard {
        fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn write(&self, data: &[u8]) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(data.to_vec());
            Ok(())
        }
    }

    /// Clipboard stub that always fails
    struct FailingClipboard;

    #[async_trait]
    impl Clipboard for FailingClipboard {
        async fn write(&self, _data: &[u8]) -> Result<(), ClipboardError> {
            Err(ClipboardError::WriteFailed("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn delivers_whole_message_on_orderly_close() {
        let clipboard = RecordingClipboard::default();
        let use_case = ReceiveUseCase::new(clipboard.clone(), 1024 * 1024);

        let (mut client, server) = tokio::io::duplex(64);
        let receive = tokio::spawn(async move { use_case.receive(server).await });

        client.write_all(b"hello from another machine").await.unwrap();
        drop(client); // orderly close signals end of data

        let delivered = receive.await.unwrap().unwrap();
        assert_eq!(delivered, 26);
        assert_eq!(clipboard.writes(), vec![b"hello from another machine".to_vec()]);
    }

    #[tokio::test]
    async fn delivers_message_larger_than_one_chunk() {
        let clipboard = RecordingClipboard::default();
        let use_case = ReceiveUseCase::new(clipboard.clone(), 1024 * 1024);

        let payload: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();

        let (mut client, server) = tokio::io::duplex(64);
        let receive = tokio::spawn(async move { use_case.receive(server).await });

        client.write_all(&payload).await.unwrap();
        drop(client);

        let delivered = receive.await.unwrap().unwrap();
        assert_eq!(delivered, expected.len());
        assert_eq!(clipboard.writes(), vec![expected]);
    }

    #[tokio::test]
    async fn empty_stream_delivers_empty_message() {
        let clipboard = RecordingClipboard::default();
        let use_case = ReceiveUseCase::new(clipboard.clone(), 1024);

        let (client, server) = tokio::io::duplex(64);
        drop(client); // close without writing anything

        let delivered = use_case.receive(server).await.unwrap();
        assert_eq!(delivered, 0);
        assert_eq!(clipboard.writes(), vec![Vec::<u8>::new()]);
    }

    #[tokio::test]
    async fn no_delivery_while_connection_stays_open() {
        let clipboard = RecordingClipboard::default();
        let use_case = ReceiveUseCase::new(clipboard.clone(), 1024);

        let (mut client, server) = tokio::io::duplex(64);
        client.write_all(b"pending").await.unwrap();

        // The peer never closes, so receive must stay suspended
        let result = tokio::time::timeout(Duration::from_millis(50), use_case.receive(server)).await;
        assert!(result.is_err(), "receive should still be waiting for data");
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn oversized_message_is_rejected_without_delivery() {
        let clipboard = RecordingClipboard::default();
        let use_case = ReceiveUseCase::new(clipboard.clone(), 8);

        let (mut client, server) = tokio::io::duplex(64);
        let receive = tokio::spawn(async move { use_case.receive(server).await });

        client.write_all(b"way past the eight byte cap").await.unwrap();
        drop(client);

        let err = receive.await.unwrap().unwrap_err();
        assert!(matches!(err, ReceiveError::TooLarge { limit: 8 }));
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_surfaces_as_clipboard_error() {
        let use_case = ReceiveUseCase::new(FailingClipboard, 1024);

        let (mut client, server) = tokio::io::duplex(64);
        let receive = tokio::spawn(async move { use_case.receive(server).await });

        client.write_all(b"doomed").await.unwrap();
        drop(client);

        let err = receive.await.unwrap().unwrap_err();
        assert!(matches!(err, ReceiveError::Clipboard(_)));
    }
}
