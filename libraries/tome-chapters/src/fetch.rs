//! Async-to-blocking body bridge
//!
//! symphonia consumes a blocking [`std::io::Read`], while reqwest
//! yields the response body as an async chunk stream. The two meet in
//! a bounded channel: an async task forwards chunks, and the blocking
//! parse thread drains them. The bound keeps in-flight memory at a few
//! chunks no matter how large the audio file is.

use bytes::{Buf, Bytes};
use futures_util::StreamExt;
use std::io::Read;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Chunks buffered between the network and the parser
const CHANNEL_CAPACITY: usize = 8;

/// Blocking reader over a channel of response body chunks.
///
/// Yields EOF once the sender side is dropped, which also happens when
/// the forwarding task is aborted on timeout.
pub(crate) struct StreamingBody {
    rx: mpsc::Receiver<std::io::Result<Bytes>>,
    current: Bytes,
}

impl Read for StreamingBody {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        while self.current.is_empty() {
            match self.rx.blocking_recv() {
                Some(Ok(chunk)) => self.current = chunk,
                Some(Err(e)) => return Err(e),
                None => return Ok(0),
            }
        }
        let n = buf.len().min(self.current.len());
        self.current.copy_to_slice(&mut buf[..n]);
        Ok(n)
    }
}

/// Spawn a task forwarding the response body into a bounded channel,
/// returning the blocking reader half and the task handle.
pub(crate) fn streaming_body(response: reqwest::Response) -> (StreamingBody, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let mut stream = response.bytes_stream();

    let forward = tokio::spawn(async move {
        while let Some(chunk) = stream.next().await {
            let item = chunk.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
            if tx.send(item).await.is_err() {
                // parser hung up; stop downloading
                break;
            }
        }
    });

    (
        StreamingBody {
            rx,
            current: Bytes::new(),
        },
        forward,
    )
}
