// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! NUL-terminated message framing over any `AsyncRead`/`AsyncWrite`.
//!
//! A message ends at the first `0x00` byte; the NUL is consumed and not
//! part of the body. Reads are block-granular (2048 bytes) and may read
//! past a message boundary into the next one, so [`MessageReader`] keeps
//! the unconsumed remainder across calls rather than discarding it.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Design unit for a single non-blocking receive call.
pub const READ_BLOCK_SIZE: usize = 2048;

/// Receive buffer growth ceiling. A message (or run of unconsumed bytes)
/// exceeding this is the layer's one fatal condition (§4.1).
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum FramingError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("message exceeds the {MAX_MESSAGE_BYTES}-byte framing buffer")]
    MessageTooLarge,
    #[error("connection closed before a complete message was read")]
    ConnectionClosed,
}

/// Stateful NUL-delimited reader. Owns the growable receive buffer so
/// bytes past one message's terminating NUL survive into the next
/// `read_message` call.
pub struct MessageReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> MessageReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new() }
    }

    /// Reads and returns the next NUL-terminated message body, blocking
    /// (in the async sense) until one is available.
    pub async fn read_message(&mut self) -> Result<Vec<u8>, FramingError> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == 0) {
                let message = self.buf[..pos].to_vec();
                self.buf.drain(..=pos);
                return Ok(message);
            }
            if self.buf.len() >= MAX_MESSAGE_BYTES {
                return Err(FramingError::MessageTooLarge);
            }
            let mut block = [0u8; READ_BLOCK_SIZE];
            let n = self.reader.read(&mut block).await?;
            if n == 0 {
                return Err(FramingError::ConnectionClosed);
            }
            self.buf.extend_from_slice(&block[..n]);
        }
    }
}

/// Writes `body` followed by a single terminating NUL. A partial write
/// here is a transient-transport error to the caller (the session
/// layer), never assumed atomic beyond this framing.
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    body: &[u8],
) -> Result<(), FramingError> {
    writer.write_all(body).await?;
    writer.write_all(&[0u8]).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "framing_tests.rs"]
mod tests;
