//! Content-Length framing for LSP messages over stdio.
//!
//! ```text
//! Content-Length: <n>\r\n
//! \r\n
//! <n bytes of UTF-8 JSON>
//! ```
//!
//! Other headers (e.g. `Content-Type`) are accepted and ignored.

use serde_json::Value;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const CONTENT_LENGTH: &str = "Content-Length";

/// Framing failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying stream failed.
    #[error("transport i/o: {0}")]
    Io(#[from] io::Error),
    /// The body is not valid JSON.
    #[error("malformed message body: {0}")]
    Json(#[from] serde_json::Error),
    /// The header block ended without a `Content-Length`.
    #[error("missing Content-Length header")]
    MissingContentLength,
    /// `Content-Length` is not a non-negative integer.
    #[error("invalid Content-Length value {0:?}")]
    InvalidContentLength(String),
    /// The stream ended inside a header block.
    #[error("stream ended inside message headers")]
    TruncatedHeaders,
}

/// Write one framed JSON message and flush.
pub fn write_lsp_message<W: Write>(writer: &mut W, value: &Value) -> Result<(), TransportError> {
    let body = serde_json::to_vec(value)?;
    write!(writer, "{CONTENT_LENGTH}: {}\r\n\r\n", body.len())?;
    writer.write_all(&body)?;
    writer.flush()?;
    Ok(())
}

/// Read one framed JSON message.
///
/// Returns `Ok(None)` on EOF before any header byte.
pub fn read_lsp_message<R: BufRead>(reader: &mut R) -> Result<Option<Value>, TransportError> {
    let Some(len) = read_headers(reader)? else {
        return Ok(None);
    };
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(serde_json::from_slice(&body)?))
}

fn read_headers<R: BufRead>(reader: &mut R) -> Result<Option<usize>, TransportError> {
    let mut content_length = None;
    let mut line = String::new();
    let mut first = true;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return if first {
                Ok(None)
            } else {
                Err(TransportError::TruncatedHeaders)
            };
        }
        first = false;

        let header = line.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':')
            && name.trim().eq_ignore_ascii_case(CONTENT_LENGTH)
        {
            let value = value.trim();
            content_length = Some(
                value
                    .parse::<usize>()
                    .map_err(|_| TransportError::InvalidContentLength(value.to_string()))?,
            );
        }
    }

    content_length
        .map(Some)
        .ok_or(TransportError::MissingContentLength)
}
