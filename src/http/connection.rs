use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::parser;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// Upper bound on the request line. Anything beyond this is answered
/// with a 400 instead of buffering indefinitely.
const MAX_REQUEST_LINE: usize = 8 * 1024;

/// Outcome of reading up to the first newline.
enum RequestLine {
    /// Client closed before sending any data.
    Closed,
    /// A complete (or EOF-terminated) request line, terminator stripped.
    Line(String),
    /// The line is unusable: over the size cap or not valid UTF-8.
    Unusable,
}

/// A single accepted client connection.
///
/// Each connection carries exactly one request/response cycle: read the
/// request line, discard whatever else already arrived, dispatch, write
/// the response, close. There is no keep-alive.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
        }
    }

    /// Runs the connection to completion.
    ///
    /// Malformed input is answered with a 400; a router decision of
    /// "no response" (unmatched POST paths) closes the connection without
    /// writing a byte. Only transport errors bubble up to the caller.
    pub async fn serve(mut self, router: &Router) -> anyhow::Result<()> {
        let outcome = self.read_request_line().await?;
        self.drain_pending()?;

        let response = match outcome {
            RequestLine::Closed => None,
            RequestLine::Unusable => Some(Response::bad_request()),
            RequestLine::Line(line) => match parser::parse_request_line(&line) {
                Ok(request) => {
                    tracing::info!(
                        method = ?request.method,
                        path = %request.path,
                        "Request received"
                    );
                    router.route(&request).await
                }
                Err(e) => {
                    tracing::warn!(error = ?e, line = %line, "Malformed request line");
                    Some(Response::bad_request())
                }
            },
        };

        if let Some(response) = response {
            ResponseWriter::new(&response)
                .write_to_stream(&mut self.stream)
                .await?;
            self.stream.shutdown().await?;
        }

        Ok(())
    }

    /// Reads until the first `\n` arrives.
    ///
    /// A client that closes after sending a partial line still gets that
    /// line back, matching buffered line-reader semantics: the response
    /// goes out even when the line never saw its terminator.
    async fn read_request_line(&mut self) -> anyhow::Result<RequestLine> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                // The cap applies even when the terminator arrived in the
                // same read as the rest of the line.
                if pos + 1 > MAX_REQUEST_LINE {
                    tracing::warn!(bytes = pos + 1, "Request line too long");
                    return Ok(RequestLine::Unusable);
                }
                let line = self.buffer.split_to(pos + 1);
                return Ok(Self::line_from_bytes(&line));
            }

            if self.buffer.len() > MAX_REQUEST_LINE {
                tracing::warn!(bytes = self.buffer.len(), "Request line too long");
                return Ok(RequestLine::Unusable);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(RequestLine::Closed);
                }
                let line = self.buffer.split_to(self.buffer.len());
                return Ok(Self::line_from_bytes(&line));
            }
        }
    }

    fn line_from_bytes(bytes: &[u8]) -> RequestLine {
        match std::str::from_utf8(bytes) {
            Ok(line) => RequestLine::Line(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(_) => {
                tracing::warn!("Request line is not valid UTF-8");
                RequestLine::Unusable
            }
        }
    }

    /// Discards whatever the client has already sent beyond the request
    /// line (headers this server never parses). Stops as soon as no more
    /// data is immediately available; never waits for end-of-headers.
    fn drain_pending(&mut self) -> std::io::Result<()> {
        let mut scratch = [0u8; 1024];
        loop {
            match self.stream.try_read(&mut scratch) {
                Ok(0) => return Ok(()),
                Ok(_) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }
}
