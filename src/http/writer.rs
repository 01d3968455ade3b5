use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Writes a [`Response`] to a client stream.
///
/// All payload kinds share one write sequence: the head (status line,
/// headers, blank line) is written completely before the first body byte,
/// so binary bodies can never interleave with their own headers.
pub struct ResponseWriter<'a> {
    response: &'a Response,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(response: &'a Response) -> Self {
        Self { response }
    }

    /// Serializes the status line and headers, terminated by the blank
    /// line that separates head from body on the wire.
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut head = Vec::new();

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.response.status.as_u16(),
            self.response.status.reason_phrase()
        );
        head.extend_from_slice(status_line.as_bytes());

        for (key, value) in &self.response.headers {
            head.extend_from_slice(key.as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }

        head.extend_from_slice(b"\r\n");
        head
    }

    /// Writes head then body to the stream and flushes.
    pub async fn write_to_stream<S>(&self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head_bytes()).await?;

        if !self.response.body.is_empty() {
            stream.write_all(&self.response.body).await?;
        }

        stream.flush().await?;
        Ok(())
    }
}
