use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::http::parser::{READ_CAP, has_request_line, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::static_files::{self, DocumentRoot};

/// How long unread request bytes are drained after the response is sent.
const LINGER_TIMEOUT: Duration = Duration::from_millis(500);
/// Upper bound on bytes discarded while lingering.
const LINGER_CAP: usize = 64 * 1024;

pub struct Connection<S> {
    stream: S,
    root: Arc<DocumentRoot>,
    read_timeout: Duration,
    buffer: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: Arc<DocumentRoot>, read_timeout: Duration) -> Self {
        Self {
            stream,
            root,
            read_timeout,
            buffer: Vec::with_capacity(READ_CAP),
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then returns so the stream gets closed.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match timeout(self.read_timeout, self.fill_buffer()).await {
                        Ok(res) => res?,
                        // Whatever arrived before the deadline still gets an answer.
                        Err(_) => debug!(
                            buffered = self.buffer.len(),
                            "Timed out waiting for request line"
                        ),
                    }

                    if self.buffer.is_empty() {
                        // Client closed connection
                        self.state = ConnectionState::Closed;
                        continue;
                    }

                    self.state = match parse_request_line(&self.buffer) {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(e) => {
                            warn!(error = ?e, "Malformed request line");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = static_files::respond(req, &self.root).await;
                    info!(
                        method = req.method.as_str(),
                        path = %req.target,
                        version = %req.version,
                        status = response.status().as_u16(),
                        "Request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.linger().await;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the request line is complete, [`READ_CAP`] bytes have
    /// arrived, or the client stops sending.
    async fn fill_buffer(&mut self) -> anyhow::Result<()> {
        let mut temp = [0u8; READ_CAP];

        while self.buffer.len() < READ_CAP && !has_request_line(&self.buffer) {
            let room = READ_CAP - self.buffer.len();
            let n = self.stream.read(&mut temp[..room]).await?;

            if n == 0 {
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        Ok(())
    }

    /// Closes the write half, then discards request bytes that were never
    /// read so closing the socket does not reset the connection before the
    /// client has seen the response.
    async fn linger(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Failed to shut down write half");
            return;
        }

        let mut temp = [0u8; READ_CAP];
        let mut discarded = 0;
        let drain = async {
            while discarded < LINGER_CAP {
                match self.stream.read(&mut temp).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => discarded += n,
                }
            }
        };

        if timeout(LINGER_TIMEOUT, drain).await.is_err() {
            debug!("Client kept the connection open after the response");
        }
        if discarded > 0 {
            debug!(discarded, "Discarded unread request bytes");
        }
    }
}
