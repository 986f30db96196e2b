use std::time::SystemTime;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Value of the Server header.
pub const SERVER_NAME: &str = concat!("webroot/", env!("CARGO_PKG_VERSION"));

/// Serializes a response, stamping the Date header with the current time.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    serialize_response_at(resp, SystemTime::now())
}

/// Serializes a response with an explicit Date.
///
/// Header order is fixed: Server, Date, Allow, Location, Content-Type,
/// Content-Length. Optional headers appear only when the response carries
/// the matching field.
pub fn serialize_response_at(resp: &Response, date: SystemTime) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status = resp.status();
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    push_header(&mut buf, "Server", SERVER_NAME);
    push_header(&mut buf, "Date", &httpdate::fmt_http_date(date));

    if status == StatusCode::MethodNotAllowed {
        push_header(&mut buf, "Allow", "GET");
    }

    if let Some(location) = resp.location() {
        push_header(&mut buf, "Location", location);
    }

    if let Some(content) = resp.content() {
        push_header(&mut buf, "Content-Type", &content.media_type);
        push_header(&mut buf, "Content-Length", &content.len().to_string());
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    if let Some(content) = resp.content() {
        buf.extend_from_slice(&content.body);
    }

    buf
}

fn push_header(buf: &mut Vec<u8>, name: &str, value: &str) {
    buf.extend_from_slice(name.as_bytes());
    buf.extend_from_slice(b": ");
    buf.extend_from_slice(value.as_bytes());
    buf.extend_from_slice(b"\r\n");
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
