use crate::http::request::{Method, Request};

/// Maximum number of bytes read from a connection before parsing.
///
/// Anything beyond this is never looked at; the request line of a longer
/// request is still usable as long as it fits.
pub const READ_CAP: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was received
    Empty,
    /// The request line is not valid UTF-8
    InvalidEncoding,
    /// The request line is not `METHOD SP TARGET SP VERSION`
    MalformedRequestLine,
}

/// Parses the request line out of a raw buffer.
///
/// Only the first line is decoded; header lines and anything after them
/// are discarded.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let buf = buf.trim_ascii();
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let line = &buf[..line_end];
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;

    let parts: Vec<&str> = line.split(' ').collect();
    let &[method, target, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || target.is_empty() || version.is_empty() {
        return Err(ParseError::MalformedRequestLine);
    }

    Ok(Request::new(Method::parse(method), target, version))
}

/// Whether the buffer holds a complete request line.
pub fn has_request_line(buf: &[u8]) -> bool {
    find_line_end(buf).is_some()
}

/// Position of the first line terminator. A bare LF is accepted as well
/// as CRLF; a preceding CR is stripped by the caller.
fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}
