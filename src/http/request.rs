/// HTTP request methods.
///
/// Only GET is served. Every other token, recognized or not, is kept
/// verbatim and answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other method token
    Other(String),
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(s) => s,
        }
    }
}

/// A parsed HTTP request line.
///
/// Header lines are never parsed, so this is all the server knows about a
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, not percent-decoded (e.g. "/index.html")
    pub target: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    pub fn new(method: Method, target: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            version: version.into(),
        }
    }

    /// Shorthand for a `GET <target> HTTP/1.1` request.
    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target, "HTTP/1.1")
    }

    /// Whether the target names a directory explicitly.
    pub fn has_trailing_slash(&self) -> bool {
        self.target.ends_with('/')
    }
}
