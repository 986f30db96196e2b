/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File or index document returned
/// - `MovedPermanently` (301): Directory requested without a trailing slash
/// - `BadRequest` (400): Malformed request line
/// - `NotFound` (404): Missing resource or path outside the document root
/// - `MethodNotAllowed` (405): Anything but GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::MovedPermanently.reason_phrase(), "Moved Permanently");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Body of a 200 response together with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub body: Vec<u8>,
    pub media_type: String,
}

impl Content {
    pub fn new(body: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            body,
            media_type: media_type.into(),
        }
    }

    /// Byte length of the body, as sent in Content-Length.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Only the constructors below create responses, so a redirect never
/// carries a body and a 200 always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    content: Option<Content>,
    location: Option<String>,
}

impl Response {
    /// Creates a 200 OK response carrying the given content.
    pub fn ok(content: Content) -> Self {
        Self {
            status: StatusCode::Ok,
            content: Some(content),
            location: None,
        }
    }

    /// Creates a 301 Moved Permanently response pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::MovedPermanently,
            content: None,
            location: Some(location.into()),
        }
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::empty(StatusCode::BadRequest)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::empty(StatusCode::MethodNotAllowed)
    }

    fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
            location: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
