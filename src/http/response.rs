/// HTTP status codes this server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }
}

// The error responses are served byte-for-byte as the original deployment
// sent them, quirks included: the status lines read "HTTP 1.0" without a
// slash, and the 501/403 responses carry no headers and no trailing CRLF.
const BAD_REQUEST_RESP: &[u8] =
    b"HTTP 1.0 400 Bad Request\r\nContent-Type: application/json\r\nContent-Length: 77\r\n\r\n{'error':'Bad request','message':'Request body could not be read properly.',}";
const NOT_IMPLEMENTED_RESP: &[u8] = b"HTTP 1.0 501 Not Implemented";
const NOT_FOUND_RESP: &[u8] =
    b"HTTP 1.0 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 77\r\n\r\n{'error':'Not Found','message':'Unable to find the file at the given path.',}";
const FORBIDDEN_RESP: &[u8] = b"HTTP 1.0 403 Forbidden";

/// A complete HTTP response, held as the exact byte sequence that goes on
/// the wire.
///
/// The body may be arbitrary binary data, so the length is always the byte
/// length of the buffer, never a string length. Built fresh per request and
/// never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    bytes: Vec<u8>,
}

impl Response {
    /// Creates a 200 response for a served file: status line, Content-Type,
    /// Content-Length, blank line, then the raw file bytes.
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        let head = format!(
            "HTTP/1.0 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            content_type,
            body.len()
        );

        let mut bytes = Vec::with_capacity(head.len() + body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&body);

        Self { status: StatusCode::Ok, bytes }
    }

    /// Canned 400 response for a request that failed to parse.
    pub fn bad_request() -> Self {
        Self { status: StatusCode::BadRequest, bytes: BAD_REQUEST_RESP.to_vec() }
    }

    /// Canned 403 response for traversal attempts and unreadable files.
    pub fn forbidden() -> Self {
        Self { status: StatusCode::Forbidden, bytes: FORBIDDEN_RESP.to_vec() }
    }

    /// Canned 404 response for targets that do not resolve to a file.
    pub fn not_found() -> Self {
        Self { status: StatusCode::NotFound, bytes: NOT_FOUND_RESP.to_vec() }
    }

    /// Canned 501 response for any method other than GET.
    pub fn not_implemented() -> Self {
        Self { status: StatusCode::NotImplemented, bytes: NOT_IMPLEMENTED_RESP.to_vec() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The full wire image of the response.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Exact length of the response in bytes, head and body included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
