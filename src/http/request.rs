/// Represents a parsed HTTP/1.0 request from a client.
///
/// Only the request line and body survive parsing; header lines are skipped
/// and discarded, since no behavior here depends on header values. A value of
/// this type always came out of a successful parse, so every field is safe to
/// read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method verb token, exactly as sent (e.g. "GET")
    pub method: String,
    /// The request target path (e.g. "/index.html")
    pub target: String,
    /// Protocol version token (typically "HTTP/1.0")
    pub version: String,
    /// Everything after the blank-line terminator, possibly empty
    pub body: Vec<u8>,
}

impl Request {
    /// True when the request can be served at all. GET is the only verb this
    /// server implements; anything else earns a 501.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
