/// HTTP request methods the router distinguishes.
///
/// The server only implements behavior for GET and POST. Every other
/// method token is classified as [`Method::Other`] and routed down the
/// generic static-file branch rather than rejected with a 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Anything else (PUT, DELETE, a lowercase "get", ...)
    Other,
}

impl Method {
    /// Classifies a method token from the request line.
    ///
    /// The comparison is case-sensitive, so `"get"` is `Other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use pavilion::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("DELETE"), Method::Other);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Other,
        }
    }
}

/// A parsed request line.
///
/// Only the first line of the request is ever parsed; headers and bodies
/// are read off the socket and discarded. The value is immutable once
/// built and lives for a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The classified HTTP method.
    pub method: Method,
    /// The URI path component, without the query string.
    pub path: String,
    /// The raw query string after `?`, if any. Never percent-decoded.
    pub query: Option<String>,
}
