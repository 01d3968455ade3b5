use crate::http::request::{Method, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not contain at least a method and a target.
    MalformedRequestLine,
}

/// Parses the first line of an HTTP request.
///
/// Expected shape is `<METHOD> <path>[?<query>] [<version>]`. Only the
/// method and target are used; the version token is ignored when present.
/// The target is split at the first `?` into path and raw query, neither
/// of which is percent-decoded.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let method_token = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let target = parts.next().ok_or(ParseError::MalformedRequestLine)?;

    let method = Method::from_token(method_token);

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (target.to_string(), None),
    };

    Ok(Request { method, path, query })
}
