//! MIME type detection based on file extensions.

use std::path::Path;

/// MIME type for JavaScript files. The router special-cases it alongside
/// the `text/` family when deciding how to read a static file.
pub const JAVASCRIPT: &str = "application/javascript";

/// MIME type used for everything the table does not know.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolves the Content-Type for a URL path from its file extension.
///
/// The comparison is case-sensitive and paths without an extension fall
/// through to `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use pavilion::http::mime::content_type_for;
/// assert_eq!(content_type_for("/index.html"), "text/html");
/// assert_eq!(content_type_for("/logo.png"), "image/png");
/// assert_eq!(content_type_for("/data.bin"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => JAVASCRIPT,
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => OCTET_STREAM,
    }
}
