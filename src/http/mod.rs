//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: one
//! request per connection, request line only, no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving one request/response cycle
//! - **`parser`**: Parses the request line into a [`request::Request`]
//! - **`request`**: Request representation (method, path, raw query)
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection Lifecycle
//!
//! Each client connection runs the same straight line:
//!
//! ```text
//!   accept → read request line → drain already-sent bytes
//!          → route → write response (head, then body) → close
//! ```
//!
//! Headers beyond the request line are discarded, request bodies are
//! never read, and the connection always closes after the response.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
