//! Request handling
//!
//! This module implements what the server actually serves: routing of
//! parsed requests, static file access under the document root, and the
//! JSON REST endpoints.

pub mod rest;
pub mod router;
pub mod static_files;

pub use router::Router;
pub use static_files::{FileError, StaticFile, StaticFileStore};
