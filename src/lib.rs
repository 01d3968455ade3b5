//! Pavilion - Minimal Static File and REST Server
//!
//! Core library for HTTP handling, routing, and static file serving.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
