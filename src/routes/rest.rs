//! REST endpoints served under `/app` paths.
//!
//! Both endpoints answer with a small JSON greeting built from the
//! `name` query parameter.

use serde::Serialize;

use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Fixed message in GET greeting bodies.
pub const GET_MESSAGE: &str = "You made a GET request";

/// Fixed message in POST greeting bodies.
pub const POST_MESSAGE: &str = "You made a POST request";

/// Why a greeting could not be built from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The query is absent or lacks a `name=value` pair.
    MissingParameter,
}

#[derive(Serialize)]
struct Greeting<'a> {
    name: &'a str,
    message: &'static str,
}

/// Builds the GET greeting: 200 with a JSON body.
pub fn get(query: Option<&str>) -> Result<Response, QueryError> {
    let name = extract_name(query)?;
    Ok(json_response(StatusCode::Ok, name, GET_MESSAGE))
}

/// Builds the POST greeting: 201 with a JSON body.
pub fn post(query: Option<&str>) -> Result<Response, QueryError> {
    let name = extract_name(query)?;
    Ok(json_response(StatusCode::Created, name, POST_MESSAGE))
}

/// Extracts the greeting name from the raw query string.
///
/// The value is everything after the first `=`; the parameter name itself
/// is not inspected and percent-encoding passes through untouched. A
/// query without `=` is the same failure as no query at all.
fn extract_name(query: Option<&str>) -> Result<&str, QueryError> {
    let query = query.ok_or(QueryError::MissingParameter)?;
    match query.split_once('=') {
        Some((_, value)) => Ok(value),
        None => Err(QueryError::MissingParameter),
    }
}

fn json_response(status: StatusCode, name: &str, message: &'static str) -> Response {
    let body = serde_json::to_vec(&Greeting { name, message }).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to encode greeting");
        Vec::new()
    });

    ResponseBuilder::new(status)
        .header("Content-Type", "application/json")
        .body(body)
        .build()
}
