//! Request routing.
//!
//! Classifies a parsed request by method and path, dispatches to the
//! static file store or the REST endpoints, and maps every failure to a
//! well-formed response. No error escapes this module.

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::rest;
use crate::routes::static_files::{FileError, StaticFile, StaticFileStore};

/// Path prefix owned by the REST endpoints on GET.
const REST_PREFIX: &str = "/app";

/// Path prefix the POST endpoint answers on.
const REST_POST_PREFIX: &str = "/app/hello";

/// Routes requests to their handlers.
pub struct Router {
    files: StaticFileStore,
}

impl Router {
    pub fn new(files: StaticFileStore) -> Self {
        Self { files }
    }

    /// Produces the response for a request, or `None` when the server
    /// deliberately writes nothing: POST to a path outside `/app/hello`
    /// is answered with silence rather than an error status.
    pub async fn route(&self, request: &Request) -> Option<Response> {
        match request.method {
            Method::GET => Some(self.route_get(request).await),
            Method::POST => {
                if request.path.starts_with(REST_POST_PREFIX) {
                    Some(self.rest_response(rest::post(request.query.as_deref())))
                } else {
                    tracing::warn!(path = %request.path, "Unhandled POST path, closing silently");
                    None
                }
            }
            // Unknown methods are served like generic static file GETs.
            Method::Other => Some(self.serve_binary(&request.path).await),
        }
    }

    async fn route_get(&self, request: &Request) -> Response {
        if request.path.starts_with(REST_PREFIX) {
            return self.rest_response(rest::get(request.query.as_deref()));
        }

        let content_type = mime::content_type_for(&request.path);
        if content_type.starts_with("text/") || content_type == mime::JAVASCRIPT {
            self.serve_text(&request.path).await
        } else if content_type.starts_with("image/") {
            self.serve_binary(&request.path).await
        } else {
            // Unknown extensions get the generic static-file treatment.
            self.serve_binary(&request.path).await
        }
    }

    async fn serve_text(&self, path: &str) -> Response {
        let result = self.files.read_text(path).await;
        self.file_response(path, result).await
    }

    async fn serve_binary(&self, path: &str) -> Response {
        let result = self.files.read_binary(path).await;
        self.file_response(path, result).await
    }

    async fn file_response(&self, path: &str, result: Result<StaticFile, FileError>) -> Response {
        match result {
            Ok(file) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", file.content_type)
                .body(file.bytes)
                .build(),
            Err(FileError::NotFound) => self.not_found().await,
            Err(e) => {
                tracing::error!(path = %path, error = ?e, "Static serve failed");
                Response::internal_error()
            }
        }
    }

    fn rest_response(&self, result: Result<Response, rest::QueryError>) -> Response {
        match result {
            Ok(response) => response,
            Err(rest::QueryError::MissingParameter) => {
                tracing::warn!("REST request without a name=value query");
                Response::bad_request()
            }
        }
    }

    /// The 404 response: the root's custom `404.html` when present,
    /// otherwise the fixed plain-text fallback. Both carry Content-Length.
    async fn not_found(&self) -> Response {
        match self.files.not_found_page().await {
            Some(body) => ResponseBuilder::new(StatusCode::NotFound)
                .header("Content-Type", "text/html")
                .body(body)
                .build(),
            None => Response::not_found(),
        }
    }
}
