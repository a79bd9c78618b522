//! Stateless HTTP request builder and response parser for the todo
//! listing.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state
//! between calls. The one remote operation is split into `build_fetch`,
//! which produces an [`HttpRequest`], and `parse_fetch`, which consumes
//! an [`HttpResponse`]. The caller executes the actual HTTP round-trip,
//! keeping the core deterministic and free of I/O dependencies.

use crate::error::LoadError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// Base URL of the reference endpoint the application ships against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Stateless client for the remote todo listing.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the
/// round-trip between `build_fetch` and `parse_fetch`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/todos", self.base_url),
        }
    }

    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Vec<Todo>, LoadError> {
        if response.status != 200 {
            return Err(LoadError::Http {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| LoadError::Deserialization(e.to_string()))
    }
}
