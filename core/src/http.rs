//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the one HTTP exchange this application makes as
//! plain data. The core builds `HttpRequest` values and parses
//! `HttpResponse` values without ever touching the network — the caller
//! (the TUI's fetch worker, or a test harness) executes the actual I/O.
//! This keeps the core deterministic and easy to test.
//!
//! Every request is a bare `GET` with no headers or auth, so no method
//! or header fields are carried.

/// An HTTP request described as plain data.
///
/// Built by [`TodoClient::build_fetch`](crate::TodoClient::build_fetch).
/// The caller is responsible for executing a `GET` against `url` and
/// returning the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then
/// passed to [`TodoClient::parse_fetch`](crate::TodoClient::parse_fetch).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
