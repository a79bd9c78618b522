//! Fetch worker: executes one load request off the UI thread.
//!
//! # Design
//! Each load spawns a short-lived thread that performs the HTTP
//! round-trip with ureq and sends the outcome back over the event
//! channel. Only the main thread ever touches the store, so the fetch
//! completing late can never race a render. If the receiver is gone —
//! the app quit while the request was in flight — the send fails and
//! the result is discarded.

use std::sync::mpsc::Sender;
use std::thread;

use tracing::debug;
use tuido_core::{HttpRequest, HttpResponse, LoadError};

use crate::app::Msg;

/// Execute `req` on a background thread, delivering the outcome as a
/// [`Msg::FetchDone`].
pub fn spawn(req: HttpRequest, tx: Sender<Msg>) {
    thread::spawn(move || {
        debug!(url = %req.url, "fetching todo listing");
        let outcome = execute(&req);
        let _ = tx.send(Msg::FetchDone(outcome));
    });
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the store
/// handle status interpretation. Transport-level failures map to
/// `LoadError::Transport`.
fn execute(req: &HttpRequest) -> Result<HttpResponse, LoadError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .get(&req.url)
        .call()
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse { status, body })
}
