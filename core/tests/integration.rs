//! Load lifecycle tests against the live mock server.
//!
//! # Design
//! Each test starts a mock router on a random port, then drives the
//! store through `begin_load` / execute / `finish_load` over real HTTP
//! using ureq. This validates the whole pipeline — request building,
//! transport, status handling, payload parsing, state transitions —
//! end-to-end with an actual server, including the failure modes the
//! fixed error message collapses.

use mock_server::{app, failing_app, malformed_app, Router, Todo as RemoteTodo};
use tuido_core::{
    HttpRequest, HttpResponse, LoadError, Todo, TodoClient, TodoStore, LOAD_FAILED_MESSAGE,
};

/// Serve `router` on a random port from a background thread and return
/// the bound address.
fn serve(router: Router) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, router).await
        })
        .unwrap();
    });

    addr
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the store
/// handle status interpretation. Transport-level failures map to
/// `LoadError::Transport`.
fn execute(req: HttpRequest) -> Result<HttpResponse, LoadError> {
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

fn store_for(addr: std::net::SocketAddr) -> TodoStore {
    TodoStore::new(TodoClient::new(&format!("http://{addr}")))
}

#[test]
fn load_replaces_seed_with_remote_listing() {
    let addr = serve(app(vec![RemoteTodo::new(9, "x", true)]));
    let mut store = store_for(addr);

    // Before the first load the store holds the hard-coded seed.
    assert_eq!(store.state().todos.len(), 2);
    assert!(!store.state().loading);

    let req = store.begin_load();
    assert!(store.state().loading);

    store.finish_load(execute(req));

    assert_eq!(
        store.state().todos,
        vec![Todo {
            id: "9".to_string(),
            title: "x".to_string(),
            completed: true,
        }]
    );
    assert!(!store.state().loading);
    assert!(store.state().error.is_none());
}

#[test]
fn load_preserves_listing_order_and_remove_stays_local() {
    let addr = serve(app(vec![
        RemoteTodo::new(1, "first", false),
        RemoteTodo::new(2, "second", true),
        RemoteTodo::new(3, "third", false),
    ]));
    let mut store = store_for(addr);

    let req = store.begin_load();
    store.finish_load(execute(req));

    let ids: Vec<&str> = store.state().todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    // Removal is purely local; a subsequent load restores the listing.
    store.remove("2");
    let ids: Vec<&str> = store.state().todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);

    let req = store.begin_load();
    store.finish_load(execute(req));
    assert_eq!(store.state().todos.len(), 3);
}

#[test]
fn server_error_sets_fixed_message_and_keeps_collection() {
    let addr = serve(failing_app());
    let mut store = store_for(addr);
    let before = store.state().todos.clone();

    let req = store.begin_load();
    store.finish_load(execute(req));

    assert_eq!(store.state().todos, before);
    assert!(!store.state().loading);
    assert_eq!(store.state().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}

#[test]
fn malformed_payload_sets_fixed_message() {
    let addr = serve(malformed_app());
    let mut store = store_for(addr);

    let req = store.begin_load();
    store.finish_load(execute(req));

    assert_eq!(store.state().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(store.state().todos.len(), 2);
}

#[test]
fn connection_refused_is_a_transport_failure() {
    // Bind and immediately drop a listener so the port is closed.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut store = store_for(addr);

    let req = store.begin_load();
    let outcome = execute(req);
    assert!(matches!(outcome, Err(LoadError::Transport(_))));

    store.finish_load(outcome);
    assert_eq!(store.state().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!store.state().loading);
}

#[test]
fn reload_recovers_once_the_endpoint_answers() {
    let addr = serve(app(vec![RemoteTodo::new(7, "recovered", false)]));
    let mut store = store_for(addr);

    // First attempt fails at the transport level (simulated offline).
    store.begin_load();
    store.finish_load(Err(LoadError::Transport("network unreachable".to_string())));
    assert_eq!(store.state().error.as_deref(), Some(LOAD_FAILED_MESSAGE));

    // Second attempt reaches the server and clears the error.
    let req = store.begin_load();
    store.finish_load(execute(req));
    assert!(store.state().error.is_none());
    assert_eq!(store.state().todos[0].id, "7");
}
