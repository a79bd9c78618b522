//! The state container: single source of truth for the todo collection
//! and its loading lifecycle.
//!
//! # Design
//! `TodoStore` owns a [`TodosState`] and mediates all reads and writes.
//! The asynchronous load is bracketed into two calls so the store never
//! performs I/O itself: [`TodoStore::begin_load`] flips the `loading`
//! flag and hands the caller an [`HttpRequest`] to execute, and
//! [`TodoStore::finish_load`] is the single completion entry point that
//! applies the outcome. For one load the state machine is
//! `Idle → Loading → {Loaded, Failed}`; both terminal states become the
//! new steady state, and a later `begin_load` re-enters `Loading` from
//! either.
//!
//! Views observe the store through `subscribe`/`unsubscribe` plus the
//! `state()` snapshot read. Callbacks run after every mutation and
//! always see a fully settled state. The store is single-threaded by
//! construction (callbacks are plain `FnMut`, not `Send`); all
//! mutation is expected to happen on the thread that owns it.
//!
//! Every load failure — transport, non-success status, malformed
//! payload — collapses into the same fixed user-visible message. The
//! concrete [`LoadError`] is logged and then discarded.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::LoadError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;

/// The fixed message stored in [`TodosState::error`] when a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "something went wrong";

/// Snapshot of the collection plus loading/error status.
///
/// `loading` is true only strictly between `begin_load` and
/// `finish_load`. `error` is non-`None` only when the most recent load
/// failed; the next successful load clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodosState {
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodosState {
    /// The hard-coded collection a fresh store starts from, shown until
    /// the first load settles.
    fn seed() -> Self {
        Self {
            todos: vec![
                Todo {
                    id: "1".to_string(),
                    title: "first todo".to_string(),
                    completed: false,
                },
                Todo {
                    id: "2".to_string(),
                    title: "second todo".to_string(),
                    completed: false,
                },
            ],
            loading: false,
            error: None,
        }
    }
}

/// Handle returned by [`TodoStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&TodosState)>;

/// Single source of truth for the todo collection.
pub struct TodoStore {
    client: TodoClient,
    state: TodosState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TodoStore {
    /// Create a store holding the seed collection, not loading, no
    /// error. `client` describes the remote endpoint the load targets.
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: TodosState::seed(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot. Callers that need to hold state across a
    /// mutation should clone it.
    pub fn state(&self) -> &TodosState {
        &self.state
    }

    /// Register a callback invoked after every mutation with the
    /// settled state. Callbacks must not re-enter the store.
    pub fn subscribe(&mut self, callback: impl FnMut(&TodosState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Enter the `Loading` state and return the request the caller must
    /// execute. The outcome — success or failure — goes back through
    /// [`TodoStore::finish_load`]. A previous error is left in place;
    /// it is only cleared by a successful completion.
    pub fn begin_load(&mut self) -> HttpRequest {
        debug!("load started");
        self.state.loading = true;
        self.notify();
        self.client.build_fetch()
    }

    /// Apply the outcome of an executed load request. `Err` carries a
    /// transport-level failure from the caller; a delivered response is
    /// still checked for status and payload shape. On success the
    /// collection is replaced wholesale and any previous error is
    /// cleared; on any failure the collection is untouched and `error`
    /// is set to the fixed message.
    pub fn finish_load(&mut self, response: Result<HttpResponse, LoadError>) {
        let outcome = response.and_then(|resp| self.client.parse_fetch(resp));
        match outcome {
            Ok(todos) => {
                debug!(count = todos.len(), "load finished");
                self.state.todos = todos;
                self.state.error = None;
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.state.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.state.loading = false;
        self.notify();
    }

    /// Remove every todo whose id equals `id`. Removing an id not
    /// present in the collection is a no-op. Purely local; no network
    /// effect and no error condition.
    pub fn remove(&mut self, id: &str) {
        debug!(id, "removing todo");
        self.state.todos.retain(|todo| todo.id != id);
        self.notify();
    }

    fn notify(&mut self) {
        let Self {
            state, subscribers, ..
        } = self;
        for (_, callback) in subscribers.iter_mut() {
            callback(state);
        }
    }
}
