//! Event handling for the terminal view.
//!
//! # Design
//! `App` wraps the store with view-local state (the selection cursor)
//! and translates channel messages — keyboard input, fetch completions
//! — into store calls. Side effects the view cannot perform itself are
//! returned as [`Action`]s for the main loop to execute, which keeps
//! this module free of I/O and directly testable.
//!
//! Redrawing is driven by a dirty flag: a store subscription sets it on
//! every mutation, and selection movement sets it for view-local
//! changes.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tuido_core::{HttpRequest, HttpResponse, LoadError, TodoStore, TodosState};

/// Messages delivered to the main loop over the event channel.
pub enum Msg {
    /// A terminal event forwarded by the input thread.
    Input(Event),

    /// Outcome of an executed load request, sent by the fetch worker.
    FetchDone(Result<HttpResponse, LoadError>),
}

/// Side effects for the main loop to execute.
pub enum Action {
    /// Run the given request on a fetch worker.
    Fetch(HttpRequest),

    /// Tear down the terminal and exit.
    Quit,
}

/// View state: the store plus the selection cursor.
pub struct App {
    store: TodoStore,
    selected: usize,
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Wrap a store, subscribing a redraw trigger to it. The flag
    /// starts set so the first frame always draws.
    pub fn new(mut store: TodoStore) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));
        Self {
            store,
            selected: 0,
            dirty,
        }
    }

    pub fn state(&self) -> &TodosState {
        self.store.state()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Start a load and return the request for the caller to execute.
    pub fn start_load(&mut self) -> HttpRequest {
        self.store.begin_load()
    }

    /// True once since the last check; clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Apply one message. Returns an action when the main loop has
    /// something to do on the view's behalf.
    pub fn on_msg(&mut self, msg: Msg) -> Option<Action> {
        match msg {
            Msg::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => self.on_key(key),
            Msg::Input(Event::Resize(_, _)) => {
                self.dirty.set(true);
                None
            }
            Msg::Input(_) => None,
            Msg::FetchDone(outcome) => {
                self.store.finish_load(outcome);
                self.clamp_selection();
                None
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Fetch(self.store.begin_load())),
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.remove_selected();
                None
            }
            _ => None,
        }
    }

    /// Remove the todo under the cursor. Ignored while the list is not
    /// on screen (loading or error view).
    fn remove_selected(&mut self) {
        let state = self.store.state();
        if state.loading || state.error.is_some() {
            return;
        }
        let Some(todo) = state.todos.get(self.selected) else {
            return;
        };
        let id = todo.id.clone();
        self.store.remove(&id);
        self.clamp_selection();
    }

    fn select_next(&mut self) {
        let len = self.store.state().todos.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
        self.dirty.set(true);
    }

    fn select_previous(&mut self) {
        let len = self.store.state().todos.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
        self.dirty.set(true);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.state().todos.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
