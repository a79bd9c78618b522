//! Frame rendering: heading, loading/error/list body, keybinding
//! footer.
//!
//! The body is a total mapping of the store snapshot — while a load is
//! in flight only the loading indicator is shown, an error shows only
//! the message, and otherwise one row per todo in listing order.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use tuido_core::Todo;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let state = app.state();

    let title = if state.loading || state.error.is_some() {
        "Todos".to_string()
    } else {
        format!("Todos ({})", state.todos.len())
    };
    frame.render_widget(Paragraph::new(title.bold()), header);

    if state.loading {
        frame.render_widget(Paragraph::new("Loading..."), body);
    } else if let Some(error) = &state.error {
        let lines = vec![
            Line::from("Error".bold().fg(Color::Red)),
            Line::from(error.as_str()),
        ];
        frame.render_widget(Paragraph::new(lines), body);
    } else {
        let rows: Vec<ListItem> = state.todos.iter().map(todo_row).collect();
        let list = List::new(rows)
            .highlight_symbol("> ")
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED));
        let selected = (!state.todos.is_empty()).then_some(app.selected());
        let mut list_state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, body, &mut list_state);
    }

    frame.render_widget(
        Paragraph::new("j/k: navigate  d: remove  r: reload  q: quit".dim()),
        footer,
    );
}

fn todo_row(todo: &Todo) -> ListItem<'_> {
    let marker = if todo.completed { "[x] " } else { "[ ] " };
    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::new().fg(Color::DarkGray)),
        Span::raw(todo.title.as_str()),
    ]))
}
