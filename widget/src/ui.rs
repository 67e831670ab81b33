use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tasklist_core::{Status, Task, TaskListView};

use crate::app::{App, Focus};

const PLACEHOLDER: &str = "Please type your task...";

pub fn draw(frame: &mut Frame, app: &App) {
    let mut title = vec![Span::raw(" To Do List ").bold()];
    if app.view.is_busy() {
        title.push(Span::raw("syncing… ").fg(Color::Yellow));
    }
    let outer = Block::bordered().title(Line::from(title));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [input_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_input(frame, app, input_area);
    draw_body(frame, app, list_area);
    frame.render_widget(
        Paragraph::new(help_text(app)).style(Style::new().fg(Color::DarkGray)),
        help_area,
    );
}

/// The input line sits above a bottom border that divides it from the list.
fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = app.view.input();
    let text = if input.is_empty() {
        PLACEHOLDER.fg(Color::DarkGray)
    } else {
        Span::raw(input)
    };
    let prompt = Line::from(vec!["+ ".bold(), text]);
    frame.render_widget(
        Paragraph::new(prompt).block(Block::new().borders(Borders::BOTTOM)),
        area,
    );

    if app.focus() == Focus::Input && app.view.editing().is_none() {
        // Columns, not chars: wide glyphs take two cells.
        let width = 2usize.saturating_add(Span::raw(input).width());
        let offset = u16::try_from(width).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    match app.view.status() {
        Status::Loading => {
            frame.render_widget(Paragraph::new("Loading..."), area);
        }
        Status::Failed(message) => {
            frame.render_widget(
                Paragraph::new(format!("Error: {message}"))
                    .style(Style::new().fg(Color::Red))
                    .wrap(Wrap { trim: true }),
                area,
            );
        }
        Status::Ready if app.view.tasks().is_empty() => {
            frame.render_widget(Paragraph::new("Nothing to do.".fg(Color::DarkGray)), area);
        }
        Status::Ready => {
            let items: Vec<ListItem> = app
                .view
                .displayed()
                .map(|task| ListItem::new(row(&app.view, task)))
                .collect();
            let list = List::new(items).highlight_style(Style::new().add_modifier(Modifier::REVERSED));
            let mut state = ListState::default();
            if app.focus() == Focus::List {
                state.select(Some(app.selected()));
            }
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn row<'a>(view: &'a TaskListView, task: &'a Task) -> Line<'a> {
    let checkbox = if task.complete { "[x] " } else { "[ ] " };
    if let Some(edit) = view.editing().filter(|edit| edit.id == task.id) {
        return Line::from(vec![
            Span::raw(checkbox),
            Span::raw(edit.draft.as_str()).underlined(),
            Span::raw("▏"),
            Span::raw("  [Save]").fg(Color::Cyan),
        ]);
    }
    let title = if task.complete {
        Span::raw(task.title.as_str()).crossed_out().fg(Color::DarkGray)
    } else {
        Span::raw(task.title.as_str())
    };
    Line::from(vec![
        Span::raw(checkbox),
        title,
        Span::raw("  [Edit]").fg(Color::Cyan),
        Span::raw(" [Delete]").fg(Color::Red),
    ])
}

fn help_text(app: &App) -> &'static str {
    if app.view.editing().is_some() {
        return "enter save · esc cancel · ↑/↓/tab leave row (saves)";
    }
    match app.focus() {
        Focus::Input => "enter add · tab list · ctrl-c quit",
        Focus::List if app.rows_visible() => {
            "space toggle · e edit · d delete · r refresh · tab input · q quit"
        }
        Focus::List => "r refresh · tab input · q quit",
    }
}
