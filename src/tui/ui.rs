//! UI rendering for the TUI.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::timer::{Controls, MemoryLog, Mode};
use crate::tui::app::App;
use crate::tui::presenter::TuiPresenter;

/// Everything a frame needs.
pub struct View<'a> {
    /// Input and overlay state.
    pub app: &'a App,
    /// Session mode, shown in the header.
    pub mode: Mode,
    /// Clock, status and controls.
    pub presenter: &'a TuiPresenter,
    /// Event log, newest first.
    pub log: &'a MemoryLog,
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, view: &View<'_>) {
    let now = Instant::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Clock
            Constraint::Length(1), // Status
            Constraint::Length(3), // Minutes and controls
            Constraint::Min(0),    // Log
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, view.mode, chunks[0]);
    render_clock(frame, view.presenter, now, chunks[1]);
    render_status(frame, view.presenter, now, chunks[2]);
    render_controls(frame, view.app, view.presenter.controls(), chunks[3]);
    render_log(frame, view.log, chunks[4]);
    render_footer(frame, chunks[5]);

    if view.presenter.completion_visible() {
        render_completion(frame);
    }
    if view.app.show_help {
        render_help(frame);
    }
}

fn render_header(frame: &mut Frame<'_>, mode: Mode, area: Rect) {
    let header = Paragraph::new(format!(" dawdle · {mode} "))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the MM:SS clock, highlighting digits mid-flip.
fn render_clock(frame: &mut Frame<'_>, presenter: &TuiPresenter, now: Instant, area: Rect) {
    let digits = presenter.digits();
    let colon_at = digits.chars().count().saturating_sub(2);
    let mut spans = Vec::new();
    for (i, digit) in digits.chars().enumerate() {
        if i == colon_at {
            spans.push(Span::styled(" : ", Style::default().fg(Color::DarkGray)));
        }
        let style = if presenter.is_flipping(i, now) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {digit} "), style));
    }

    let clock = Paragraph::new(vec![Line::default(), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(clock, area);
}

fn render_status(frame: &mut Frame<'_>, presenter: &TuiPresenter, now: Instant, area: Rect) {
    let style = if presenter.status_is_excuse() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };

    let status = Paragraph::new(presenter.visible_status(now))
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame<'_>, app: &App, controls: Controls, area: Rect) {
    let key = |enabled: bool, label: &'static str| {
        let style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };
    let separator = || Span::raw("  ");

    let minutes_style = if controls.minutes {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::raw("minutes: "),
        Span::styled(format!("{:<8}", app.minutes_input), minutes_style),
        separator(),
        key(controls.start, "[s]tart"),
        separator(),
        key(controls.beg, "[b]eg"),
        separator(),
        key(controls.snooze, "[z] snooze"),
        separator(),
        key(controls.reset, "[r]eset"),
        separator(),
        key(controls.restart, "[n] restart"),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn render_log(frame: &mut Frame<'_>, log: &MemoryLog, area: Rect) {
    let items: Vec<ListItem<'_>> = log
        .entries()
        .map(|entry| ListItem::new(entry.line()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let footer = Paragraph::new("0-9:minutes | Enter/s:start | b:beg | ?:help | q:quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_completion(frame: &mut Frame<'_>) {
    let area = centered_rect(50, 30, frame.area());
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "🎉 Time's up!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("n: restart · r: reset · s: start again"),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_help(frame: &mut Frame<'_>) {
    let area = centered_rect(60, 60, frame.area());
    let lines: Vec<Line<'_>> = [
        "0-9 .       edit minutes",
        "Enter, s    start (after some excuses)",
        "b           beg: start right now",
        "z           snooze 30-120 seconds",
        "r           reset",
        "n           restart after time is up",
        "?           toggle help",
        "q, Esc      quit",
    ]
    .into_iter()
    .map(Line::from)
    .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
