//! Showcase - two composed counters driven through scoped stores
//!
//! Mounts the `two_counters` case study in a terminal event loop. The view
//! never touches the parent domain directly: each panel holds a scoped store
//! and sends plain counter actions, which the scope routes back through the
//! parent's dispatch.
//!
//! Keys: Tab = switch panel, k/Up = increment, j/Down = decrement, q = quit

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use case_studies::counter::{CounterAction, CounterState};
use case_studies::two_counters::{self, TwoCountersAction, TwoCountersState};
use crossterm::{
    event::{Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uniflow::{LoggingMiddleware, Store};

/// Polls crossterm on a blocking thread and forwards events into the async
/// loop until cancelled.
fn spawn_event_poller(
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !cancel.is_cancelled() {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    })
}

#[derive(Clone, Copy, PartialEq)]
enum Focus {
    First,
    Second,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::First => Focus::Second,
            Focus::Second => Focus::First,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let store = Store::with_middleware(
        TwoCountersState::default(),
        two_counters::reducer(),
        LoggingMiddleware::new(),
    );

    // One scoped handle per panel; the view only ever sees CounterState.
    let first = store.scope(
        |s: &TwoCountersState| &s.counter1,
        TwoCountersAction::Counter1,
    );
    let second = store.scope(
        |s: &TwoCountersState| &s.counter2,
        TwoCountersAction::Counter2,
    );

    let dirty = Rc::new(Cell::new(true));
    let dirty2 = Rc::clone(&dirty);
    store.observe(move |_: &TwoCountersState| dirty2.set(true));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let _poller = spawn_event_poller(event_tx, cancel.clone());

    let mut focus = Focus::First;

    loop {
        if dirty.replace(false) {
            terminal.draw(|frame| {
                draw(frame, &first.state(), &second.state(), focus);
            })?;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let focused = match focus {
            Focus::First => &first,
            Focus::Second => &second,
        };
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => focused.send(CounterAction::Increment),
            KeyCode::Char('j') | KeyCode::Down => focused.send(CounterAction::Decrement),
            KeyCode::Tab => {
                focus = focus.toggled();
                dirty.set(true);
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    cancel.cancel();
    Ok(())
}

fn draw(frame: &mut Frame, first: &CounterState, second: &CounterState, focus: Focus) {
    let area = frame.area();

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, left, right, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(24),
        Constraint::Length(24),
        Constraint::Fill(1),
    ])
    .flex(Flex::Center)
    .areas(center);

    draw_counter(frame, left, " Counter 1 ", first, focus == Focus::First);
    draw_counter(frame, right, " Counter 2 ", second, focus == Focus::Second);

    let [_, help_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let help = Paragraph::new("Tab: switch  k/Up: +1  j/Down: -1  q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_counter(frame: &mut Frame, area: Rect, title: &str, state: &CounterState, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(format!("{}", state.count))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
