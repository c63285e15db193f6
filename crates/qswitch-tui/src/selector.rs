//! Interactive candidate picker
//!
//! Ratatui modal listing the related files of a switch request. It draws on
//! stderr, so stdout stays free for `--print` output and shell pipelines.

use std::io::{self, Stderr};
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use qswitch_app::PickItem;
use qswitch_core::prelude::*;
use qswitch_core::MAX_INDEX_SHORTCUTS;

/// Result of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionResult {
    /// Index into the offered items
    Selected(usize),
    /// User cancelled (q, Esc or Ctrl+C)
    Cancelled,
}

/// Cursor state for the picker
struct SelectorState {
    selected: usize,
    list_state: ListState,
}

impl SelectorState {
    fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    fn select_next(&mut self, max: usize) {
        if self.selected + 1 < max {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }
}

/// What a key press does to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Done(SelectionResult),
}

/// Show the picker for `items` and block until the user chooses.
///
/// `workspace` is shown in the header for context. An empty `items` list is
/// treated as a cancelled pick.
pub fn select_candidate(items: &[PickItem], workspace: &Path) -> Result<SelectionResult> {
    if items.is_empty() {
        return Ok(SelectionResult::Cancelled);
    }

    let mut terminal = enter()?;
    let result = event_loop(&mut terminal, items, workspace);
    leave(&mut terminal);
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    items: &[PickItem],
    workspace: &Path,
) -> Result<SelectionResult> {
    let mut state = SelectorState::new();

    loop {
        terminal
            .draw(|frame| render_selector(frame, items, workspace, &mut state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if !event::poll(Duration::from_millis(100)).map_err(|e| Error::terminal(e.to_string()))? {
            continue;
        }

        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read().map_err(|e| Error::terminal(e.to_string()))?
        {
            if let KeyOutcome::Done(result) = handle_key(code, modifiers, &mut state, items.len())
            {
                return Ok(result);
            }
        }
    }
}

fn handle_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut SelectorState,
    count: usize,
) -> KeyOutcome {
    if is_cancel_key(code, modifiers) {
        return KeyOutcome::Done(SelectionResult::Cancelled);
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(count),
        KeyCode::Enter => return KeyOutcome::Done(SelectionResult::Selected(state.selected)),
        KeyCode::Char(c) => {
            if let Some(index) = validate_selection(c, count) {
                return KeyOutcome::Done(SelectionResult::Selected(index));
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn enter() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(Error::TerminalInit(e.to_string()));
    }
    Terminal::new(CrosstermBackend::new(stderr)).map_err(|e| Error::TerminalInit(e.to_string()))
}

fn leave<B: Backend>(terminal: &mut Terminal<B>) {
    restore_terminal();
    if let Err(e) = terminal.show_cursor() {
        debug!("Failed to show cursor: {}", e);
    }
}

/// Leave raw mode and the alternate screen on stderr.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        debug!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stderr(), LeaveAlternateScreen) {
        debug!("Failed to leave alternate screen: {}", e);
    }
}

fn render_selector(
    frame: &mut Frame,
    items: &[PickItem],
    workspace: &Path,
    state: &mut SelectorState,
) {
    let area = frame.area();

    let modal_width = (area.width * 70 / 100).clamp(40, 80).min(area.width);
    let content_height = items.len() as u16 + 9; // items + header/footer/borders
    let modal_height = content_height.min(area.height);
    let modal_area = center_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Quick Switch ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let inner_area = outer_block.inner(modal_area);
    frame.render_widget(outer_block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(inner_area);

    let text_width = modal_width.saturating_sub(4) as usize;

    let header = Paragraph::new(vec![
        Line::from("Related files in:"),
        Line::from(Span::styled(
            truncate_start(&workspace.display().to_string(), text_width),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let shortcut = if i < MAX_INDEX_SHORTCUTS {
                format!("[{}] ", i + 1)
            } else {
                "    ".to_string()
            };
            let label = truncate_start(&item.label, text_width.saturating_sub(8));
            ListItem::new(Line::from(vec![
                Span::styled(shortcut, Style::default().fg(Color::Yellow).bold()),
                Span::raw(label),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Switch to ")
                .title_style(Style::default().fg(Color::White)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[1], &mut state.list_state);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Open  "),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::raw(" Quick select  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

/// Center a rectangle within another rectangle
fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Keep the end of `text` within `max_width` display columns.
fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        kept.push(c);
    }
    kept.reverse();
    format!("...{}", kept.into_iter().collect::<String>())
}

/// Convert a digit key to an item index.
pub fn validate_selection(key: char, count: usize) -> Option<usize> {
    let number = key.to_digit(10)? as usize;
    if number == 0 || number > count.min(MAX_INDEX_SHORTCUTS) {
        return None;
    }
    Some(number - 1)
}

/// Check if a key press is a cancellation request
pub fn is_cancel_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Esc => true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}
