//! Interactive terminal frontend
//!
//! An input field, the last conversion underneath, and a popup menu of the
//! operations that apply to the current input. Enter opens the menu, Esc
//! closes it (or exits when no menu is open), and the last conversion is
//! persisted after every apply and again on exit.

use crate::conversion::{self, EmptyInput, Op};
use crate::state::{StateRecord, StateStore};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListState, Paragraph};
use ratatui::{Frame, Terminal};
use std::io;

/// Conversion menu state.
#[derive(Debug, PartialEq, Eq)]
enum Menu {
    Closed,
    /// Applicable operations in catalog order, with the highlighted index.
    Ops { ops: Vec<Op>, selected: usize },
    /// Classification failed: empty or whitespace-only input.
    Invalid,
    /// Classification succeeded but nothing applies.
    NoConversions,
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct App {
    store: StateStore,
    input: String,
    label: String,
    result: String,
    menu: Menu,
}

/// Run the frontend until the user exits.
pub fn run(store: StateStore, restored: StateRecord) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(store, restored);
    let result = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

impl App {
    fn new(store: StateStore, restored: StateRecord) -> Self {
        Self {
            store,
            input: restored.input,
            label: restored.label,
            result: restored.result,
            menu: Menu::Closed,
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if self.on_key(key) == Flow::Exit {
                    // Save whatever is on screen, even if no conversion
                    // happened this session
                    self.persist();
                    return Ok(());
                }
            }
        }
    }

    // ==================== Key Handling ====================

    fn on_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Exit;
        }
        match &mut self.menu {
            Menu::Closed => match key.code {
                KeyCode::Esc => return Flow::Exit,
                KeyCode::Enter => self.open_menu(),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(ch);
                }
                _ => {}
            },
            Menu::Invalid | Menu::NoConversions => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.menu = Menu::Closed,
                _ => {}
            },
            Menu::Ops { ops, selected } => match key.code {
                KeyCode::Esc => self.menu = Menu::Closed,
                KeyCode::Up => *selected = selected.saturating_sub(1),
                KeyCode::Down => *selected = (*selected + 1).min(ops.len() - 1),
                KeyCode::Enter => {
                    let op = ops[*selected];
                    self.menu = Menu::Closed;
                    self.apply_conversion(op);
                }
                _ => {}
            },
        }
        Flow::Continue
    }

    fn open_menu(&mut self) {
        self.menu = match conversion::classify(&self.input) {
            Err(EmptyInput) => {
                tracing::debug!("No classification for empty input");
                Menu::Invalid
            }
            Ok(classification) => {
                let ops = conversion::available(classification);
                tracing::debug!(input = %self.input, count = ops.len(), "Opened conversion menu");
                if ops.is_empty() {
                    Menu::NoConversions
                } else {
                    Menu::Ops { ops, selected: 0 }
                }
            }
        };
    }

    fn apply_conversion(&mut self, op: Op) {
        match conversion::convert(&self.input, op) {
            Ok(conv) => {
                self.label = conv.label.to_string();
                self.result = conv.value;
                tracing::info!(label = %self.label, result = %self.result, "Conversion performed");
                self.persist();
            }
            Err(e) => {
                // An offered operation can still overflow; show the error
                // where the result goes and leave the saved state alone.
                tracing::warn!(label = op.label(), error = %e, "Conversion failed");
                self.label = op.label().to_string();
                self.result = format!("error: {e}");
            }
        }
    }

    fn persist(&self) {
        let record = StateRecord::new(
            self.input.as_str(),
            self.label.as_str(),
            self.result.as_str(),
        );
        // A failed save is logged and otherwise ignored
        if let Err(e) = self.store.save(&record) {
            tracing::warn!(error = %e, "Failed to persist state");
        }
    }

    // ==================== Rendering ====================

    #[allow(clippy::cast_possible_truncation)] // cursor column is clamped to the input area
    fn render(&self, frame: &mut Frame) {
        let [input_area, conversion_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let input = Paragraph::new(self.input.as_str())
            .block(Block::bordered().title("Number or character"));
        frame.render_widget(input, input_area);

        let conversion = Paragraph::new(vec![
            Line::from(vec!["Conversion: ".dim(), Span::raw(self.label.as_str())]),
            Line::from(vec!["Result:     ".dim(), Span::raw(self.result.as_str())]),
        ]);
        frame.render_widget(conversion, conversion_area);

        frame.render_widget(Paragraph::new(self.help_line()), help_area);

        if self.menu == Menu::Closed {
            let col = input_area.x + 1 + self.input.chars().count() as u16;
            frame.set_cursor_position(Position::new(
                col.min(input_area.right().saturating_sub(2)),
                input_area.y + 1,
            ));
        } else {
            self.render_menu(frame);
        }
    }

    fn help_line(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match self.menu {
            Menu::Closed => &[("Enter", "conversions"), ("Esc", "quit")],
            Menu::Ops { .. } => &[("↑/↓", "select"), ("Enter", "convert"), ("Esc", "close")],
            Menu::Invalid | Menu::NoConversions => &[("Esc", "close")],
        };
        let mut spans: Vec<Span<'static>> = vec![" ".into()];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(" · ".dim());
            }
            spans.push(Span::styled(*key, Style::new().add_modifier(Modifier::BOLD)));
            spans.push(format!(" {action}").dim());
        }
        Line::from(spans)
    }

    #[allow(clippy::cast_possible_truncation)] // the menu never has more than seven rows
    fn render_menu(&self, frame: &mut Frame) {
        match &self.menu {
            Menu::Closed => {}
            Menu::Ops { ops, selected } => {
                let area = centered(frame.area(), 26, ops.len() as u16 + 2);
                frame.render_widget(Clear, area);
                let items: Vec<Line> = ops.iter().map(|op| Line::from(op.label())).collect();
                let list = List::new(items)
                    .block(Block::bordered().title("Convert"))
                    .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
                    .highlight_symbol("> ");
                let mut state = ListState::default().with_selected(Some(*selected));
                frame.render_stateful_widget(list, area, &mut state);
            }
            Menu::Invalid => {
                let area = centered(frame.area(), 26, 3);
                frame.render_widget(Clear, area);
                let message = Paragraph::new("INVALID INPUT".bold()).block(Block::bordered());
                frame.render_widget(message, area);
            }
            Menu::NoConversions => {
                let area = centered(frame.area(), 30, 3);
                frame.render_widget(Clear, area);
                let message = Paragraph::new("No conversions available").block(Block::bordered());
                frame.render_widget(message, area);
            }
        }
    }
}

/// Rect of the given size centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
