use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};

use crate::{
    app::{
        Portfolio,
        form::{FormState, Mode},
        ui,
    },
    models::Holding,
};

pub struct App {
    portfolio: Portfolio,
    table_state: TableState,
    form: FormState,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            table_state: TableState::default(),
            form: FormState::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(frame, &self.portfolio, &mut self.table_state, &self.form)
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.form.is_open() {
                    self.handle_form_key(key.code);
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('a') => {
                        self.table_state.select(None);
                        self.form.open_create();
                    }
                    KeyCode::Char('e') => {
                        if let Some(holding) = self.selected_holding() {
                            let holding = holding.clone();
                            self.form.open_edit(&holding);
                        }
                    }
                    KeyCode::Char('d') => self.delete_selected(),
                    KeyCode::Esc => self.table_state.select(None),
                    KeyCode::Down => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= holdings.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        holdings.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.form.close(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                let Some(draft) = self.form.submit() else {
                    return;
                };
                match self.form.mode().clone() {
                    Mode::Creating => self.portfolio.add(draft),
                    Mode::Editing(id) => self.portfolio.update(&id, draft),
                    Mode::Viewing => {}
                }
                self.form.close();
            }
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
    }

    fn selected_holding(&self) -> Option<&Holding> {
        let i = self.table_state.selected()?;
        self.portfolio.holdings().get(i)
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_holding().map(|h| h.id().clone()) else {
            return;
        };
        self.portfolio.remove(&id);

        // Keep the selection on a valid row after the delete.
        let remaining = self.portfolio.holdings().len();
        if remaining == 0 {
            self.table_state.select(None);
        } else if let Some(i) = self.table_state.selected() {
            if i >= remaining {
                self.table_state.select(Some(remaining - 1));
            }
        }
    }
}
