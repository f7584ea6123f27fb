use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};

use crate::error::Result;
use crate::ledger::{Action, Ledger};
use crate::models::category::cycle_category;
use crate::storage::BlobStore;

/// The form field that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Category,
    Amount,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Type => Field::Category,
            Field::Category => Field::Amount,
            Field::Amount => Field::Type,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Type => Field::Amount,
            Field::Category => Field::Type,
            Field::Amount => Field::Category,
        }
    }
}

pub struct App<S> {
    pub ledger: Ledger<S>,
    pub focus: Field,
    pub list_state: ListState,
    /// Message shown in the error popup until dismissed.
    pub alert: Option<String>,
    pub running: bool,
}

impl<S: BlobStore> App<S> {
    pub fn new(ledger: Ledger<S>) -> Self {
        let mut list_state = ListState::default();
        if !ledger.transactions().is_empty() {
            list_state.select(Some(0));
        }

        App {
            ledger,
            focus: Field::Type,
            list_state,
            alert: None,
            running: true,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return Ok(());
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.alert = None;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Up => self.previous(),
            KeyCode::Down => self.next(),
            KeyCode::Left => self.change_selection(false).await?,
            KeyCode::Right => self.change_selection(true).await?,
            KeyCode::Enter => self.submit().await?,
            KeyCode::Backspace => self.handle_backspace().await?,
            KeyCode::Char(c) if self.focus == Field::Amount => self.handle_input(c).await?,
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }

        Ok(())
    }

    async fn change_selection(&mut self, forward: bool) -> Result<()> {
        let draft = self.ledger.draft().clone();
        match self.focus {
            Field::Type => {
                self.ledger
                    .dispatch(Action::SelectType(draft.transaction_type.toggle()))
                    .await
            }
            Field::Category => {
                let category = cycle_category(draft.transaction_type, &draft.category, forward);
                self.ledger
                    .dispatch(Action::SetCategory(category.to_string()))
                    .await
            }
            Field::Amount => Ok(()),
        }
    }

    pub async fn handle_input(&mut self, c: char) -> Result<()> {
        if !(c.is_ascii_digit() || c == '.') {
            return Ok(());
        }

        let mut amount = self.ledger.draft().amount.clone();
        amount.push(c);
        self.ledger.dispatch(Action::SetAmount(amount)).await
    }

    pub async fn handle_backspace(&mut self) -> Result<()> {
        match self.focus {
            Field::Amount => {
                let mut amount = self.ledger.draft().amount.clone();
                amount.pop();
                self.ledger.dispatch(Action::SetAmount(amount)).await
            }
            Field::Category => self.ledger.dispatch(Action::SetCategory(String::new())).await,
            Field::Type => Ok(()),
        }
    }

    /// Record the draft. Validation failures become an alert; storage
    /// failures are returned.
    pub async fn submit(&mut self) -> Result<()> {
        match self.ledger.submit().await {
            Ok(_) => {
                let last = self.ledger.transactions().len().saturating_sub(1);
                self.list_state.select(Some(last));
                Ok(())
            }
            Err(err) if err.is_validation() => {
                self.alert = Some(err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    pub fn next(&mut self) {
        let len = self.ledger.transactions().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.ledger.transactions().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

pub async fn run_app<S: BlobStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<S>,
) -> anyhow::Result<()> {
    while app.running {
        terminal.draw(|f| super::render::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }
    }

    Ok(())
}
