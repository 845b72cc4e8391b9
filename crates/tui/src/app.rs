//! Application state: the entry form, focus handling, and the key loop
//! glue between the terminal and the expense store.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use outlay_core::categories::{DEFAULT_CATEGORY, SUGGESTED_CATEGORIES};

use crate::client::{CreateExpenseRequest, Expense};
use crate::store::ExpenseStore;

/// Which form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Date,
    Note,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Note,
            FormField::Note => FormField::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Amount => FormField::Note,
            FormField::Date => FormField::Amount,
            FormField::Note => FormField::Date,
        }
    }
}

/// The entry form: amount and note as free text, category picked from the
/// suggested list, date defaulting to today.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub note: String,
    pub category_index: usize,
    pub date: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            note: String::new(),
            category_index: default_category_index(),
            date: today.to_string(),
        }
    }

    /// Clear the form back to its defaults (empty amount/note, default
    /// category, date = today).
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// The currently selected category label.
    pub fn category(&self) -> &'static str {
        SUGGESTED_CATEGORIES[self.category_index]
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % SUGGESTED_CATEGORIES.len();
    }

    pub fn prev_category(&mut self) {
        self.category_index =
            (self.category_index + SUGGESTED_CATEGORIES.len() - 1) % SUGGESTED_CATEGORIES.len();
    }

    /// The request body for submission: raw form text, the server owns
    /// validation and coercion.
    pub fn to_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: self.amount.clone(),
            note: self.note.clone(),
            category: self.category().to_string(),
            date: self.date.clone(),
        }
    }
}

fn default_category_index() -> usize {
    SUGGESTED_CATEGORIES
        .iter()
        .position(|c| *c == DEFAULT_CATEGORY)
        .unwrap_or(0)
}

/// Top-level application state.
pub struct App {
    pub store: ExpenseStore,
    pub form: ExpenseForm,
    pub focus: FormField,
    pub expenses: Vec<Expense>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store,
            form: ExpenseForm::new(Local::now().date_naive()),
            focus: FormField::Amount,
            expenses: Vec::new(),
            status: None,
            should_quit: false,
        }
    }

    /// Pull the current list out of the store (fetching on cache miss).
    /// Fetch failures land in the status line; the app keeps running.
    pub fn reload(&mut self) {
        match self.store.expenses() {
            Ok(list) => self.expenses = list.to_vec(),
            Err(err) => self.status = Some(format!("Fetch failed: {err:#}")),
        }
    }

    /// Submit the form. On success the form clears back to defaults and
    /// the list refreshes; on failure the server's message is shown.
    pub fn submit(&mut self) {
        match self.store.create(&self.form.to_request()) {
            Ok(created) => {
                self.status = Some(format!(
                    "Recorded {} {:.2}",
                    created.category, created.amount
                ));
                self.form.reset(Local::now().date_naive());
                self.reload();
            }
            Err(err) => self.status = Some(format!("Submit failed: {err:#}")),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left => self.form.prev_category(),
            KeyCode::Right => self.form.next_category(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.active_field_mut().pop();
            }
            KeyCode::Char(c) => self.active_field_mut().push(c),
            _ => {}
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Amount => &mut self.form.amount,
            FormField::Date => &mut self.form.date,
            FormField::Note => &mut self.form.note,
        }
    }
}
