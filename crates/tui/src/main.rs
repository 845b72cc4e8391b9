//! Terminal client for the outlay expense tracker.
//!
//! Renders an entry form, a daily-totals line chart, and the recent
//! expenses list against a running `outlay-api` server. The event loop is
//! synchronous: draw, poll for a key, apply it, repeat.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

mod app;
mod cache;
mod client;
mod store;
mod ui;

use app::App;
use client::ApiClient;
use store::ExpenseStore;

fn main() -> Result<()> {
    let client = ApiClient::from_env()?;
    let mut app = App::new(ExpenseStore::new(client));
    app.reload();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
