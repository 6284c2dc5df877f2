//! Interactive repository tree explorer

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::fetch::GitHubClient;

pub mod app;
pub mod view;
pub mod worker;

pub use app::{Action, App, WorkerMessage};

const TICK: Duration = Duration::from_millis(100);

pub fn run(client: GitHubClient, repo_spec: String, branch: String) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, Arc::new(client), repo_spec, branch);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: Arc<GitHubClient>,
    repo_spec: String,
    branch: String,
) -> Result<()> {
    let (tx, rx): (Sender<WorkerMessage>, Receiver<WorkerMessage>) = crossbeam_channel::unbounded();
    let mut app = App::new(repo_spec.clone());
    worker::spawn_fetch(Arc::clone(&client), repo_spec.clone(), branch.clone(), tx.clone());

    loop {
        while let Ok(message) = rx.try_recv() {
            app.apply(message);
        }

        terminal.draw(|f| view::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.handle_key(key.code) {
                Action::Quit => return Ok(()),
                Action::Refetch => {
                    tracing::info!("Reloading {}", repo_spec);
                    worker::spawn_fetch(
                        Arc::clone(&client),
                        repo_spec.clone(),
                        branch.clone(),
                        tx.clone(),
                    );
                }
                Action::None => {}
            }
        }
    }
}
