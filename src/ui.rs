// UI layer: a simple interactive menu using `dialoguer`. Every handler is a
// thin wrapper that collects input, calls one session operation, and prints
// the outcome; the flows themselves live in `session`.

use crate::api::GithubClient;
use crate::session::{render_table, Session};
use anyhow::Result;
use dialoguer::{Confirm, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const HELP_TEXT: &str = "To get your GitHub Personal Access Token:\n\
    1. Go to https://github.com/settings/tokens\n\
    2. Click 'Generate new token'.\n\
    3. Select the scopes (permissions) you need.\n\
    4. Click 'Generate token'.\n\
    5. Copy the token and paste it here.";

/// Main interactive menu. Owns the session for the lifetime of the process
/// and runs a select loop until the user chooses "Exit".
pub fn main_menu(api: GithubClient) -> Result<()> {
    let mut session = Session::new();
    loop {
        let items = vec![
            "Fetch repositories",
            "Toggle selection",
            "Delete selected repositories",
            "How to get a token",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_fetch(&api, &mut session)?,
            1 => handle_toggle(&mut session)?,
            2 => handle_delete(&api, &mut session)?,
            3 => println!("{}", HELP_TEXT),
            4 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Spinner shown while a blocking network call is in flight.
fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg);
    pb
}

/// Prompt for the token (masked) and replace the list with a fresh fetch.
/// An empty prompt keeps the previously entered token.
fn handle_fetch(api: &GithubClient, session: &mut Session) -> Result<()> {
    let token: String = Password::new()
        .with_prompt("GitHub personal access token")
        .allow_empty_password(true)
        .interact()?;
    if !token.trim().is_empty() {
        session.token = token;
    }

    let pb = spinner("Fetching repositories...");
    let outcome = session.fetch_repositories(api);
    pb.finish_and_clear();

    match outcome {
        Ok(()) => {
            println!("Authenticated as {}.", session.username);
            println!("{}", render_table(&session.repositories));
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

/// Flip one row's selection mark by its table row number.
fn handle_toggle(session: &mut Session) -> Result<()> {
    if session.repositories.is_empty() {
        println!("No repositories to show.");
        return Ok(());
    }
    println!("{}", render_table(&session.repositories));
    // Rows are shown 1-based; the session indexes from 0.
    let row: usize = Input::new().with_prompt("Row number to toggle").interact_text()?;
    let toggled = row
        .checked_sub(1)
        .map(|index| session.toggle_selected(index))
        .unwrap_or(false);
    if !toggled {
        println!("No repository at row {}.", row);
        return Ok(());
    }
    println!("{}", render_table(&session.repositories));
    Ok(())
}

/// Run the delete pass over the selected rows and report per-repository
/// results. The yes/no prompt is handed to the session as a closure so the
/// flow decides when (and whether) to ask.
fn handle_delete(api: &GithubClient, session: &mut Session) -> Result<()> {
    let confirm = || {
        Confirm::new()
            .with_prompt("Are you sure you want to delete the selected repositories?")
            .default(false)
            .interact()
            .unwrap_or(false)
    };

    match session.delete_selected(api, confirm) {
        Ok(Some(report)) => {
            for name in &report.deleted {
                println!("Repository {} deleted successfully.", name);
            }
            for (_, err) in &report.failed {
                println!("{} Please try again.", err);
            }
            println!("{}", render_table(&session.repositories));
        }
        Ok(None) => println!("Deletion cancelled."),
        Err(e) => println!("{}", e),
    }
    Ok(())
}
