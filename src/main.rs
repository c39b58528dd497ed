// Entrypoint for the CLI application.
// - Keeps `main` small: create the GitHub client and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling at the edge.

use gh_repo_sweeper::{api::GithubClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Talks to https://api.github.com unless `GITHUB_API_URL` overrides it.
    // See `api::GithubClient::from_env`.
    let api = GithubClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api)?;
    Ok(())
}
