// Session state and the three operations (authenticate, fetch, delete
// selected). The interactive menu in `ui` is a thin shell over these
// methods; anything that talks to the network or mutates state lives here
// so it can be exercised without a terminal.

use log::{info, warn};
use serde::Deserialize;

use crate::api::GithubClient;
use crate::error::ApiError;

/// Fallback shown when the API returns a null description.
pub const NO_DESCRIPTION: &str = "No description available";

/// One repository row. `name` and `description` come verbatim from the
/// API's JSON; `selected` is local-only and resets whenever the list is
/// replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub selected: bool,
}

/// Outcome of one delete pass. Failures are per-repository and never abort
/// the rest of the batch.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, ApiError)>,
}

/// Everything the UI shows: the token, the login resolved from it, and the
/// last fetched repository list. Nothing here survives the process.
#[derive(Default)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub repositories: Vec<Repository>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    fn require_token(&self) -> Result<&str, ApiError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(token)
    }

    /// Resolve the login that owns the token and store it. Errors leave the
    /// previous username untouched.
    pub fn authenticate(&mut self, api: &GithubClient) -> Result<&str, ApiError> {
        let token = self.require_token()?.to_string();
        let login = api.current_user(&token)?;
        self.username = login;
        Ok(&self.username)
    }

    /// Authenticate, then replace the repository list with the first page
    /// for the resolved user. On a fetch failure the visible list is
    /// cleared rather than left stale.
    pub fn fetch_repositories(&mut self, api: &GithubClient) -> Result<(), ApiError> {
        self.authenticate(api)?;
        let token = self.token.trim().to_string();
        match api.list_repos(&self.username, &token) {
            Ok(repos) => {
                self.repositories = repos;
                Ok(())
            }
            Err(e) => {
                self.repositories.clear();
                Err(e)
            }
        }
    }

    /// Flip one row's selection mark. Out-of-range indices are ignored and
    /// reported back to the caller.
    pub fn toggle_selected(&mut self, index: usize) -> bool {
        match self.repositories.get_mut(index) {
            Some(repo) => {
                repo.selected = !repo.selected;
                true
            }
            None => false,
        }
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.repositories
            .iter()
            .enumerate()
            .filter(|(_, r)| r.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Delete every selected repository. The flow mirrors the fetch path:
    /// blank token and authentication failures abort before anything is
    /// deleted, as does an empty selection. `confirm` is asked exactly once
    /// before the first delete; answering no returns `Ok(None)` with no
    /// state change at all.
    ///
    /// Rows are walked in reverse index order so removals never shift the
    /// indices still pending. Only repositories whose DELETE returned 204
    /// leave the local list; failed ones stay visible (and selected) so the
    /// user can see what still exists remotely and retry.
    pub fn delete_selected<F>(
        &mut self,
        api: &GithubClient,
        confirm: F,
    ) -> Result<Option<DeleteReport>, ApiError>
    where
        F: FnOnce() -> bool,
    {
        let token = self.require_token()?.to_string();

        // Re-resolve the login so deletion URLs always use a fresh username.
        self.username = api.current_user(&token)?;

        let selected = self.selected_indices();
        if selected.is_empty() {
            return Err(ApiError::NoSelection);
        }

        if !confirm() {
            return Ok(None);
        }

        let mut report = DeleteReport::default();
        for &index in selected.iter().rev() {
            let repo_name = self.repositories[index].name.clone();
            match api.delete_repo(&self.username, &repo_name, &token) {
                Ok(()) => {
                    info!("Repository {} deleted successfully.", repo_name);
                    self.repositories.remove(index);
                    report.deleted.push(repo_name);
                }
                Err(e) => {
                    warn!("Failed to delete repository {}: {}", repo_name, e);
                    report.failed.push((repo_name, e));
                }
            }
        }
        Ok(Some(report))
    }
}

/// Render the repository list as an aligned text table: row number,
/// selection marker, name, description. Pure function over the rows so the
/// rendering rules are testable without a terminal.
pub fn render_table(repositories: &[Repository]) -> String {
    if repositories.is_empty() {
        return "No repositories to show.".to_string();
    }
    let name_width = repositories
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    out.push_str(&format!("  #  Sel  {:<width$}  Description\n", "Name", width = name_width));
    for (i, repo) in repositories.iter().enumerate() {
        let marker = if repo.selected { "[x]" } else { "[ ]" };
        let description = repo.description.as_deref().unwrap_or(NO_DESCRIPTION);
        out.push_str(&format!(
            "{:>3}  {}  {:<width$}  {}\n",
            i + 1,
            marker,
            repo.name,
            description,
            width = name_width
        ));
    }
    out
}
