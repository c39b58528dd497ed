// API client module: a small blocking HTTP client for the three GitHub REST
// calls this tool needs (identify the token's owner, list their repositories,
// delete one repository). Each method is a plain request/response function
// with no UI coupling, so the flows in `session` can be tested against a
// local mock server.

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::ApiError;
use crate::session::Repository;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const REPOS_PER_PAGE: u32 = 100;

/// Blocking client holding the reqwest client and the API base URL.
/// The token is not stored here; it belongs to the session and is passed
/// into each call, keeping these methods stateless.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

/// Identity response; only the login matters to us.
#[derive(serde::Deserialize)]
struct UserResponse {
    login: String,
}

impl GithubClient {
    /// Create a client against the real GitHub API, honoring a
    /// `GITHUB_API_URL` override (used by tests to point at a mock server).
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("gh-repo-sweeper/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(GithubClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// GitHub expects `Authorization: token <TOKEN>` for classic personal
    /// access tokens.
    fn auth_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(val) = HeaderValue::from_str(&format!("token {}", token)) {
            headers.insert(AUTHORIZATION, val);
        }
        headers
    }

    /// GET /user — resolve the login name that owns the token.
    /// 200 yields the login; any other status is an `Auth` error carrying
    /// the code.
    pub fn current_user(&self, token: &str) -> Result<String, ApiError> {
        let url = format!("{}/user", self.base_url);
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .headers(Self::auth_headers(token))
            .send()?;
        if res.status().as_u16() != 200 {
            return Err(ApiError::Auth(res.status().as_u16()));
        }
        let user: UserResponse = res.json()?;
        Ok(user.login)
    }

    /// GET /users/{username}/repos?per_page=100 — first page only, in the
    /// order the API returns. Non-200 is a `Fetch` error with the code.
    pub fn list_repos(&self, username: &str, token: &str) -> Result<Vec<Repository>, ApiError> {
        let url = format!(
            "{}/users/{}/repos?per_page={}",
            self.base_url, username, REPOS_PER_PAGE
        );
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .headers(Self::auth_headers(token))
            .send()?;
        if res.status().as_u16() != 200 {
            return Err(ApiError::Fetch(res.status().as_u16()));
        }
        let repos: Vec<Repository> = res.json()?;
        Ok(repos)
    }

    /// DELETE /repos/{username}/{repo_name} — 204 means deleted, anything
    /// else is a per-repository `Delete` error.
    pub fn delete_repo(&self, username: &str, repo_name: &str, token: &str) -> Result<(), ApiError> {
        let url = format!("{}/repos/{}/{}", self.base_url, username, repo_name);
        debug!("DELETE {}", url);
        let res = self
            .client
            .delete(&url)
            .headers(Self::auth_headers(token))
            .send()?;
        if res.status().as_u16() != 204 {
            return Err(ApiError::Delete {
                repo: repo_name.to_string(),
                status: res.status().as_u16(),
            });
        }
        Ok(())
    }
}
