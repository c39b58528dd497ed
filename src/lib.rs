// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive tool.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interactions with the GitHub REST API
//   (identify the token's owner, list repositories, delete a repository).
// - `error`: The typed error taxonomy shared by `api` and `session`.
// - `session`: The session state (token, username, repository list) and the
//   operations over it, independent of any terminal handling.
// - `ui`: Implements the interactive menu flows and delegates everything
//   else to `session`.
//
// The UI depends on the session operations and never the other way around,
// so the flows can be tested against a mock HTTP server without a terminal.
pub mod api;
pub mod error;
pub mod session;
pub mod ui;
