// End-to-end flow against a mock GitHub API: authenticate with a token,
// fetch the listing, render the table, then bulk-delete a selection.

use gh_repo_sweeper::api::GithubClient;
use gh_repo_sweeper::session::{render_table, Session, NO_DESCRIPTION};

#[test]
fn fetch_and_render_two_repositories() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/user")
        .match_header("authorization", "token abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "login": "alice" }).to_string())
        .create();
    server
        .mock("GET", "/users/alice/repos?per_page=100")
        .match_header("authorization", "token abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!([
                { "name": "repo1", "description": null },
                { "name": "repo2", "description": "desc" }
            ])
            .to_string(),
        )
        .create();

    let api = GithubClient::with_base_url(server.url()).unwrap();
    let mut session = Session::new();
    session.token = "abc123".to_string();

    session.fetch_repositories(&api).unwrap();

    assert_eq!(session.username, "alice");
    assert_eq!(session.repositories.len(), 2);

    let table = render_table(&session.repositories);
    let lines: Vec<&str> = table.lines().collect();
    // Header plus two rows.
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("repo1"));
    assert!(lines[1].contains(NO_DESCRIPTION));
    assert!(lines[2].contains("repo2"));
    assert!(lines[2].contains("desc"));
}

#[test]
fn fetch_then_delete_selected_repository() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "login": "alice" }).to_string())
        .expect(2) // once for the fetch, once re-validating before deletion
        .create();
    server
        .mock("GET", "/users/alice/repos?per_page=100")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!([
                { "name": "repo1", "description": null },
                { "name": "repo2", "description": "desc" }
            ])
            .to_string(),
        )
        .create();
    let delete = server
        .mock("DELETE", "/repos/alice/repo1")
        .match_header("authorization", "token abc123")
        .with_status(204)
        .create();

    let api = GithubClient::with_base_url(server.url()).unwrap();
    let mut session = Session::new();
    session.token = "abc123".to_string();
    session.fetch_repositories(&api).unwrap();

    session.toggle_selected(0);
    let report = session.delete_selected(&api, || true).unwrap().unwrap();

    assert_eq!(report.deleted, vec!["repo1".to_string()]);
    assert!(report.failed.is_empty());
    assert_eq!(session.repositories.len(), 1);
    assert_eq!(session.repositories[0].name, "repo2");
    delete.assert();
}
