use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use super::client::GitHubClient;
use crate::auth::Token;
use crate::error::CifailError;

fn client_for(server: &ServerGuard) -> GitHubClient {
    GitHubClient::new(&server.url(), "acme", "widgets", Token::from("test-token")).unwrap()
}

fn run_json(id: u64, name: Option<&str>, head_sha: &str, pr_numbers: &[u64]) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "run_number": id * 10,
        "status": "completed",
        "conclusion": "failure",
        "head_branch": "main",
        "head_sha": head_sha,
        "created_at": "2024-01-01T00:00:00Z",
        "html_url": format!("https://github.com/acme/widgets/actions/runs/{id}"),
        "pull_requests": pr_numbers.iter().map(|n| json!({"number": n})).collect::<Vec<_>>(),
    })
}

fn job_json(id: u64, name: &str, conclusion: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "conclusion": conclusion,
        "started_at": "2024-01-01T00:00:00Z",
        "completed_at": "2024-01-01T00:05:00Z",
        "html_url": format!("https://github.com/acme/widgets/runs/{id}"),
        "steps": [],
    })
}

#[tokio::test]
async fn test_workflow_runs_requests_failure_status_and_page_size() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/acme/widgets/actions/runs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "failure".into()),
            Matcher::UrlEncoded("per_page".into(), "5".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(json!({ "workflow_runs": [] }).to_string())
        .create_async()
        .await;

    let runs = client_for(&server).workflow_runs(None, 5).await.unwrap();

    mock.assert_async().await;
    assert!(runs.is_empty());
}

#[tokio::test]
async fn test_workflow_runs_filters_by_name_case_insensitively() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "workflow_runs": [
                    run_json(1, Some("CI"), "aaa", &[]),
                    run_json(2, Some("Deploy"), "bbb", &[]),
                    run_json(3, Some("nightly ci build"), "ccc", &[]),
                    run_json(4, None, "ddd", &[]),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let runs = client_for(&server)
        .workflow_runs(Some("ci"), 10)
        .await
        .unwrap();

    // Substring matches only, order preserved, unnamed runs dropped.
    let ids: Vec<u64> = runs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_pr_workflow_runs_matches_by_sha_or_reference() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/pulls/42")
        .with_header("content-type", "application/json")
        .with_body(json!({ "head": { "sha": "headsha", "ref": "feature/login" } }).to_string())
        .create_async()
        .await;
    let runs_mock = server
        .mock("GET", "/repos/acme/widgets/actions/runs")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "failure".into()),
            Matcher::UrlEncoded("branch".into(), "feature/login".into()),
            Matcher::UrlEncoded("per_page".into(), "50".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "workflow_runs": [
                    run_json(1, Some("CI"), "headsha", &[]),
                    run_json(2, Some("CI"), "othersha", &[42]),
                    run_json(3, Some("CI"), "othersha", &[7]),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let runs = client_for(&server).pr_workflow_runs(42).await.unwrap();

    runs_mock.assert_async().await;
    // SHA match alone and PR-reference match alone both qualify.
    let ids: Vec<u64> = runs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_failed_jobs_keeps_only_failure_conclusions() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs/7/jobs")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jobs": [
                    job_json(1, "build", "success"),
                    job_json(2, "test", "failure"),
                    job_json(3, "lint", "cancelled"),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let jobs = client_for(&server).failed_jobs(7).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, 2);
    assert_eq!(jobs[0].name, "test");
}

#[tokio::test]
async fn test_api_error_carries_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .workflow_runs(None, 10)
        .await
        .unwrap_err();

    match err {
        CifailError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// Candidate truncation happens before any job extraction: with three failed
/// runs and a limit of two, only the first two runs have their jobs fetched,
/// and a run whose jobs all succeeded is dropped from the report.
#[tokio::test]
async fn test_truncated_candidates_bound_job_fetches() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "workflow_runs": [
                    run_json(1, Some("CI"), "aaa", &[]),
                    run_json(2, Some("CI"), "bbb", &[]),
                    run_json(3, Some("CI"), "ccc", &[]),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs/1/jobs")
        .with_header("content-type", "application/json")
        .with_body(json!({ "jobs": [job_json(11, "test", "failure")] }).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/repos/acme/widgets/actions/runs/2/jobs")
        .with_header("content-type", "application/json")
        .with_body(json!({ "jobs": [job_json(21, "build", "success")] }).to_string())
        .create_async()
        .await;
    let run3_jobs = server
        .mock("GET", "/repos/acme/widgets/actions/runs/3/jobs")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let limit = 2;

    let mut runs = client.workflow_runs(None, limit).await.unwrap();
    runs.truncate(limit);

    let mut reported = Vec::new();
    for run in &runs {
        let failed_jobs = client.failed_jobs(run.id).await.unwrap();
        if failed_jobs.is_empty() {
            continue;
        }
        reported.push(run.id);
    }

    run3_jobs.assert_async().await;
    // Run 2 was fetched but yielded no failed jobs, so only run 1 reports.
    assert_eq!(reported, vec![1]);
}
