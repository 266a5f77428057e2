use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub Actions workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    /// Unique identifier for the workflow run
    pub id: u64,
    /// Name of the workflow; absent for some externally triggered runs
    pub name: Option<String>,
    /// Run number, unique per workflow
    pub run_number: u64,
    /// Status of the run
    pub status: String,
    /// Conclusion of the run (success, failure, etc.)
    pub conclusion: Option<String>,
    /// Head branch the run was triggered from
    pub head_branch: Option<String>,
    /// SHA of the head commit
    pub head_sha: String,
    /// When the run was created
    pub created_at: DateTime<Utc>,
    /// Web page of the run
    pub html_url: String,
    /// Pull requests associated with the run
    #[serde(default)]
    pub pull_requests: Vec<PullRequestRef>,
}

/// Reference to a pull request embedded in a workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    /// Pull request number
    pub number: u64,
}

/// Job within a workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Unique identifier for the job
    pub id: u64,
    /// Name of the job
    pub name: String,
    /// Conclusion of the job
    pub conclusion: Option<String>,
    /// When the job started; unset while queued
    pub started_at: Option<DateTime<Utc>>,
    /// When the job completed; unset while running
    pub completed_at: Option<DateTime<Utc>>,
    /// Web page of the job
    pub html_url: String,
    /// Ordered steps of the job
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Step within a job.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Name of the step
    pub name: String,
    /// Conclusion of the step
    pub conclusion: Option<String>,
}

/// Pull request details, used to resolve the head commit and branch.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub head: PullRequestHead,
}

/// Head of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestHead {
    /// SHA of the head commit
    pub sha: String,
    /// Head branch name
    #[serde(rename = "ref")]
    pub ref_: String,
}

/// Envelope for the workflow runs listing.
#[derive(Deserialize)]
pub(super) struct WorkflowRunsResponse {
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Envelope for the jobs listing.
#[derive(Deserialize)]
pub(super) struct JobsResponse {
    pub jobs: Vec<Job>,
}
