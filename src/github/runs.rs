use log::debug;

use super::client::GitHubClient;
use super::types::{Job, JobsResponse, PullRequest, WorkflowRun, WorkflowRunsResponse};
use crate::error::Result;

/// Server-side status filter; only runs that concluded in failure matter here.
const STATUS_FAILURE: &str = "failure";
/// Page size used when listing runs on the pull-request path.
const PR_PAGE_SIZE: usize = 50;

impl GitHubClient {
    /// List failed workflow runs, optionally narrowed by a case-insensitive
    /// substring match on the workflow name. Unnamed runs never match a
    /// filter. Original listing order is preserved.
    pub async fn workflow_runs(
        &self,
        workflow_name: Option<&str>,
        per_page: usize,
    ) -> Result<Vec<WorkflowRun>> {
        let query = [
            ("status", STATUS_FAILURE.to_string()),
            ("per_page", per_page.to_string()),
        ];
        let response: WorkflowRunsResponse =
            self.get(&self.repo_url("actions/runs"), &query).await?;

        let mut runs = response.workflow_runs;
        if let Some(name) = workflow_name {
            let name = name.to_lowercase();
            runs.retain(|run| {
                run.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&name))
            });
        }

        Ok(runs)
    }

    /// List failed workflow runs associated with a pull request.
    ///
    /// Resolves the PR's head commit and branch first, lists failed runs on
    /// that branch, then keeps runs matching the PR either by head SHA or by
    /// an embedded pull-request reference. Either match suffices.
    pub async fn pr_workflow_runs(&self, pr_number: u64) -> Result<Vec<WorkflowRun>> {
        let pr: PullRequest = self
            .get(&self.repo_url(&format!("pulls/{pr_number}")), &[])
            .await?;
        debug!("PR #{pr_number} head is {} on {}", pr.head.sha, pr.head.ref_);

        let query = [
            ("status", STATUS_FAILURE.to_string()),
            ("branch", pr.head.ref_.clone()),
            ("per_page", PR_PAGE_SIZE.to_string()),
        ];
        let response: WorkflowRunsResponse =
            self.get(&self.repo_url("actions/runs"), &query).await?;

        let runs = response
            .workflow_runs
            .into_iter()
            .filter(|run| {
                run.head_sha == pr.head.sha
                    || run.pull_requests.iter().any(|r| r.number == pr_number)
            })
            .collect();

        Ok(runs)
    }

    /// List all jobs for a workflow run.
    pub async fn jobs_for_run(&self, run_id: u64) -> Result<Vec<Job>> {
        let response: JobsResponse = self
            .get(&self.repo_url(&format!("actions/runs/{run_id}/jobs")), &[])
            .await?;
        Ok(response.jobs)
    }

    /// List only the jobs of a run that concluded in failure.
    pub async fn failed_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        let jobs = self.jobs_for_run(run_id).await?;
        Ok(jobs
            .into_iter()
            .filter(|job| job.conclusion.as_deref() == Some("failure"))
            .collect())
    }
}
