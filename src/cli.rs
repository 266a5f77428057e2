use anyhow::{anyhow, bail, Result};
use clap::Parser;
use log::{debug, info};

use crate::auth::Token;
use crate::error::CifailError;
use crate::github::GitHubClient;
use crate::output;

const GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Parser)]
#[command(name = "cifail")]
#[command(author, version, about = "Surface failed GitHub Actions runs and their failing jobs", long_about = None)]
pub struct Cli {
    /// GitHub repository in 'owner/repo' format
    #[arg(short, long)]
    repo: String,

    /// Filter runs by workflow name (partial match)
    #[arg(short, long)]
    workflow: Option<String>,

    /// Only show runs belonging to a specific pull request
    #[arg(short, long)]
    pr: Option<u64>,

    /// Maximum number of workflow runs to inspect
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// GitHub token (falls back to GITHUB_TOKEN)
    #[arg(short, long, env = "GITHUB_TOKEN")]
    token: Option<String>,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let token = self.token()?;
        let (owner, repo) = parse_repo(&self.repo)?;

        let client = GitHubClient::new(GITHUB_API_URL, &owner, &repo, token)?;

        output::print_fetch_header(&self.repo);

        self.report_failures(&client).await.map_err(|e| match e {
            CifailError::Api { status: 404, .. } => {
                anyhow!("Repository '{}' not found or not accessible", self.repo)
            }
            CifailError::Api { status: 401, .. } => {
                anyhow!("Invalid or expired GitHub token")
            }
            e => anyhow!(e),
        })
    }

    /// Drive selection, extraction and rendering in sequence.
    ///
    /// Runs are rendered as soon as their failed jobs arrive, so anything
    /// already printed stays visible if a later fetch fails.
    async fn report_failures(&self, client: &GitHubClient) -> crate::error::Result<()> {
        if let Some(pr) = self.pr {
            output::print_note(&format!("Filtering by PR #{pr}"));
        }

        let spinner = output::FetchSpinner::start("Fetching failed workflow runs");
        let fetched = match self.pr {
            Some(pr) => client.pr_workflow_runs(pr).await,
            None => {
                client
                    .workflow_runs(self.workflow.as_deref(), self.limit)
                    .await
            }
        };
        spinner.done();
        let mut runs = fetched?;

        if let Some(workflow) = &self.workflow {
            // The workflow filter only narrows the non-PR listing; on the
            // PR path the note below is informational.
            output::print_note(&format!("Filtering by workflow: {workflow}"));
            if self.pr.is_some() {
                debug!("workflow filter not applied to PR-scoped runs");
            }
        }

        runs.truncate(self.limit);
        info!("Inspecting {} candidate runs", runs.len());

        if runs.is_empty() {
            output::print_no_failures();
            return Ok(());
        }

        for run in &runs {
            let failed_jobs = client.failed_jobs(run.id).await?;
            if failed_jobs.is_empty() {
                continue;
            }
            output::print_run_report(run, &failed_jobs);
        }

        Ok(())
    }

    fn token(&self) -> Result<Token> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(Token::from(token)),
            _ => bail!("GitHub token required. Set GITHUB_TOKEN or use --token"),
        }
    }
}

fn parse_repo(repo: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        bail!("Repository must be in 'owner/repo' format");
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
