use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::styling::{blue_underlined, bright, bright_red, bright_yellow, cyan, dim, magenta, yellow};
use super::tables::{create_table, failed_step_cell, header_cells, url_cell};
use crate::github::{Job, WorkflowRun};

/// Shown when a failing job has no step marked as failed.
const UNKNOWN_STEP: &str = "Unknown";

pub fn print_no_failures() {
    println!("{}", bright_yellow("No failed workflow runs found."));
}

/// Render one run's header block and its failed-job table.
pub fn print_run_report(run: &WorkflowRun, failed_jobs: &[Job]) {
    println!("{}", render_run_header(run, Utc::now()));
    println!("{}", job_table(failed_jobs));
    println!();
}

fn render_run_header(run: &WorkflowRun, now: DateTime<Utc>) -> String {
    let name = run.name.as_deref().unwrap_or("(unnamed workflow)");
    let branch = run.head_branch.as_deref().unwrap_or("-");
    let commit: String = run.head_sha.chars().take(7).collect();

    let mut header = String::new();
    let _ = writeln!(
        header,
        "{} {} {}",
        bright_red("✗"),
        bright(name),
        dim(format!("#{}", run.run_number))
    );
    let _ = writeln!(header, "{}", header_line("Branch:", cyan(branch)));
    let _ = writeln!(header, "{}", header_line("Commit:", yellow(commit)));

    if !run.pull_requests.is_empty() {
        let numbers = run
            .pull_requests
            .iter()
            .map(|pr| format!("#{}", pr.number))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(header, "{}", header_line("PR:", magenta(numbers)));
    }

    let _ = writeln!(
        header,
        "{}",
        header_line("Started:", format_time_ago(run.created_at, now))
    );
    let _ = write!(
        header,
        "{}",
        header_line("URL:", blue_underlined(&run.html_url))
    );
    header
}

fn header_line(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {} {}", dim(format!("{label:<8}")), value)
}

fn job_table(jobs: &[Job]) -> comfy_table::Table {
    let mut table = create_table();
    table.set_header(header_cells(&["Job", "Duration", "Failed Step", "Job URL"]));

    for job in jobs {
        table.add_row(vec![
            comfy_table::Cell::new(&job.name),
            comfy_table::Cell::new(duration_display(job.started_at, job.completed_at)),
            failed_step_cell(first_failed_step(job)),
            url_cell(&job.html_url),
        ]);
    }

    table
}

/// Name of the first step in the job that concluded in failure.
fn first_failed_step(job: &Job) -> &str {
    job.steps
        .iter()
        .find(|step| step.conclusion.as_deref() == Some("failure"))
        .map(|step| step.name.as_str())
        .unwrap_or(UNKNOWN_STEP)
}

/// Wall-clock duration as `h:mm:ss`, truncated to whole seconds.
///
/// Renders `-` when either timestamp is missing; a completion time before
/// the start clamps to zero.
fn duration_display(
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
) -> String {
    match (started_at, completed_at) {
        (Some(start), Some(end)) => {
            let total = (end - start).num_seconds().max(0);
            format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
        }
        _ => "-".to_string(),
    }
}

/// Coarse "time ago" label for a run's creation time.
///
/// Whole-day granularity beyond 24h, whole hours and minutes below that,
/// floor division throughout. Exactly 3600 elapsed seconds is "1h ago".
fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - timestamp;

    let days = elapsed.num_days();
    if days > 0 {
        return format!("{days}d ago");
    }

    let seconds = elapsed.num_seconds();
    if seconds >= 3600 {
        format!("{}h ago", seconds / 3600)
    } else if seconds >= 60 {
        format!("{}m ago", seconds / 60)
    } else {
        "just now".to_string()
    }
}
