//! The `jobs`, `job` and `cancel-job` subcommands.

use anyhow::Result;
use clap::Args;
use winvps_api::Client;

use super::PageArgs;
use crate::output::{job_row, print_list, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct JobsArgs {
    /// Only jobs that have not started yet
    #[arg(long)]
    pub pending: bool,

    /// Fetch every page instead of a single one
    #[arg(long, conflicts_with_all = ["pending", "page"])]
    pub all: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct JobArgs {
    /// Job ID
    pub id: i64,
}

pub async fn run(args: &JobsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.all {
        let jobs = client.get_all_jobs(args.paging.limit).await?;
        eprintln!("{} jobs", jobs.len());
        return print_list(&jobs, format, job_row);
    }

    let options = args.paging.options();
    let resp = if args.pending {
        client.get_pending_jobs(options.as_ref()).await?
    } else {
        client.get_jobs(options.as_ref()).await?
    };
    print_page_summary(&resp.pagination, "jobs");
    print_list(&resp.data, format, job_row)
}

pub async fn run_show(args: &JobArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let job = client.get_job(args.id).await?;
    print_list(&[job], format, job_row)
}

pub async fn run_cancel(args: &JobArgs, client: &Client) -> Result<()> {
    client.cancel_job(args.id).await?;
    eprintln!("Job {} cancelled", args.id);
    Ok(())
}
