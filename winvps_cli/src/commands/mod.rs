//! CLI subcommand implementations.

pub mod catalog;
pub mod jobs;
pub mod machines;

use clap::Args;
use winvps_api::RequestOptions;

/// Paging flags shared by every list subcommand.
#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page (server default is 50)
    #[arg(long)]
    pub limit: Option<i64>,
}

impl PageArgs {
    pub fn options(&self) -> Option<RequestOptions> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }
        Some(RequestOptions {
            limit: self.limit,
            page: self.page,
        })
    }
}
