use reqwest::Method;

use crate::{
    query::RequestOptions,
    types::{Job, Paginated},
    Client, Error,
};

impl Client {
    /// Fetches a page of planned and completed jobs.
    pub async fn get_jobs(&self, options: Option<&RequestOptions>) -> Result<Paginated<Job>, Error> {
        self.list(&["jobs"], options).await
    }

    /// Fetches every job, walking all pages.
    pub async fn get_all_jobs(&self, limit: Option<i64>) -> Result<Vec<Job>, Error> {
        self.list_all(&["jobs"], limit).await
    }

    /// Fetches a page of jobs that have not started yet.
    pub async fn get_pending_jobs(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Job>, Error> {
        self.list(&["jobs", "pending"], options).await
    }

    pub async fn get_job(&self, id: i64) -> Result<Job, Error> {
        let id = id.to_string();
        self.get(&["jobs", id.as_str()]).await
    }

    /// Cancels a job. The response body is not inspected.
    pub async fn cancel_job(&self, id: i64) -> Result<(), Error> {
        let id = id.to_string();
        let request = self.build_request(Method::DELETE, &["jobs", id.as_str()], None)?;
        self.execute_empty(request).await
    }
}
