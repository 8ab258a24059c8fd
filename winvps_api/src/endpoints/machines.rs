use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    query::RequestOptions,
    types::{
        AddedIp, CreateMachineOptions, CreatedMachine, Job, Machine, MachineCommand, MachineFull,
        Paginated, ReinstallMachineOptions, UpdateMachineOptions, User,
    },
    validation::{require_str, Payload, ValidationError},
    Client, Error,
};

#[derive(Deserialize, Default)]
#[serde(default)]
struct JobList {
    jobs: Vec<Job>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ActionResult {
    result: bool,
}

#[derive(Serialize)]
struct PasswordChange<'a> {
    password: &'a str,
}

impl Payload for PasswordChange<'_> {
    fn validate(&self) -> Result<(), ValidationError> {
        require_str("password", self.password)
    }
}

impl Client {
    /// Orders a new machine. Returns its name and the jobs that will build it.
    pub async fn create_machine(&self, options: &CreateMachineOptions) -> Result<CreatedMachine, Error> {
        self.send_json(Method::POST, &["machines"], options).await
    }

    /// Changes the plan or add-ons of a machine.
    pub async fn update_machine(
        &self,
        name: &str,
        options: &UpdateMachineOptions,
    ) -> Result<Vec<Job>, Error> {
        let result: JobList = self
            .send_json(Method::PUT, &["machines", name], options)
            .await?;
        Ok(result.jobs)
    }

    /// Reinstalls the OS of a machine.
    pub async fn reinstall_machine(
        &self,
        name: &str,
        options: &ReinstallMachineOptions,
    ) -> Result<Vec<Job>, Error> {
        let result: JobList = self
            .send_json(Method::POST, &["machines", name], options)
            .await?;
        Ok(result.jobs)
    }

    /// Fetches a page of machines. The server default limit is 50.
    pub async fn get_machines(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Machine>, Error> {
        self.list(&["machines"], options).await
    }

    /// Fetches every machine, walking all pages.
    pub async fn get_all_machines(&self, limit: Option<i64>) -> Result<Vec<Machine>, Error> {
        self.list_all(&["machines"], limit).await
    }

    /// Fetches a page of machines with IPs, OS and config.
    pub async fn get_machines_full(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<MachineFull>, Error> {
        self.list(&["machines", "full"], options).await
    }

    pub async fn get_machines_running(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Machine>, Error> {
        self.list(&["machines", "running"], options).await
    }

    pub async fn get_machines_stopped(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Machine>, Error> {
        self.list(&["machines", "stopped"], options).await
    }

    /// Fetches the full record of a single machine.
    pub async fn get_machine(&self, name: &str) -> Result<MachineFull, Error> {
        self.get(&["machines", name]).await
    }

    /// Fetches a page of jobs that belong to a machine.
    pub async fn get_machine_jobs(
        &self,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Job>, Error> {
        self.list(&["machines", name, "jobs"], options).await
    }

    /// Fetches a page of additional system users of a machine.
    pub async fn get_machine_users(
        &self,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<User>, Error> {
        self.list(&["machines", name, "users"], options).await
    }

    /// Sets a new administrator password. Returns the API's `result` flag.
    ///
    /// An empty password fails validation and no request is sent.
    pub async fn change_machine_password(&self, name: &str, password: &str) -> Result<bool, Error> {
        let result: ActionResult = self
            .send_json(
                Method::POST,
                &["machines", name, "change_password"],
                &PasswordChange { password },
            )
            .await?;
        Ok(result.result)
    }

    /// Queues a power or maintenance action on a machine.
    pub async fn send_machine_command(
        &self,
        name: &str,
        command: MachineCommand,
    ) -> Result<Vec<Job>, Error> {
        let result: JobList = self.post(&["machines", name, command.as_str()]).await?;
        Ok(result.jobs)
    }

    /// Adds an IP address to a machine.
    pub async fn add_machine_ip(&self, name: &str) -> Result<AddedIp, Error> {
        self.post(&["machines", name, "add_ip"]).await
    }

    /// Queues deletion of a machine.
    pub async fn delete_machine(&self, name: &str) -> Result<Vec<Job>, Error> {
        let result: JobList = self.delete(&["machines", name]).await?;
        Ok(result.jobs)
    }
}
