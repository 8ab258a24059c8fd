//! Machine subcommands: listing, inspection, ordering and lifecycle actions.

use anyhow::{bail, Result};
use clap::Args;
use winvps_api::types::{
    CreateMachineOptions, Job, MachineCommand, ReinstallMachineOptions, UpdateMachineOptions,
};
use winvps_api::Client;

use super::PageArgs;
use crate::output::{
    job_row, machine_full_row, machine_row, print_list, print_page_summary, user_row,
    OutputFormat,
};

#[derive(Args)]
pub struct MachinesArgs {
    /// Which machines to list: all, full, running, stopped
    #[arg(long, default_value = "all")]
    pub filter: String,

    /// Fetch every page instead of a single one (only with --filter all)
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct NameArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,
}

#[derive(Args)]
pub struct MachineListArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Product ID (see `winvps products`)
    #[arg(long, default_value_t = 0)]
    pub product: i64,

    /// Template ID (see `winvps templates`)
    #[arg(long, default_value_t = 0)]
    pub template: i64,

    /// Location ID (see `winvps locations`)
    #[arg(long, default_value_t = 0)]
    pub location: i64,

    /// Brand ID (see `winvps brands`)
    #[arg(long, default_value_t = 0)]
    pub brand: i64,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Administrator password; generated by the API when omitted
    #[arg(long, default_value = "")]
    pub password: String,

    /// Disk type: hdd or ssd
    #[arg(long, default_value = "")]
    pub disk_type: String,

    /// Extra disk, GB
    #[arg(long, default_value_t = 0)]
    pub add_disk: i64,

    /// Extra RAM, MB
    #[arg(long, default_value_t = 0)]
    pub add_ram: i64,

    /// Extra CPU cores
    #[arg(long, default_value_t = 0)]
    pub add_cpu: i64,

    /// Extra bandwidth, Mbit/s
    #[arg(long, default_value_t = 0)]
    pub add_band: i64,

    /// Start the machine once it is built
    #[arg(long)]
    pub auto_start: bool,

    /// Assign an IPv6 address
    #[arg(long)]
    pub ipv6: bool,

    /// Windows UI language, e.g. en-US
    #[arg(long, default_value = "")]
    pub ui_language: String,
}

impl CreateArgs {
    fn to_options(&self) -> CreateMachineOptions {
        CreateMachineOptions {
            description: self.description.clone(),
            password: self.password.clone(),
            product_id: self.product,
            template_id: self.template,
            brand_id: self.brand,
            disk_type: self.disk_type.clone(),
            location_id: self.location,
            add_disk: self.add_disk,
            add_ram: self.add_ram,
            add_cpu: self.add_cpu,
            add_band: self.add_band,
            auto_start: i64::from(self.auto_start),
            add_ipv6: i64::from(self.ipv6),
            ui_language: self.ui_language.clone(),
        }
    }
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,

    #[arg(long, default_value = "")]
    pub password: String,

    /// Move to another product
    #[arg(long, default_value_t = 0)]
    pub product: i64,

    #[arg(long, default_value_t = 0)]
    pub add_disk: i64,

    #[arg(long, default_value_t = 0)]
    pub add_ram: i64,

    #[arg(long, default_value_t = 0)]
    pub add_cpu: i64,

    #[arg(long, default_value_t = 0)]
    pub add_band: i64,
}

#[derive(Args)]
pub struct ReinstallArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,

    #[arg(long, default_value = "")]
    pub password: String,

    /// Install from another template
    #[arg(long, default_value_t = 0)]
    pub template: i64,

    #[arg(long, default_value_t = 0)]
    pub brand: i64,

    /// Start the machine once it is reinstalled
    #[arg(long)]
    pub auto_start: bool,
}

#[derive(Args)]
pub struct CommandArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,

    /// One of: start, stop, restart, enable_rdp, enable_network, restart_mt, run_updates_install
    pub command: String,
}

#[derive(Args)]
pub struct ChangePasswordArgs {
    /// Machine name, e.g. VPS0123
    pub name: String,

    /// New administrator password
    #[arg(long)]
    pub password: String,
}

pub async fn run_list(args: &MachinesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.all {
        if args.filter != "all" {
            bail!("--all is only supported with --filter all");
        }
        let machines = client.get_all_machines(args.paging.limit).await?;
        eprintln!("{} machines", machines.len());
        return print_list(&machines, format, machine_row);
    }

    let options = args.paging.options();
    let options = options.as_ref();
    match args.filter.as_str() {
        "full" => {
            let resp = client.get_machines_full(options).await?;
            print_page_summary(&resp.pagination, "machines");
            print_list(&resp.data, format, machine_full_row)
        }
        "running" | "stopped" | "all" => {
            let resp = match args.filter.as_str() {
                "running" => client.get_machines_running(options).await?,
                "stopped" => client.get_machines_stopped(options).await?,
                _ => client.get_machines(options).await?,
            };
            print_page_summary(&resp.pagination, "machines");
            print_list(&resp.data, format, machine_row)
        }
        other => bail!("unknown filter '{}', expected all, full, running or stopped", other),
    }
}

pub async fn run_show(args: &NameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let machine = client.get_machine(&args.name).await?;
    print_list(&[machine], format, machine_full_row)
}

pub async fn run_jobs(args: &MachineListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .get_machine_jobs(&args.name, args.paging.options().as_ref())
        .await?;
    print_page_summary(&resp.pagination, "jobs");
    print_list(&resp.data, format, job_row)
}

pub async fn run_users(args: &MachineListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .get_machine_users(&args.name, args.paging.options().as_ref())
        .await?;
    print_page_summary(&resp.pagination, "users");
    print_list(&resp.data, format, user_row)
}

pub async fn run_create(args: &CreateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let created = client.create_machine(&args.to_options()).await?;
    eprintln!("Machine {} create accepted", created.name);
    print_jobs(&created.jobs, format)
}

pub async fn run_update(args: &UpdateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = UpdateMachineOptions {
        password: args.password.clone(),
        product_id: args.product,
        add_disk: args.add_disk,
        add_ram: args.add_ram,
        add_cpu: args.add_cpu,
        add_band: args.add_band,
    };
    let jobs = client.update_machine(&args.name, &options).await?;
    eprintln!("Machine {} update accepted", args.name);
    print_jobs(&jobs, format)
}

pub async fn run_reinstall(args: &ReinstallArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = ReinstallMachineOptions {
        password: args.password.clone(),
        template_id: args.template,
        brand_id: args.brand,
        auto_start: i64::from(args.auto_start),
    };
    let jobs = client.reinstall_machine(&args.name, &options).await?;
    eprintln!("Machine {} reinstall accepted", args.name);
    print_jobs(&jobs, format)
}

pub async fn run_delete(args: &NameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let jobs = client.delete_machine(&args.name).await?;
    eprintln!("Machine {} delete accepted", args.name);
    print_jobs(&jobs, format)
}

pub async fn run_command(args: &CommandArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let command: MachineCommand = args.command.parse()?;
    let jobs = client.send_machine_command(&args.name, command).await?;
    eprintln!("Command {} sent to {}", command, args.name);
    print_jobs(&jobs, format)
}

pub async fn run_add_ip(args: &NameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let added = client.add_machine_ip(&args.name).await?;
    eprintln!("Address {} added to {}", added.address, args.name);
    print_jobs(&added.jobs, format)
}

pub async fn run_change_password(args: &ChangePasswordArgs, client: &Client) -> Result<()> {
    if client
        .change_machine_password(&args.name, &args.password)
        .await?
    {
        eprintln!("Password changed on {}", args.name);
    } else {
        bail!("the API did not confirm the password change on {}", args.name);
    }
    Ok(())
}

fn print_jobs(jobs: &[Job], format: &OutputFormat) -> Result<()> {
    print_list(jobs, format, job_row)
}
