mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use winvps_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "winvps")]
#[command(about = "Manage WinVPS machines from the command line")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key (defaults to $WINVPS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API root URL (defaults to $WINVPS_BASE_URL, then the production API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List machines
    Machines(commands::machines::MachinesArgs),
    /// Show one machine with IPs, OS and config
    Machine(commands::machines::NameArgs),
    /// List jobs of a machine
    MachineJobs(commands::machines::MachineListArgs),
    /// List additional users of a machine
    MachineUsers(commands::machines::MachineListArgs),
    /// Order a new machine
    Create(Box<commands::machines::CreateArgs>),
    /// Change plan or add-ons of a machine
    Update(commands::machines::UpdateArgs),
    /// Reinstall the OS of a machine
    Reinstall(commands::machines::ReinstallArgs),
    /// Delete a machine
    Delete(commands::machines::NameArgs),
    /// Send a power or maintenance command to a machine
    Command(commands::machines::CommandArgs),
    /// Add an IP address to a machine
    AddIp(commands::machines::NameArgs),
    /// Change the administrator password of a machine
    ChangePassword(commands::machines::ChangePasswordArgs),
    /// List jobs
    Jobs(commands::jobs::JobsArgs),
    /// Show one job
    Job(commands::jobs::JobArgs),
    /// Cancel a job
    CancelJob(commands::jobs::JobArgs),
    /// List products
    Products(commands::PageArgs),
    /// List OS templates
    Templates(commands::PageArgs),
    /// List locations
    Locations(commands::PageArgs),
    /// List brands
    Brands(commands::PageArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("winvps=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("WINVPS_API_KEY").ok())
        .context("no API key: pass --api-key or set WINVPS_API_KEY")?;
    let mut config = ClientConfig::default();
    if let Some(url) = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("WINVPS_BASE_URL").ok())
    {
        config = config.with_base_url(&url);
    }
    let client = Client::with_config(&api_key, config)?;

    use commands::{catalog, jobs, machines};
    match &cli.command {
        Commands::Machines(args) => machines::run_list(args, &client, &format).await?,
        Commands::Machine(args) => machines::run_show(args, &client, &format).await?,
        Commands::MachineJobs(args) => machines::run_jobs(args, &client, &format).await?,
        Commands::MachineUsers(args) => machines::run_users(args, &client, &format).await?,
        Commands::Create(args) => machines::run_create(args.as_ref(), &client, &format).await?,
        Commands::Update(args) => machines::run_update(args, &client, &format).await?,
        Commands::Reinstall(args) => machines::run_reinstall(args, &client, &format).await?,
        Commands::Delete(args) => machines::run_delete(args, &client, &format).await?,
        Commands::Command(args) => machines::run_command(args, &client, &format).await?,
        Commands::AddIp(args) => machines::run_add_ip(args, &client, &format).await?,
        Commands::ChangePassword(args) => machines::run_change_password(args, &client).await?,
        Commands::Jobs(args) => jobs::run(args, &client, &format).await?,
        Commands::Job(args) => jobs::run_show(args, &client, &format).await?,
        Commands::CancelJob(args) => jobs::run_cancel(args, &client).await?,
        Commands::Products(args) => catalog::run_products(args, &client, &format).await?,
        Commands::Templates(args) => catalog::run_templates(args, &client, &format).await?,
        Commands::Locations(args) => catalog::run_locations(args, &client, &format).await?,
        Commands::Brands(args) => catalog::run_brands(args, &client, &format).await?,
    }

    Ok(())
}
