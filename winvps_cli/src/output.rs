use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use winvps_api::types::{Brand, Job, Location, Machine, MachineFull, Pagination, Product, Template, User};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct MachineRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Notes")]
    #[serde(rename = "Notes")]
    notes: String,
}

#[derive(Tabled, Serialize)]
pub struct MachineFullRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "IPs")]
    #[serde(rename = "IPs")]
    ips: String,
    #[tabled(rename = "Template")]
    #[serde(rename = "Template")]
    template: String,
    #[tabled(rename = "Cores")]
    #[serde(rename = "Cores")]
    cores: i64,
    #[tabled(rename = "RAM")]
    #[serde(rename = "RAM")]
    ram: String,
    #[tabled(rename = "Disk")]
    #[serde(rename = "Disk")]
    disk: String,
}

#[derive(Tabled, Serialize)]
pub struct JobRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Machine")]
    #[serde(rename = "Machine")]
    machine_id: i64,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Started")]
    #[serde(rename = "Started")]
    start_time: String,
}

#[derive(Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "Username")]
    #[serde(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    #[serde(rename = "Role")]
    role: String,
}

#[derive(Tabled, Serialize)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Cores")]
    #[serde(rename = "Cores")]
    cores: i64,
    #[tabled(rename = "RAM")]
    #[serde(rename = "RAM")]
    ram: String,
    #[tabled(rename = "Disk")]
    #[serde(rename = "Disk")]
    disk: String,
}

/// Row for the id/name reference lists (templates, locations, brands).
#[derive(Tabled, Serialize)]
pub struct NamedRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

// -- Row builders --

pub fn machine_row(m: &Machine) -> MachineRow {
    MachineRow {
        name: m.name.clone(),
        status: m.status.clone(),
        notes: m.notes.clone(),
    }
}

pub fn machine_full_row(m: &MachineFull) -> MachineFullRow {
    let limits = m.config.clone().unwrap_or_default();
    MachineFullRow {
        name: m.machine.name.clone(),
        status: m.machine.status.clone(),
        ips: m
            .ips
            .iter()
            .map(|ip| ip.address.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        template: m
            .os
            .as_ref()
            .map(|os| os.template_id.clone())
            .unwrap_or_default(),
        cores: limits.cpu_cores,
        ram: format_ram(limits.ram_max),
        disk: format_disk(limits.disk_size),
    }
}

pub fn job_row(j: &Job) -> JobRow {
    JobRow {
        id: j.id,
        machine_id: j.machine_id,
        kind: j.kind.clone(),
        status: j.status.clone(),
        start_time: j.start_time.clone(),
    }
}

pub fn user_row(u: &User) -> UserRow {
    UserRow {
        username: u.username.clone(),
        role: u.role.clone(),
    }
}

pub fn product_row(p: &Product) -> ProductRow {
    let limits = p.limits.clone().unwrap_or_default();
    ProductRow {
        id: p.id,
        name: p.name.clone(),
        cores: limits.cpu_cores,
        ram: format_ram(limits.ram_max),
        disk: format_disk(limits.disk_size),
    }
}

pub fn template_row(t: &Template) -> NamedRow {
    NamedRow {
        id: t.id,
        name: t.name.clone(),
    }
}

pub fn location_row(l: &Location) -> NamedRow {
    NamedRow {
        id: l.id,
        name: l.name.clone(),
    }
}

pub fn brand_row(b: &Brand) -> NamedRow {
    NamedRow {
        id: b.id,
        name: b.name.clone(),
    }
}

// -- Printing --

/// Prints `items` in the requested format. JSON emits the API records
/// unchanged; the other formats go through `to_row`.
pub fn print_list<T, R>(items: &[T], format: &OutputFormat, to_row: fn(&T) -> R) -> Result<()>
where
    T: Serialize,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Table => println!("{}", Table::new(items.iter().map(to_row))),
        OutputFormat::Markdown => {
            let mut table = Table::new(items.iter().map(to_row));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in items.iter().map(to_row) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_page_summary(pagination: &Pagination, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        pagination.page, pagination.pages, pagination.total, noun
    );
}

fn format_ram(mb: i64) -> String {
    if mb >= 1024 {
        format!("{:.1} GB", mb as f64 / 1024.0)
    } else {
        format!("{} MB", mb)
    }
}

fn format_disk(gb: i64) -> String {
    format!("{} GB", gb)
}
