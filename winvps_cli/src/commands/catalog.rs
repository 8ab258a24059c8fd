//! The `products`, `templates`, `locations` and `brands` subcommands.

use anyhow::Result;
use winvps_api::Client;

use super::PageArgs;
use crate::output::{
    brand_row, location_row, print_list, print_page_summary, product_row, template_row,
    OutputFormat,
};

pub async fn run_products(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_products(args.options().as_ref()).await?;
    print_page_summary(&resp.pagination, "products");
    print_list(&resp.data, format, product_row)
}

pub async fn run_templates(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_templates(args.options().as_ref()).await?;
    print_page_summary(&resp.pagination, "templates");
    print_list(&resp.data, format, template_row)
}

pub async fn run_locations(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_locations(args.options().as_ref()).await?;
    print_page_summary(&resp.pagination, "locations");
    print_list(&resp.data, format, location_row)
}

pub async fn run_brands(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_brands(args.options().as_ref()).await?;
    print_page_summary(&resp.pagination, "brands");
    print_list(&resp.data, format, brand_row)
}
