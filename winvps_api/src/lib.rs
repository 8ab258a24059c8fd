//! Typed async client for the WinVPS hosting REST API.
//!
//! ```no_run
//! use winvps_api::{Client, RequestOptions};
//!
//! # async fn example() -> Result<(), winvps_api::Error> {
//! let client = Client::new("api-key")?;
//! let mut options = RequestOptions::new().with_limit(10).with_page(1);
//! loop {
//!     let page = client.get_machines(Some(&options)).await?;
//!     for machine in &page.data {
//!         println!("{} {}", machine.name, machine.status);
//!     }
//!     match page.pagination.next_page() {
//!         Some(next) => options = options.with_page(next),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod errors;
mod query;
pub mod types;
pub mod validation;
pub use self::client::{Client, ClientConfig};
pub use self::errors::Error;
pub use self::query::RequestOptions;
pub use self::validation::{Payload, ValidationError};
