//! One method per API action, grouped by resource.

mod catalog;
mod jobs;
mod machines;
