//! Back office for a construction business: clients, projects, invoices
//! and equipment, with the summary figures the dashboard shows.

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod models;
pub mod stats;
pub mod summary;
pub mod ui;
