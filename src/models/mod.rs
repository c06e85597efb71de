mod client;
mod project;
mod invoice;
mod line_item;
mod equipment;

pub use client::Client;
pub use project::{Project, ProjectStatus};
pub use invoice::{Invoice, InvoiceStatus};
pub use line_item::LineItem;
pub use equipment::{Equipment, EquipmentStatus};
