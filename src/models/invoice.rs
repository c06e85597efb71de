use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LineItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "brouillon")]
    Draft,
    #[serde(rename = "envoyee")]
    Sent,
    #[serde(rename = "payee")]
    Paid,
    #[serde(rename = "en_retard")]
    Overdue,
}

impl InvoiceStatus {
    pub fn code(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "brouillon",
            InvoiceStatus::Sent => "envoyee",
            InvoiceStatus::Paid => "payee",
            InvoiceStatus::Overdue => "en_retard",
        }
    }

    /// Sent or overdue: money the client still owes.
    pub fn is_pending(self) -> bool {
        matches!(self, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }
}

/// Amounts are stored as issued; `total_amount` is never recomputed from
/// `pre_tax_amount` and `tax_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub client_id: String,
    pub project_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub pre_tax_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    pub line_items: Vec<LineItem>,
}
