use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "en_attente")]
    Pending,
    #[serde(rename = "en_cours")]
    InProgress,
    #[serde(rename = "termine")]
    Completed,
    #[serde(rename = "annule")]
    Cancelled,
}

impl ProjectStatus {
    pub fn code(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "en_attente",
            ProjectStatus::InProgress => "en_cours",
            ProjectStatus::Completed => "termine",
            ProjectStatus::Cancelled => "annule",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub client_id: String,
    pub address: String,
    pub start_date: NaiveDate,
    /// `None` while the work is ongoing.
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub budget: f64,
    /// May exceed `budget`.
    pub expenses: f64,
}

impl Project {
    pub fn is_over_budget(&self) -> bool {
        self.expenses > self.budget
    }
}
