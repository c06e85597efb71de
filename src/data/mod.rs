use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DataError;
use crate::models::{Client, Equipment, Invoice, Project};

const DEMO_DATA: &str = include_str!("demo.json");

/// The full set of records the back office works on.
///
/// Built once at startup and only ever read afterwards; screens and
/// queries borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl DataSet {
    /// Demonstration records compiled into the binary.
    pub fn demo() -> Result<Self, DataError> {
        let data = Self::from_json(DEMO_DATA)?;
        debug!("Loaded embedded demo data set");
        Ok(data)
    }

    /// Load a data set with the same JSON layout as the demo data.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            clients = data.clients.len(),
            projects = data.projects.len(),
            invoices = data.invoices.len(),
            equipment = data.equipment.len(),
            "Loaded data set from file"
        );
        Ok(data)
    }

    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn recent_projects(&self, limit: usize) -> &[Project] {
        &self.projects[..limit.min(self.projects.len())]
    }

    pub fn recent_invoices(&self, limit: usize) -> &[Invoice] {
        &self.invoices[..limit.min(self.invoices.len())]
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::models::{EquipmentStatus, InvoiceStatus, ProjectStatus};

    fn unique_temp_file(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("chantier-{prefix}-{nanos}.json"))
    }

    #[test]
    fn demo_data_has_expected_shape() {
        let data = DataSet::demo().expect("embedded demo data should parse");

        assert_eq!(data.clients.len(), 3);
        assert_eq!(data.projects.len(), 3);
        assert_eq!(data.invoices.len(), 3);
        assert_eq!(data.equipment.len(), 5);

        assert_eq!(data.projects[0].status, ProjectStatus::InProgress);
        assert_eq!(data.projects[0].end_date, None);
        assert_eq!(data.invoices[2].status, InvoiceStatus::Overdue);
        assert_eq!(data.equipment[3].status, EquipmentStatus::InMaintenance);
    }

    #[test]
    fn demo_invoices_total_is_pre_tax_plus_tax() {
        let data = DataSet::demo().unwrap();
        for invoice in &data.invoices {
            assert_eq!(
                invoice.total_amount,
                invoice.pre_tax_amount + invoice.tax_amount,
                "invoice {}",
                invoice.number
            );
        }
    }

    #[test]
    fn demo_line_items_amount_is_quantity_times_unit_price() {
        let data = DataSet::demo().unwrap();
        for line in data.invoices.iter().flat_map(|i| &i.line_items) {
            assert_eq!(line.amount, f64::from(line.quantity) * line.unit_price);
        }
    }

    #[test]
    fn status_codes_match_serialized_form() {
        let data = DataSet::demo().unwrap();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["projects"][0]["status"], data.projects[0].status.code());
        assert_eq!(json["invoices"][0]["status"], data.invoices[0].status.code());
        assert_eq!(json["equipment"][1]["status"], data.equipment[1].status.code());
    }

    #[test]
    fn stored_amounts_are_not_recomputed() {
        let raw = r#"{
            "invoices": [{
                "id": "9", "number": "FAC-X", "client_id": "1", "project_id": "1",
                "issue_date": "2024-01-01", "due_date": "2024-02-01",
                "pre_tax_amount": 100, "tax_amount": 20, "total_amount": 999,
                "status": "brouillon",
                "line_items": [{ "id": "1", "description": "x", "quantity": 2, "unit_price": 10, "amount": 5 }]
            }]
        }"#;
        let data = DataSet::from_json(raw).unwrap();

        assert!(data.clients.is_empty());
        assert_eq!(data.invoices[0].total_amount, 999.0);
        assert_eq!(data.invoices[0].line_items[0].amount, 5.0);
    }

    #[test]
    fn from_path_reads_file() {
        let path = unique_temp_file("from-path");
        fs::write(&path, DEMO_DATA).expect("should write temp data set");

        let data = DataSet::from_path(&path).expect("data set should load");
        assert_eq!(data, DataSet::demo().unwrap());

        fs::remove_file(&path).expect("should cleanup temp file");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let path = unique_temp_file("missing");
        let err = DataSet::from_path(&path).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn from_json_rejects_unknown_status() {
        let raw = r#"{ "equipment": [{
            "id": "1", "name": "n", "description": "d", "category": "c",
            "quantity": 1, "purchase_price": 1, "purchase_date": "2024-01-01",
            "status": "perdu"
        }] }"#;
        assert!(matches!(DataSet::from_json(raw), Err(DataError::Parse(_))));
    }

    #[test]
    fn recent_slices_are_capped() {
        let data = DataSet::demo().unwrap();
        assert_eq!(data.recent_projects(5).len(), 3);
        assert_eq!(data.recent_invoices(2).len(), 2);
        assert_eq!(data.recent_invoices(2)[1].number, "FAC-2024-002");
        assert!(DataSet::default().recent_projects(5).is_empty());
    }
}
