use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "en_utilisation")]
    InUse,
    #[serde(rename = "en_maintenance")]
    InMaintenance,
    #[serde(rename = "hors_service")]
    OutOfService,
}

impl EquipmentStatus {
    pub fn code(self) -> &'static str {
        match self {
            EquipmentStatus::Available => "disponible",
            EquipmentStatus::InUse => "en_utilisation",
            EquipmentStatus::InMaintenance => "en_maintenance",
            EquipmentStatus::OutOfService => "hors_service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Disponible",
            EquipmentStatus::InUse => "En utilisation",
            EquipmentStatus::InMaintenance => "En maintenance",
            EquipmentStatus::OutOfService => "Hors service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    /// Price of a single unit.
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
    pub status: EquipmentStatus,
}
