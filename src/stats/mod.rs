//! Cross-entity lookups and summary figures for the back-office views.
//!
//! Every function here is a pure reduction over borrowed collections:
//! empty input gives the zero value, unknown identifiers give a fallback
//! label, nothing is ever mutated.

use std::collections::BTreeSet;

use crate::models::{
    Client, Equipment, EquipmentStatus, Invoice, InvoiceStatus, Project, ProjectStatus,
};

pub const UNKNOWN_CLIENT: &str = "Client inconnu";
pub const UNKNOWN_PROJECT: &str = "Projet inconnu";

pub fn find_client<'a>(clients: &'a [Client], client_id: &str) -> Option<&'a Client> {
    clients.iter().find(|c| c.id == client_id)
}

pub fn find_project<'a>(projects: &'a [Project], project_id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == project_id)
}

/// Display name of a client, or [`UNKNOWN_CLIENT`] for a dangling reference.
pub fn find_client_name(clients: &[Client], client_id: &str) -> String {
    find_client(clients, client_id)
        .map(Client::full_name)
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Display name of a project, or [`UNKNOWN_PROJECT`] for a dangling reference.
pub fn find_project_name(projects: &[Project], project_id: &str) -> String {
    find_project(projects, project_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClientStatistics {
    pub project_count: usize,
    pub total_invoiced: f64,
}

pub fn client_statistics(
    projects: &[Project],
    invoices: &[Invoice],
    client_id: &str,
) -> ClientStatistics {
    let project_count = projects.iter().filter(|p| p.client_id == client_id).count();
    let total_invoiced = invoices
        .iter()
        .filter(|i| i.client_id == client_id)
        .map(|i| i.total_amount)
        .sum();

    ClientStatistics {
        project_count,
        total_invoiced,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardStats {
    pub project_count: usize,
    pub projects_in_progress: usize,
    pub client_count: usize,
    /// Sum of paid invoice totals.
    pub revenue: f64,
    /// Invoices sent or overdue.
    pub pending_invoices: usize,
    pub available_equipment: usize,
}

pub fn dashboard_aggregates(
    clients: &[Client],
    projects: &[Project],
    invoices: &[Invoice],
    equipment: &[Equipment],
) -> DashboardStats {
    DashboardStats {
        project_count: projects.len(),
        projects_in_progress: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count(),
        client_count: clients.len(),
        revenue: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i.total_amount)
            .sum(),
        pending_invoices: invoices.iter().filter(|i| i.status.is_pending()).count(),
        available_equipment: available_equipment_count(equipment),
    }
}

pub fn available_equipment_count(equipment: &[Equipment]) -> usize {
    equipment
        .iter()
        .filter(|e| e.status == EquipmentStatus::Available)
        .count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvoiceTotals {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
}

/// Drafts only count towards `total`.
pub fn invoice_totals(invoices: &[Invoice]) -> InvoiceTotals {
    let sum_where = |keep: fn(InvoiceStatus) -> bool| -> f64 {
        invoices
            .iter()
            .filter(|i| keep(i.status))
            .map(|i| i.total_amount)
            .sum()
    };

    InvoiceTotals {
        total: sum_where(|_| true),
        paid: sum_where(|s| s == InvoiceStatus::Paid),
        pending: sum_where(InvoiceStatus::is_pending),
    }
}

/// Purchase value of the whole fleet: unit price times quantity on hand.
pub fn equipment_valuation(equipment: &[Equipment]) -> f64 {
    equipment
        .iter()
        .map(|e| e.purchase_price * f64::from(e.quantity))
        .sum()
}

pub fn equipment_total_quantity(equipment: &[Equipment]) -> u64 {
    equipment.iter().map(|e| u64::from(e.quantity)).sum()
}

pub fn equipment_categories(equipment: &[Equipment]) -> BTreeSet<String> {
    equipment.iter().map(|e| e.category.clone()).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

pub fn project_status_counts(projects: &[Project]) -> ProjectStatusCounts {
    projects.iter().fold(
        ProjectStatusCounts::default(),
        |mut counts, project| {
            counts.total += 1;
            match project.status {
                ProjectStatus::Pending => counts.pending += 1,
                ProjectStatus::InProgress => counts.in_progress += 1,
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::Cancelled => counts.cancelled += 1,
            }
            counts
        },
    )
}

/// Expenses as a percentage of budget, uncapped. Zero budget reads as 0%.
pub fn budget_usage_percent(project: &Project) -> f64 {
    if project.budget <= 0.0 {
        return 0.0;
    }
    project.expenses / project.budget * 100.0
}

/// Rounded usage for display next to the project, overruns included.
pub fn budget_usage_rounded(project: &Project) -> u32 {
    budget_usage_percent(project).round().max(0.0) as u32
}

/// Rounded progress for a gauge, capped at 100.
pub fn budget_progress(project: &Project) -> u32 {
    budget_usage_percent(project).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetBalance {
    Remaining(f64),
    Overrun(f64),
}

pub fn budget_balance(project: &Project) -> BudgetBalance {
    let difference = (project.budget - project.expenses).abs();
    if project.is_over_budget() {
        BudgetBalance::Overrun(difference)
    } else {
        BudgetBalance::Remaining(difference)
    }
}
