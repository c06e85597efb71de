use std::io::{self, Write};

use crate::data::DataSet;
use crate::format::format_currency;
use crate::stats::{dashboard_aggregates, equipment_categories, equipment_valuation, invoice_totals};

/// Plain-text report of the dashboard figures, for `summary`.
pub fn write_summary<W: Write>(out: &mut W, data: &DataSet) -> io::Result<()> {
    let stats = dashboard_aggregates(&data.clients, &data.projects, &data.invoices, &data.equipment);
    let totals = invoice_totals(&data.invoices);

    writeln!(out, "Tableau de bord")?;
    writeln!(out, "  Projets totaux          {}", stats.project_count)?;
    writeln!(out, "  Projets en cours        {}", stats.projects_in_progress)?;
    writeln!(out, "  Clients                 {}", stats.client_count)?;
    writeln!(out, "  Chiffre d'affaires      {}", format_currency(stats.revenue))?;
    writeln!(out, "  Factures en attente     {}", stats.pending_invoices)?;
    writeln!(out, "  Équipements disponibles {}", stats.available_equipment)?;
    writeln!(out)?;
    writeln!(out, "Factures")?;
    writeln!(out, "  Total facturé           {}", format_currency(totals.total))?;
    writeln!(out, "  Montant encaissé        {}", format_currency(totals.paid))?;
    writeln!(out, "  En attente              {}", format_currency(totals.pending))?;
    writeln!(out)?;
    writeln!(out, "Équipements")?;
    writeln!(out, "  Valeur du parc          {}", format_currency(equipment_valuation(&data.equipment)))?;

    let categories: Vec<String> = equipment_categories(&data.equipment).into_iter().collect();
    writeln!(out, "  Catégories              {}", categories.join(", "))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: &DataSet) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, data).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("summary should be utf-8")
    }

    #[test]
    fn summary_reports_demo_figures() {
        let text = render(&DataSet::demo().unwrap());

        assert!(text.contains("Projets en cours        1"));
        assert!(text.contains("Factures en attente     2"));
        assert!(text.contains(&format_currency(18000.0)));
        assert!(text.contains(&format_currency(14250.0)));
        assert!(text.contains("Valeur du parc          14\u{202F}250,00\u{00A0}€"));
        assert!(text.contains("Gros matériel, Mesure"));
    }

    #[test]
    fn summary_of_empty_data_set_is_all_zero() {
        let text = render(&DataSet::default());

        assert!(text.contains("Projets totaux          0"));
        assert!(text.contains(&format!("Valeur du parc          {}", format_currency(0.0))));
    }
}
