use crate::errors::Result;
use crate::ledger::{EntryKind, Ledger, MonthKey};

// Spreadsheet applications only detect UTF-8 reliably when the file opens
// with a byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 6] = ["Mois", "Type", "Catégorie", "Description", "Montant", "Date"];

/// Exports every entry recorded in `year` as one flat CSV row per entry,
/// months in calendar order, revenues before expenses within a month.
pub fn export_year(ledger: &Ledger, year: i32) -> Result<Vec<u8>> {
    let mut buffer = Vec::from(UTF8_BOM);
    let mut writer = csv::Writer::from_writer(&mut buffer);
    writer.write_record(HEADER)?;

    for key in MonthKey::months_of(year) {
        let Some(month) = ledger.month(key) else {
            continue;
        };
        for kind in [EntryKind::Revenue, EntryKind::Expense] {
            for entry in month.entries(kind) {
                let amount = entry.amount.to_string();
                let date = entry.date.to_string();
                writer.write_record([
                    key.label(),
                    kind.export_label(),
                    entry.category.label(),
                    entry.description.as_str(),
                    amount.as_str(),
                    date.as_str(),
                ])?;
            }
        }
    }

    writer.flush()?;
    drop(writer);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseCategory, RevenueCategory};
    use chrono::NaiveDate;

    fn populated_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_entry(
                MonthKey::new(2025, 6).unwrap(),
                EntryKind::Revenue,
                RevenueCategory::ChildcareFees.into(),
                "Juillet",
                "1200.00".parse().unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            )
            .unwrap();
        ledger
            .add_entry(
                MonthKey::new(2025, 8).unwrap(),
                EntryKind::Expense,
                ExpenseCategory::Supplies.into(),
                "Rentrée, \"gros\" achat",
                "89.99".parse().unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn export_opens_with_the_byte_order_mark() {
        let bytes = export_year(&populated_ledger(), 2025).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
    }

    #[test]
    fn export_carries_one_row_per_entry_in_month_order() {
        let bytes = export_year(&populated_ledger(), 2025).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Mois,Type,Catégorie,Description,Montant,Date");
        assert_eq!(lines[1], "Juillet,Revenu,Frais de garde,Juillet,1200.00,2025-07-01");
        assert!(lines[2].starts_with("Septembre,Dépense,Fournitures,"));
        assert!(lines[2].ends_with(",89.99,2025-09-02"));
    }

    #[test]
    fn other_years_are_excluded() {
        let bytes = export_year(&populated_ledger(), 2024).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1, "only the header should remain");
    }
}
