use chrono::NaiveDate;
use garderie_budget::{
    export::csv::export_year,
    ledger::{EntryKind, ExpenseCategory, Ledger, MonthKey, RevenueCategory},
    report::{render_pdf, ReportScope},
};

fn key(month0: u32) -> MonthKey {
    MonthKey::new(2025, month0).unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add_entry(
            key(6),
            EntryKind::Revenue,
            RevenueCategory::ChildcareFees.into(),
            "Frais réguliers",
            "1200.00".parse().unwrap(),
            date(7, 1),
        )
        .unwrap();
    ledger
        .add_entry(
            key(6),
            EntryKind::Expense,
            ExpenseCategory::Food.into(),
            "Épicerie de la semaine, fruits et légumes frais pour les collations",
            "350.75".parse().unwrap(),
            date(7, 8),
        )
        .unwrap();
    ledger.set_notes(key(6), "Canicule: sorties écourtées");
    ledger
}

#[test]
fn csv_rows_carry_the_six_export_columns() {
    let bytes = export_year(&sample_ledger(), 2025).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Mois", "Type", "Catégorie", "Description", "Montant", "Date"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Juillet");
    assert_eq!(&rows[0][1], "Revenu");
    assert_eq!(&rows[0][4], "1200.00");
    assert_eq!(&rows[0][5], "2025-07-01");
    assert_eq!(&rows[1][1], "Dépense");
    assert_eq!(&rows[1][2], "Alimentation");
}

#[test]
fn csv_amounts_are_raw_decimals_without_currency_symbol() {
    let bytes = export_year(&sample_ledger(), 2025).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(!text.contains('$'));
    assert!(text.contains("350.75"));
}

#[test]
fn monthly_pdf_renders_for_a_populated_month() {
    let bytes = render_pdf(&sample_ledger(), ReportScope::Month(key(6))).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000, "a populated month should carry real content");
}

#[test]
fn annual_pdf_repeats_the_month_block_for_every_month() {
    let single = render_pdf(&sample_ledger(), ReportScope::Month(key(6))).unwrap();
    let annual = render_pdf(&sample_ledger(), ReportScope::Year(2025)).unwrap();
    assert!(annual.starts_with(b"%PDF"));
    assert!(
        annual.len() > single.len(),
        "twelve sections must outweigh one"
    );
}

#[test]
fn empty_month_still_renders_a_summary_only_document() {
    let ledger = Ledger::new();
    let bytes = render_pdf(&ledger, ReportScope::Month(key(0))).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
