//! A4 layout engine for the printable budget report.
//!
//! The document mirrors the structure of the on-screen monthly view: title,
//! summary block, detail tables (omitted when a list is empty), notes, and a
//! generation footer. Multi-month scopes repeat the same block per month.

use chrono::Local;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use rust_decimal::Decimal;

use crate::errors::{BudgetError, Result};
use crate::ledger::{Entry, Ledger, MonthKey};
use crate::report::{format_amount, truncate, ReportScope, DESCRIPTION_LIMIT};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const BOTTOM_MARGIN_MM: f32 = 22.0;

const COL_CATEGORY_MM: f32 = MARGIN_MM;
const COL_DESCRIPTION_MM: f32 = 72.0;
const COL_DATE_MM: f32 = 142.0;
const COL_AMOUNT_MM: f32 = 168.0;
const TABLE_RIGHT_MM: f32 = PAGE_WIDTH_MM - MARGIN_MM;

const NET_POSITIVE: (f32, f32, f32) = (0.0, 0.45, 0.1);
const NET_NEGATIVE: (f32, f32, f32) = (0.8, 0.1, 0.1);
const RULE_GRAY: (f32, f32, f32) = (0.6, 0.6, 0.6);
const FOOTER_GRAY: (f32, f32, f32) = (0.4, 0.4, 0.4);

// Helvetica averages about half an em per glyph; good enough to center a
// short title without real font metrics.
const EM_TO_MM: f32 = 0.3528;

pub(crate) fn render(ledger: &Ledger, scope: ReportScope) -> Result<Vec<u8>> {
    let mut writer = DocumentWriter::new("Budget Garderie")?;
    for (index, key) in scope.months().into_iter().enumerate() {
        if index > 0 {
            writer.gap(10.0);
        }
        month_section(&mut writer, ledger, key);
    }
    let stamp = format!("Généré le {}", Local::now().format("%Y-%m-%d %H:%M"));
    writer.footer(&stamp);
    writer.finish()
}

fn month_section(writer: &mut DocumentWriter, ledger: &Ledger, key: MonthKey) {
    let totals = ledger.totals(key);

    writer.title(&format!("Rapport mensuel - {} {}", key.label(), key.year()));
    writer.text_line(&format!("Revenus: {}", format_amount(totals.revenues)), 11.0);
    writer.text_line(&format!("Dépenses: {}", format_amount(totals.expenses)), 11.0);
    let net_color = if totals.net < Decimal::ZERO {
        NET_NEGATIVE
    } else {
        NET_POSITIVE
    };
    writer.colored_line(
        &format!("Résultat net: {}", format_amount(totals.net)),
        11.0,
        net_color,
    );
    writer.gap(5.0);

    let Some(month) = ledger.month(key) else {
        return;
    };
    if !month.revenues.is_empty() {
        entry_table(writer, "Revenus:", &month.revenues);
    }
    if !month.expenses.is_empty() {
        entry_table(writer, "Dépenses:", &month.expenses);
    }
    if !month.notes.trim().is_empty() {
        writer.bold_line("Notes:", 11.0);
        for line in month.notes.lines() {
            writer.text_line(line, 10.0);
        }
    }
}

fn entry_table(writer: &mut DocumentWriter, heading: &str, entries: &[Entry]) {
    writer.ensure_room(24.0);
    writer.bold_line(heading, 11.0);
    writer.table_row(
        &["Catégorie", "Description", "Date", "Montant"],
        9.0,
        true,
    );
    writer.rule();
    for entry in entries {
        let description = truncate(&entry.description, DESCRIPTION_LIMIT);
        let date = entry.date.to_string();
        let amount = format_amount(entry.amount);
        writer.table_row(
            &[
                entry.category.label(),
                description.as_str(),
                date.as_str(),
                amount.as_str(),
            ],
            9.0,
            false,
        );
    }
    writer.gap(5.0);
}

/// Cursor-based page writer; text flows top to bottom and fresh pages are
/// started whenever a line would cross the bottom margin.
struct DocumentWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    y: f32,
}

impl DocumentWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "contenu");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            font_bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(render_error)
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y - needed_mm < BOTTOM_MARGIN_MM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "contenu");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn title(&mut self, text: &str) {
        // Keep the title attached to at least the summary block below it.
        self.ensure_room(42.0);
        let width = text.chars().count() as f32 * 16.0 * EM_TO_MM * 0.5;
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_MM);
        self.layer
            .use_text(text, 16.0, Mm(x), Mm(self.y), &self.font_bold);
        self.advance(10.0);
    }

    fn text_line(&mut self, text: &str, size: f32) {
        self.ensure_room(6.0);
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), &self.font);
        self.advance(6.0);
    }

    fn bold_line(&mut self, text: &str, size: f32) {
        self.ensure_room(6.0);
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), &self.font_bold);
        self.advance(6.0);
    }

    fn colored_line(&mut self, text: &str, size: f32, color: (f32, f32, f32)) {
        self.ensure_room(6.0);
        self.set_fill(color);
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), &self.font);
        self.set_fill((0.0, 0.0, 0.0));
        self.advance(6.0);
    }

    fn table_row(&mut self, cells: &[&str; 4], size: f32, bold: bool) {
        self.ensure_room(5.5);
        let font = if bold { &self.font_bold } else { &self.font };
        let columns = [COL_CATEGORY_MM, COL_DESCRIPTION_MM, COL_DATE_MM, COL_AMOUNT_MM];
        for (cell, x) in cells.iter().zip(columns) {
            self.layer.use_text(*cell, size, Mm(x), Mm(self.y), font);
        }
        self.advance(5.5);
    }

    fn rule(&mut self) {
        let y = self.y + 4.0;
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(y)), false),
                (Point::new(Mm(TABLE_RIGHT_MM), Mm(y)), false),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.4);
        self.layer.set_outline_color(rgb(RULE_GRAY));
        self.layer.add_line(line);
    }

    fn footer(&mut self, text: &str) {
        self.set_fill(FOOTER_GRAY);
        self.layer
            .use_text(text, 8.0, Mm(MARGIN_MM), Mm(10.0), &self.font);
        self.set_fill((0.0, 0.0, 0.0));
    }

    fn gap(&mut self, mm: f32) {
        self.advance(mm);
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn set_fill(&mut self, color: (f32, f32, f32)) {
        self.layer.set_fill_color(rgb(color));
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn render_error(err: printpdf::Error) -> BudgetError {
    BudgetError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{EntryKind, RevenueCategory};
    use chrono::NaiveDate;

    #[test]
    fn rendered_document_is_a_pdf() {
        let mut ledger = Ledger::new();
        let key = MonthKey::new(2025, 6).unwrap();
        ledger
            .add_entry(
                key,
                EntryKind::Revenue,
                RevenueCategory::ChildcareFees.into(),
                "Juillet",
                "1200.00".parse().unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            )
            .unwrap();

        let bytes = render(&ledger, ReportScope::Month(key)).expect("render month");
        assert!(bytes.starts_with(b"%PDF"), "output must carry the PDF magic");
        assert!(bytes.len() > 500);
    }

    #[test]
    fn annual_scope_renders_all_twelve_sections() {
        let ledger = Ledger::new();
        let bytes = render(&ledger, ReportScope::Year(2025)).expect("render year");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
