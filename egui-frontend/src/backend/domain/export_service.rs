//! Export service domain logic for the expense tracker.
//!
//! Renders the stored expenses into a PDF report: a title followed by a
//! bordered four-column table (Date, Name, Amount, Category). Rows flow onto
//! new pages once the bottom margin is reached.
//!
//! Text is cleaned before rendering because the built-in PDF fonts cannot draw
//! emoji: names are cut to 20 characters, categories to 15, and anything other
//! than word characters, whitespace, `,`, `.` and `-` is dropped.

use anyhow::{Context, Result};
use log::{error, info};
use once_cell::sync::OnceCell;
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use regex::Regex;
use shared::{Expense, ExportOutcome};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::errors::ExpenseError;
use crate::backend::storage::ExpenseStorage;

const MAX_NAME_CHARS: usize = 20;
const MAX_CATEGORY_CHARS: usize = 15;

// Page geometry in millimetres, measured from the top-left corner
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 15.0;
const TITLE_WIDTH: f32 = 200.0;
const TITLE_HEIGHT: f32 = 10.0;
const TITLE_GAP: f32 = 10.0;
const ROW_HEIGHT: f32 = 10.0;
const CELL_PADDING: f32 = 1.0;
const COLUMN_WIDTHS: [f32; 4] = [50.0, 50.0, 40.0, 50.0];

const TITLE_FONT_SIZE: f32 = 16.0;
const TABLE_FONT_SIZE: f32 = 12.0;
const PT_TO_MM: f32 = 0.3528;

/// Cut `text` to `max_chars` characters, then drop characters the report fonts can't draw
pub fn sanitize_text(text: &str, max_chars: usize) -> String {
    static DISALLOWED_CHARS: OnceCell<Regex> = OnceCell::new();
    let disallowed = DISALLOWED_CHARS.get_or_init(|| Regex::new(r"[^\p{L}\p{N}_\s,.\-]").unwrap());

    let truncated: String = text.chars().take(max_chars).collect();
    disallowed.replace_all(&truncated, "").into_owned()
}

/// Horizontal alignment of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// One table row, already formatted for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl ReportRow {
    pub fn from_expense(expense: &Expense, currency_code: &str) -> Self {
        Self {
            date: expense.date.clone(),
            name: sanitize_text(&expense.name, MAX_NAME_CHARS),
            amount: format!("{} {}", currency_code, expense.amount),
            category: sanitize_text(&expense.category, MAX_CATEGORY_CHARS),
        }
    }

    fn cells(&self) -> [(&str, Align); 4] {
        [
            (self.date.as_str(), Align::Left),
            (self.name.as_str(), Align::Left),
            (self.amount.as_str(), Align::Center),
            (self.category.as_str(), Align::Left),
        ]
    }
}

/// Top of the table header on the first page
fn first_table_top() -> f32 {
    MARGIN + TITLE_HEIGHT + TITLE_GAP
}

/// How many rows fit between `top` and the bottom margin
fn rows_fitting_below(top: f32) -> usize {
    (((PAGE_HEIGHT - BOTTOM_MARGIN) - top) / ROW_HEIGHT).floor().max(1.0) as usize
}

/// Split rows into pages; the first page also carries the title and header row
pub fn paginate(rows: Vec<ReportRow>) -> Vec<Vec<ReportRow>> {
    let first_capacity = rows_fitting_below(first_table_top() + ROW_HEIGHT);
    let page_capacity = rows_fitting_below(MARGIN);

    let mut pages = Vec::new();
    let mut remaining = rows.into_iter();

    pages.push(remaining.by_ref().take(first_capacity).collect::<Vec<_>>());
    loop {
        let page: Vec<ReportRow> = remaining.by_ref().take(page_capacity).collect();
        if page.is_empty() {
            break;
        }
        pages.push(page);
    }

    pages
}

/// Rough width of Helvetica text; good enough to centre short cell contents
fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

/// Export service that renders the expense report
#[derive(Debug, Clone)]
pub struct ExportService {
    report_path: PathBuf,
    currency_code: String,
}

impl ExportService {
    pub fn new(report_path: impl Into<PathBuf>, currency_code: impl Into<String>) -> Self {
        Self {
            report_path: report_path.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Where the report is written
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Export every stored expense to the report file
    ///
    /// Nothing is written when the store is missing or empty.
    pub fn export_document<S: ExpenseStorage>(&self, storage: &S) -> Result<ExportOutcome, ExpenseError> {
        info!("📄 EXPORT: Exporting expense report to {}", self.report_path.display());

        let expenses = match storage.load_existing() {
            Ok(Some(expenses)) if !expenses.is_empty() => expenses,
            Ok(_) => {
                info!("📄 EXPORT: No expenses to export");
                return Err(ExpenseError::NoData);
            }
            Err(e) => {
                error!("❌ EXPORT: Failed to read expenses: {:#}", e);
                return Err(ExpenseError::Unexpected(format!("{:#}", e)));
            }
        };

        let rows: Vec<ReportRow> = expenses
            .iter()
            .map(|expense| ReportRow::from_expense(expense, &self.currency_code))
            .collect();
        let row_count = rows.len();
        let pages = paginate(rows);
        let page_count = pages.len();

        if let Err(e) = self.render_pdf(&pages) {
            error!("❌ EXPORT: Failed to render report: {:#}", e);
            // Don't leave a half-written report behind
            let _ = fs::remove_file(&self.report_path);
            return Err(ExpenseError::Unexpected(format!("{:#}", e)));
        }

        info!("✅ EXPORT: Wrote {} rows on {} pages", row_count, page_count);

        Ok(ExportOutcome {
            file_path: self.report_path.to_string_lossy().to_string(),
            row_count,
            page_count,
        })
    }

    /// Success message shown after an export
    pub fn success_message(&self, outcome: &ExportOutcome) -> String {
        format!("PDF exported successfully!\nSaved as '{}'.", outcome.file_path)
    }

    fn render_pdf(&self, pages: &[Vec<ReportRow>]) -> Result<()> {
        let (doc, first_page, first_layer) =
            PdfDocument::new("Expense Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        for (index, rows) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };
            layer.set_outline_thickness(0.5);

            let mut top = MARGIN;
            if index == 0 {
                let title = "Expense Report";
                let x = MARGIN + (TITLE_WIDTH - approx_text_width(title, TITLE_FONT_SIZE)) / 2.0;
                layer.use_text(title, TITLE_FONT_SIZE, Mm(x), Mm(baseline(top, TITLE_HEIGHT)), &bold);

                top = first_table_top();
                let amount_header = format!("Amount ({})", self.currency_code);
                let header = [
                    ("Date", Align::Center),
                    ("Name", Align::Center),
                    (amount_header.as_str(), Align::Center),
                    ("Category", Align::Center),
                ];
                draw_row(&layer, top, &header, &bold);
                top += ROW_HEIGHT;
            }

            for row in rows {
                draw_row(&layer, top, &row.cells(), &regular);
                top += ROW_HEIGHT;
            }
        }

        let file = File::create(&self.report_path)
            .with_context(|| format!("Failed to create {}", self.report_path.display()))?;
        doc.save(&mut BufWriter::new(file))?;
        Ok(())
    }
}

/// Text baseline (from the page bottom) for a cell whose top edge is `top`
fn baseline(top: f32, height: f32) -> f32 {
    PAGE_HEIGHT - (top + height * 0.7)
}

/// Draw one bordered table row whose top edge sits `top` mm below the page top
fn draw_row(layer: &PdfLayerReference, top: f32, cells: &[(&str, Align); 4], font: &IndirectFontRef) {
    let mut left = MARGIN;
    for ((text, align), width) in cells.iter().zip(COLUMN_WIDTHS) {
        draw_cell_border(layer, left, top, width, ROW_HEIGHT);

        let x = match align {
            Align::Left => left + CELL_PADDING,
            Align::Center => left + ((width - approx_text_width(text, TABLE_FONT_SIZE)) / 2.0).max(CELL_PADDING),
        };
        layer.use_text(*text, TABLE_FONT_SIZE, Mm(x), Mm(baseline(top, ROW_HEIGHT)), font);

        left += width;
    }
}

fn draw_cell_border(layer: &PdfLayerReference, left: f32, top: f32, width: f32, height: f32) {
    let upper = PAGE_HEIGHT - top;
    let lower = PAGE_HEIGHT - (top + height);
    let right = left + width;

    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(left), Mm(upper)), false),
            (Point::new(Mm(right), Mm(upper)), false),
            (Point::new(Mm(right), Mm(lower)), false),
            (Point::new(Mm(left), Mm(lower)), false),
        ],
        is_closed: true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use chrono::NaiveDate;
    use shared::Category;

    fn row(n: usize) -> ReportRow {
        ReportRow {
            date: "2024-01-01".to_string(),
            name: format!("row {}", n),
            amount: "INR 1".to_string(),
            category: "Food".to_string(),
        }
    }

    fn add(env: &TestEnvironment, name: &str, amount: u64, category: Category) {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        env.repository()
            .append(&Expense::new(name, amount, category, date))
            .unwrap();
    }

    fn service(env: &TestEnvironment) -> ExportService {
        ExportService::new(env.base_path.join("Expense_Report.pdf"), "INR")
    }

    #[test]
    fn test_sanitize_strips_emoji_from_categories() {
        assert_eq!(sanitize_text("Food 🍔", MAX_CATEGORY_CHARS), "Food ");
        assert_eq!(sanitize_text("Shopping 🛍️", MAX_CATEGORY_CHARS), "Shopping ");
        assert_eq!(sanitize_text("Bills 💡", MAX_CATEGORY_CHARS), "Bills ");
    }

    #[test]
    fn test_sanitize_truncates_before_stripping() {
        assert_eq!(
            sanitize_text("A very long expense name indeed", MAX_NAME_CHARS),
            "A very long expense "
        );
        // the emoji counts towards the limit even though it is removed afterwards
        assert_eq!(sanitize_text("🍔🍔🍔abc", 4), "a");
    }

    #[test]
    fn test_sanitize_keeps_allowed_punctuation_and_letters() {
        assert_eq!(sanitize_text("Café, tea. snack-bar_1", 30), "Café, tea. snack-bar_1");
        assert_eq!(sanitize_text("50% off! (sale)", 30), "50 off sale");
    }

    #[test]
    fn test_report_row_formatting() {
        let expense = Expense::new(
            "Dinner at the new place downtown",
            450,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        );

        let row = ReportRow::from_expense(&expense, "INR");

        assert_eq!(row.date, "2024-02-29");
        assert_eq!(row.name, "Dinner at the new pl");
        assert_eq!(row.amount, "INR 450");
        assert_eq!(row.category, "Food ");
    }

    #[test]
    fn test_paginate_keeps_order_and_splits_pages() {
        let first_capacity = rows_fitting_below(first_table_top() + ROW_HEIGHT);
        let page_capacity = rows_fitting_below(MARGIN);
        assert_eq!(first_capacity, 24);
        assert_eq!(page_capacity, 27);

        let total = first_capacity + page_capacity + 3;
        let pages = paginate((0..total).map(row).collect());

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), first_capacity);
        assert_eq!(pages[1].len(), page_capacity);
        assert_eq!(pages[2].len(), 3);
        let names: Vec<String> = pages.into_iter().flatten().map(|r| r.name).collect();
        let expected: Vec<String> = (0..total).map(|n| format!("row {}", n)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_paginate_single_page() {
        let pages = paginate(vec![row(0)]);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 1);
    }

    #[test]
    fn test_export_missing_store_is_no_data_and_writes_nothing() {
        let env = TestEnvironment::new().unwrap();
        let service = service(&env);

        let result = service.export_document(&env.repository());

        assert!(matches!(result, Err(ExpenseError::NoData)));
        assert!(!service.report_path().exists());
    }

    #[test]
    fn test_export_empty_store_is_no_data_and_writes_nothing() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name,Amount,Category,Date,Id\n").unwrap();
        let service = service(&env);

        let result = service.export_document(&env.repository());

        assert!(matches!(result, Err(ExpenseError::NoData)));
        assert!(!service.report_path().exists());
    }

    #[test]
    fn test_export_writes_pdf() {
        let env = TestEnvironment::new().unwrap();
        add(&env, "Lunch", 120, Category::Food);
        add(&env, "Taxi", 300, Category::Transport);
        let service = service(&env);

        let outcome = service.export_document(&env.repository()).unwrap();

        assert_eq!(outcome.row_count, 2);
        assert_eq!(outcome.page_count, 1);
        let bytes = fs::read(service.report_path()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(service.success_message(&outcome).starts_with("PDF exported successfully!"));
    }

    #[test]
    fn test_export_paginates_long_reports() {
        let env = TestEnvironment::new().unwrap();
        for i in 0..60 {
            add(&env, &format!("item {}", i), i, Category::Other);
        }
        let service = service(&env);

        let outcome = service.export_document(&env.repository()).unwrap();

        assert_eq!(outcome.row_count, 60);
        assert_eq!(outcome.page_count, 3);
    }

    #[test]
    fn test_export_unreadable_store_is_unexpected_error() {
        let env = TestEnvironment::new().unwrap();
        env.write_raw("Name,Amount,Category,Date,Id\nGift,lots,Other,2024-01-02,abc\n").unwrap();
        let service = service(&env);

        let result = service.export_document(&env.repository());

        assert!(matches!(result, Err(ExpenseError::Unexpected(_))));
        assert!(!service.report_path().exists());
    }
}
