use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

/// Placeholder date for rows written before the `Date` column existed
pub const MISSING_DATE: &str = "N/A";

/// Format used for the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry as stored in the backing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier generated when the entry is created (UUID v4)
    pub id: String,
    /// Short user-typed label
    pub name: String,
    /// Amount spent, always a whole non-negative number
    pub amount: u64,
    /// Category label; normally one of [`Category::ALL`], but read back as-is
    pub category: String,
    /// Creation date as `YYYY-MM-DD`, or [`MISSING_DATE`] for legacy rows
    pub date: String,
}

impl Expense {
    /// Create a new entry with a fresh id, stamped with the given date
    pub fn new(name: impl Into<String>, amount: u64, category: Category, date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            category: category.label().to_string(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Whether this entry matches a criteria-delete key
    pub fn matches(&self, criteria: &ExpenseCriteria) -> bool {
        self.name == criteria.name
            && self.amount == criteria.amount
            && self.category == criteria.category
    }
}

/// Fixed set of categories offered by the category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// The label written to the backing file and shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food 🍔",
            Category::Transport => "Transport 🚗",
            Category::Shopping => "Shopping 🛍️",
            Category::Bills => "Bills 💡",
            Category::Other => "Other 📝",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Value-equality key used by criteria deletes (date is not part of it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCriteria {
    pub name: String,
    pub amount: u64,
    pub category: String,
}

impl From<&Expense> for ExpenseCriteria {
    fn from(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
        }
    }
}

/// Reasons a new expense form can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseValidationError {
    EmptyName,
    EmptyAmount,
    /// Amount contains something other than decimal digits
    AmountNotNumeric(String),
    /// Amount is all digits but does not fit into an integer amount
    AmountTooLarge(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseValidationError::EmptyName => write!(f, "Please enter an expense name"),
            ExpenseValidationError::EmptyAmount => write!(f, "Please enter an amount"),
            ExpenseValidationError::AmountNotNumeric(input) => {
                write!(f, "Amount must be a whole number, got '{}'", input)
            }
            ExpenseValidationError::AmountTooLarge(input) => write!(f, "Amount '{}' is too large", input),
        }
    }
}

/// Result of validating the expense form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ExpenseValidationError>,
    /// The parsed amount when the amount field is valid
    pub cleaned_amount: Option<u64>,
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: u64,
}

/// RGB color used to fill a chart bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BarColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One bar of the summary chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub category: String,
    pub total: u64,
    pub color: BarColor,
    /// Text drawn above the bar, e.g. `15₹`
    pub label: String,
}

/// Everything needed to draw the category summary chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

/// Outcome of a successful report export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    /// Path of the written report
    pub file_path: String,
    /// Number of expense rows in the report
    pub row_count: usize,
    /// Number of pages in the report
    pub page_count: usize,
}
