//! Category summary chart data.
//!
//! Groups the stored expenses by category and turns the totals into bars for
//! the summary window. Bar colors are picked at random from [`PALETTE`] on
//! every call, so two renders of the same data may differ in color only.

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{BarColor, ChartBar, ChartSummary};

use super::errors::ExpenseError;
use crate::backend::storage::traits::group_by_category;
use crate::backend::storage::ExpenseStorage;

/// Colors a bar can be filled with
pub const PALETTE: [BarColor; 5] = [
    BarColor::from_rgb(0xFF, 0x6B, 0x6B),
    BarColor::from_rgb(0x4D, 0x96, 0xFF),
    BarColor::from_rgb(0x28, 0xA7, 0x45),
    BarColor::from_rgb(0xFF, 0xC1, 0x07),
    BarColor::from_rgb(0x66, 0x10, 0xF2),
];

/// Builds the grouped-sum bar chart
#[derive(Debug, Clone)]
pub struct SummaryService {
    currency_symbol: String,
}

impl SummaryService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Build the chart for the current contents of `storage`
    ///
    /// Fails with [`ExpenseError::NoData`] when the store does not exist yet.
    /// An existing but empty store yields a chart without bars.
    pub fn chart_summary<S, R>(&self, storage: &S, rng: &mut R) -> Result<ChartSummary, ExpenseError>
    where
        S: ExpenseStorage,
        R: Rng + ?Sized,
    {
        let expenses = storage.load_existing()?.ok_or(ExpenseError::NoData)?;

        let bars: Vec<ChartBar> = group_by_category(&expenses)
            .into_iter()
            .map(|total| ChartBar {
                label: format!("{}{}", total.total, self.currency_symbol),
                color: PALETTE.choose(rng).copied().unwrap_or(PALETTE[0]),
                category: total.category,
                total: total.total,
            })
            .collect();

        info!("📊 Built summary chart with {} categories", bars.len());

        Ok(ChartSummary {
            title: "📊 Expense Summary".to_string(),
            x_label: "Category".to_string(),
            y_label: format!("Total Amount Spent ({})", self.currency_symbol),
            bars,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new("₹")
    }
}
