//! Expense form domain logic.
//!
//! Validation and display formatting for the "add expense" form. The UI only
//! collects the raw text; the rules for what counts as a valid name and amount
//! live here.

use shared::{ExpenseFormValidation, ExpenseValidationError};

use super::errors::ExpenseError;

/// Form service that validates input and formats amounts for display
#[derive(Debug, Clone)]
pub struct ExpenseFormService {
    currency_symbol: String,
}

impl ExpenseFormService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Validate the name and amount fields of the expense form
    ///
    /// The name only has to be non-empty. The amount must consist solely of
    /// ASCII digits: no sign, no decimal point, no currency symbol.
    pub fn validate_input(&self, name: &str, amount_text: &str) -> ExpenseFormValidation {
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push(ExpenseValidationError::EmptyName);
        }

        let cleaned_amount = if amount_text.is_empty() {
            errors.push(ExpenseValidationError::EmptyAmount);
            None
        } else if !amount_text.chars().all(|c| c.is_ascii_digit()) {
            errors.push(ExpenseValidationError::AmountNotNumeric(amount_text.to_string()));
            None
        } else {
            match amount_text.parse::<u64>() {
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.push(ExpenseValidationError::AmountTooLarge(amount_text.to_string()));
                    None
                }
            }
        };

        ExpenseFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
        }
    }

    /// Validate and return the parsed amount, or the validation errors
    pub fn parse_input(&self, name: &str, amount_text: &str) -> Result<u64, ExpenseError> {
        let validation = self.validate_input(name, amount_text);
        match validation.cleaned_amount {
            Some(amount) if validation.is_valid => Ok(amount),
            _ => Err(ExpenseError::InvalidInput(validation.errors)),
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }

    /// Text of the running total label
    pub fn format_total(&self, total: u64) -> String {
        format!("Total Spent: {}", self.format_amount(total))
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

impl Default for ExpenseFormService {
    fn default() -> Self {
        Self::new("₹")
    }
}
