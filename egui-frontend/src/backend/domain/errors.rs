use shared::ExpenseValidationError;

/// Errors surfaced to the user by the expense services
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Please enter valid details!")]
    InvalidInput(Vec<ExpenseValidationError>),
    #[error("Please select an expense to delete.")]
    NoSelection,
    #[error("No expenses found!")]
    NoData,
    #[error("Failed to access the expense file: {0:#}")]
    Storage(#[from] anyhow::Error),
    #[error("An unexpected error occurred:\n{0}")]
    Unexpected(String),
}

impl ExpenseError {
    /// Short title for the message shown next to the error text
    pub fn title(&self) -> &'static str {
        match self {
            ExpenseError::InvalidInput(_) | ExpenseError::NoSelection => "Invalid input",
            ExpenseError::NoData => "Nothing to show",
            ExpenseError::Storage(_) | ExpenseError::Unexpected(_) => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ExpenseError::NoData.to_string(), "No expenses found!");
        assert_eq!(ExpenseError::NoSelection.to_string(), "Please select an expense to delete.");
        assert_eq!(
            ExpenseError::InvalidInput(vec![ExpenseValidationError::EmptyName]).to_string(),
            "Please enter valid details!"
        );
        assert_eq!(
            ExpenseError::Unexpected("disk full".to_string()).to_string(),
            "An unexpected error occurred:\ndisk full"
        );
    }

    #[test]
    fn test_storage_error_includes_underlying_cause() {
        let cause = anyhow::anyhow!("invalid digit found in string").context("Malformed row 1 in expenses.csv");

        let error = ExpenseError::from(cause);

        assert_eq!(
            error.to_string(),
            "Failed to access the expense file: Malformed row 1 in expenses.csv: invalid digit found in string"
        );
    }
}
