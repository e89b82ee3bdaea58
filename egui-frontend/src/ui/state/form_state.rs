//! # Form State Module
//!
//! Raw text typed into the add-expense form. Nothing here is validated; the
//! form service decides whether the input is acceptable when the user submits.

use shared::Category;

/// Input fields of the add-expense form
#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub amount_text: String,
    pub category: Category,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear name and amount after a successful add; the category choice stays
    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.amount_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_inputs_keeps_category() {
        let mut form = FormState::new();
        form.name = "Bus".to_string();
        form.amount_text = "30".to_string();
        form.category = Category::Transport;

        form.clear_inputs();

        assert!(form.name.is_empty());
        assert!(form.amount_text.is_empty());
        assert_eq!(form.category, Category::Transport);
    }
}
