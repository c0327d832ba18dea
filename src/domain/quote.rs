//! Quote record

use crate::error::{QuotebookError, Result};
use serde::{Deserialize, Serialize};

/// A single quote with the category it is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Create a quote without validation
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote from user input, trimming both fields.
    /// Fails if either field is empty after trimming.
    pub fn parse(text: &str, category: &str) -> Result<Self> {
        let quote = Quote::new(text.trim(), category.trim());
        quote.validate()?;
        Ok(quote)
    }

    /// Check that both fields are non-empty
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() || self.category.trim().is_empty() {
            return Err(QuotebookError::InvalidQuote(
                "Please enter both a quote and a category.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Quotes a fresh store starts with when nothing usable is persisted
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new("The purpose of our lives is to be happy.", "Happiness"),
        Quote::new("Get busy living or get busy dying.", "Motivation"),
    ]
}
