//! Category filtering

use crate::domain::Quote;
use std::fmt;
use std::str::FromStr;

/// Name of the sentinel filter that matches every quote
pub const ALL_CATEGORIES: &str = "all";

/// Which quotes are currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Does this filter let the quote through?
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => quote.category == *name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Apply the filter, preserving order
    pub fn apply<'a>(&self, quotes: &'a [Quote]) -> Vec<&'a Quote> {
        quotes.iter().filter(|q| self.matches(q)).collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Category cannot be empty".to_string());
        }
        if trimmed == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(trimmed.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct category names in first-seen order, with the "all" sentinel first.
pub fn category_names(quotes: &[Quote]) -> Vec<String> {
    let mut names = vec![ALL_CATEGORIES.to_string()];
    for quote in quotes {
        if !names.iter().any(|n| *n == quote.category) {
            names.push(quote.category.clone());
        }
    }
    names
}
