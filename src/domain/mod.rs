//! Domain layer - Quote model and list rules

pub mod category;
pub mod dedup;
pub mod quote;

pub use category::{category_names, CategoryFilter, ALL_CATEGORIES};
pub use dedup::DedupKey;
pub use quote::{default_quotes, Quote};
