//! Identity rule for deduplicating quotes during import and sync

use crate::domain::Quote;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fields decide whether two quotes are the same entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DedupKey {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "text+category")]
    TextAndCategory,
}

impl DedupKey {
    pub fn same(&self, a: &Quote, b: &Quote) -> bool {
        match self {
            DedupKey::Text => a.text == b.text,
            DedupKey::TextAndCategory => a.text == b.text && a.category == b.category,
        }
    }
}

impl FromStr for DedupKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(DedupKey::Text),
            "text+category" => Ok(DedupKey::TextAndCategory),
            _ => Err(format!(
                "Invalid dedup key: '{}'. Valid keys are: text, text+category",
                s
            )),
        }
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupKey::Text => f.write_str("text"),
            DedupKey::TextAndCategory => f.write_str("text+category"),
        }
    }
}
