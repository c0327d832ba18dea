//! Output formatting utilities

use crate::application::{ImportReport, Notification};
use crate::domain::Quote;

/// Format quotes for display, one per line
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes available.".to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format_quote(quote));
        output.push('\n');
    }
    output
}

pub fn format_quote(quote: &Quote) -> String {
    format!("{}: {}", quote.category, quote.text)
}

/// Format category names, marking the selected one
pub fn format_category_list(categories: &[String], selected: &str) -> String {
    let mut output = String::new();
    for name in categories {
        let marker = if name == selected { '*' } else { ' ' };
        output.push_str(&format!("{} {}\n", marker, name));
    }
    output
}

pub fn format_import_report(report: &ImportReport) -> String {
    let mut output = format!(
        "Quotes imported successfully! Added {}, skipped {} {}",
        report.added,
        report.duplicates,
        plural(report.duplicates, "duplicate", "duplicates")
    );
    if report.invalid > 0 {
        output.push_str(&format!(
            " and {} invalid {}",
            report.invalid,
            plural(report.invalid, "entry", "entries")
        ));
    }
    output
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Format a sync notification followed by the refreshed view
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "{} ({} new)\n{}",
        notification.message,
        notification.added.len(),
        format_quote_list(&notification.view)
    )
}
