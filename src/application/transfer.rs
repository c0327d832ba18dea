//! Export and import of quote files

use crate::application::QuoteStore;
use crate::domain::{DedupKey, Quote};
use crate::error::{QuotebookError, Result};
use crate::infrastructure::KeyValueStore;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name used when no export path is given
pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// Outcome of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
    pub invalid: usize,
}

/// Write every quote to `path` as a pretty-printed JSON array
pub fn export_to_file<S: KeyValueStore>(store: &QuoteStore<S>, path: &Path) -> Result<usize> {
    let contents = serde_json::to_string_pretty(store.all())?;
    fs::write(path, contents)?;
    Ok(store.len())
}

/// Extract quotes from import file contents.
///
/// The whole document must be a JSON array, otherwise nothing is imported.
/// Elements that are not `{text: string, category: string}` with non-empty
/// fields are counted as invalid and skipped. Bytes that are not UTF-8 are
/// rejected like any other malformed JSON.
pub fn parse_import(contents: &[u8]) -> Result<(Vec<Quote>, usize)> {
    let document: Value = serde_json::from_slice(contents)
        .map_err(|e| QuotebookError::InvalidImport(format!("not valid JSON ({})", e)))?;

    let Value::Array(items) = document else {
        return Err(QuotebookError::InvalidImport(
            "expected a JSON array of quotes".to_string(),
        ));
    };

    let mut quotes = Vec::with_capacity(items.len());
    let mut invalid = 0;
    for item in items {
        match serde_json::from_value::<Quote>(item) {
            Ok(quote) if quote.is_valid() => quotes.push(quote),
            _ => invalid += 1,
        }
    }

    Ok((quotes, invalid))
}

/// Merge the quotes in `path` into the store
pub fn import_from_file<S: KeyValueStore>(
    store: &mut QuoteStore<S>,
    path: &Path,
    key: DedupKey,
) -> Result<ImportReport> {
    let contents = fs::read(path)?;
    let (quotes, invalid) = parse_import(&contents)?;
    if invalid > 0 {
        warn!(invalid, path = %path.display(), "Skipping malformed entries in import file");
    }

    let candidates = quotes.len();
    let added = store.merge(quotes, key)?.len();

    Ok(ImportReport {
        added,
        duplicates: candidates - added,
        invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryKeyValueStore;
    use tempfile::TempDir;

    fn store() -> QuoteStore<MemoryKeyValueStore> {
        QuoteStore::load(MemoryKeyValueStore::new()).unwrap()
    }

    #[test]
    fn test_export_is_pretty_json_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");

        let count = export_to_file(&store(), &path).unwrap();

        assert_eq!(count, 3);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n  {\n    \"text\": "));
        let parsed: Vec<Quote> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn test_export_then_import_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotes.json");
        let mut store = store();
        store.append(Quote::new("extra", "Misc")).unwrap();

        export_to_file(&store, &path).unwrap();
        let before = store.all().to_vec();
        let report = import_from_file(&mut store, &path, DedupKey::Text).unwrap();

        assert_eq!(report.added, 0);
        assert_eq!(report.duplicates, 4);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_import_skips_existing_text_and_adds_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(
            &path,
            r#"[
                {"text": "Get busy living or get busy dying.", "category": "Other"},
                {"text": "Brand new", "category": "Fresh"}
            ]"#,
        )
        .unwrap();
        let mut store = store();

        let report = import_from_file(&mut store, &path, DedupKey::Text).unwrap();

        assert_eq!(
            report,
            ImportReport {
                added: 1,
                duplicates: 1,
                invalid: 0
            }
        );
        assert_eq!(store.len(), 4);
        assert_eq!(store.by_category("Fresh").len(), 1);
        assert!(store.by_category("Other").is_empty());
    }

    #[test]
    fn test_import_text_and_category_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(
            &path,
            r#"[{"text": "Get busy living or get busy dying.", "category": "Other"}]"#,
        )
        .unwrap();
        let mut store = store();

        let report = import_from_file(&mut store, &path, DedupKey::TextAndCategory).unwrap();

        assert_eq!(report.added, 1);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(&path, r#"{"text": "A", "category": "B"}"#).unwrap();
        let mut store = store();

        let result = import_from_file(&mut store, &path, DedupKey::Text);

        assert!(matches!(result, Err(QuotebookError::InvalidImport(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_import_rejects_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(&path, r#"[{"text": "A", "category": "B"}, "#).unwrap();
        let mut store = store();

        let result = import_from_file(&mut store, &path, DedupKey::Text);

        assert!(matches!(result, Err(QuotebookError::InvalidImport(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_import_rejects_non_utf8_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(&path, [0xff, 0xfe, b'[', b']']).unwrap();
        let mut store = store();

        let result = import_from_file(&mut store, &path, DedupKey::Text);

        assert!(matches!(result, Err(QuotebookError::InvalidImport(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let mut store = store();

        let result = import_from_file(&mut store, &temp.path().join("nope.json"), DedupKey::Text);

        assert!(matches!(result, Err(QuotebookError::Io(_))));
    }

    #[test]
    fn test_parse_import_counts_invalid_entries() {
        let (quotes, invalid) = parse_import(
            br#"[
                {"text": "ok", "category": "A"},
                {"text": "missing category"},
                {"text": 7, "category": "A"},
                {"text": "", "category": "A"},
                "just a string"
            ]"#,
        )
        .unwrap();

        assert_eq!(quotes, vec![Quote::new("ok", "A")]);
        assert_eq!(invalid, 4);
    }
}
