//! Reader for receipt files: one transaction per line, written as
//! `[item1, item2, ...]`.

use super::error::ParseError;
use super::transactions::TransactionStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

const ITEM_SEPARATOR: &str = ", ";

/// Splits one receipt line into item tokens. Returns `None` unless the whole
/// line is enclosed in square brackets. Trailing empty tokens are dropped, so
/// `[]` and `[a, ]` never yield an empty-string item.
pub fn parse_receipt(line: &str) -> Option<Vec<&str>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let body = line.strip_prefix('[')?.strip_suffix(']')?;
    let mut tokens: Vec<&str> = body.split(ITEM_SEPARATOR).collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    Some(tokens)
}

/// Reads receipts, skipping lines that are not receipts.
pub fn read_receipts<R: BufRead>(reader: R) -> Result<TransactionStore, ParseError> {
    collect_receipts(reader, false)
}

/// Reads receipts, failing on the first line that is not a receipt.
pub fn read_receipts_strict<R: BufRead>(reader: R) -> Result<TransactionStore, ParseError> {
    collect_receipts(reader, true)
}

pub fn read_receipts_from_path(path: impl AsRef<Path>, strict: bool) -> Result<TransactionStore, ParseError> {
    let reader = BufReader::new(File::open(path)?);
    collect_receipts(reader, strict)
}

fn collect_receipts<R: BufRead>(reader: R, strict: bool) -> Result<TransactionStore, ParseError> {
    let mut store = TransactionStore::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_receipt(&line) {
            Some(tokens) => store.push(tokens),
            None if strict => {
                return Err(ParseError::Malformed {
                    line: idx + 1,
                    content: line.clone(),
                })
            }
            None => warn!(line = idx + 1, content = %line, "skipping line that is not a receipt"),
        }
    }
    Ok(store)
}
