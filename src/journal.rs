//! Append-only CSV record of advisor decisions.

use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::error::AdvisorResult;

pub const HEADER: &str =
    "timestamp,cards,normalized,position,stack_size,action_before,suggestion,explanation";

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: u64,
    pub cards: String,
    pub normalized: String,
    pub position: String,
    pub stack_size: f64,
    pub action_before: String,
    pub suggestion: String,
    pub explanation: String,
}

impl JournalEntry {
    pub fn to_csv_line(&self) -> String {
        let timestamp = self.timestamp.to_string();
        let stack = self.stack_size.to_string();
        let fields: [&str; 8] = [
            timestamp.as_str(),
            self.cards.as_str(),
            self.normalized.as_str(),
            self.position.as_str(),
            stack.as_str(),
            self.action_before.as_str(),
            self.suggestion.as_str(),
            self.explanation.as_str(),
        ];
        fields
            .iter()
            .map(|f| csv_field(f))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Quotes a field when it holds a delimiter, quote or line break.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Appends one line, creating the file (with a header) if needed. The file
/// is opened and closed on every call.
pub fn append_entry(path: &Path, entry: &JournalEntry) -> AdvisorResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = String::new();
    if file.metadata()?.len() == 0 {
        out.push_str(HEADER);
        out.push('\n');
    }
    out.push_str(&entry.to_csv_line());
    out.push('\n');
    file.write_all(out.as_bytes())?;
    debug!("journal entry appended to {}", path.display());
    Ok(())
}
