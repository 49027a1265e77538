#![deny(unsafe_code)]

//! CSV parsing for segment and window tables.
//!
//! Every table is a headed CSV. Columns are located by header name so extra
//! columns are ignored and column order does not matter.

use argic_model::{SegmentEntry, SegmentKind, SegmentTable, WindowEntry, WindowPriorityTable};

use crate::error::StandardsError;

/// Column layout of a segment table file.
#[derive(Debug, Clone, Copy)]
pub struct SegmentColumns {
    pub name: &'static str,
    pub code: &'static str,
    pub group: Option<&'static str>,
    pub label: Option<&'static str>,
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn required_index(
    headers: &csv::StringRecord,
    name: &str,
    source_name: &str,
) -> Result<usize, StandardsError> {
    header_index(headers, name).ok_or_else(|| StandardsError::MissingColumn {
        source_name: source_name.to_string(),
        column: name.to_string(),
    })
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes())
}

/// Parse a segment table. Rows with an empty name are skipped.
pub fn parse_segment_csv(
    source_name: &str,
    text: &str,
    kind: SegmentKind,
    columns: SegmentColumns,
) -> Result<SegmentTable, StandardsError> {
    let mut reader = reader(text);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(source_name, &e))?
        .clone();

    let idx_name = required_index(&headers, columns.name, source_name)?;
    let idx_code = required_index(&headers, columns.code, source_name)?;
    let idx_group = columns.group.and_then(|c| header_index(&headers, c));
    let idx_label = columns.label.and_then(|c| header_index(&headers, c));

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::csv(source_name, &e))?;
        let Some(name) = get_string(&row, Some(idx_name)) else {
            continue;
        };
        let code = get_string(&row, Some(idx_code)).unwrap_or_default();
        let mut entry = SegmentEntry::new(name, code);
        entry.group = get_string(&row, idx_group);
        entry.label = get_string(&row, idx_label);
        entries.push(entry);
    }

    SegmentTable::from_entries(kind, entries).map_err(|error| StandardsError::Table {
        source_name: source_name.to_string(),
        error,
    })
}

/// Parse the window priority table. File order is priority order.
pub fn parse_window_csv(
    source_name: &str,
    text: &str,
) -> Result<WindowPriorityTable, StandardsError> {
    let mut reader = reader(text);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(source_name, &e))?
        .clone();

    let idx_window = required_index(&headers, "Window", source_name)?;
    let idx_position = required_index(&headers, "Position", source_name)?;
    let idx_label = header_index(&headers, "Label");

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::csv(source_name, &e))?;
        let Some(window) = get_string(&row, Some(idx_window)) else {
            continue;
        };
        let position = get_string(&row, Some(idx_position))
            .map(|p| argic_model::canonical_token(&p))
            .unwrap_or_default();
        let mut entry = WindowEntry::new(window, position);
        entry.label = get_string(&row, idx_label);
        entries.push(entry);
    }

    WindowPriorityTable::from_entries(entries).map_err(|error| StandardsError::Table {
        source_name: source_name.to_string(),
        error,
    })
}
