//! Editable cell: a two-state machine (display / editing) plus the display and
//! parsing rules that depend on the column type.
//!
//! The browser component owns one `CellEditor` per cell and forwards DOM events
//! to it; whatever `commit` returns is handed to the table as the new value.

use crate::columns::parse_date;
use crate::model::column::{ColumnDescriptor, ColumnType};
use crate::model::record::{FieldValue, format_plain_number};
use num_format::{Locale, ToFormattedString};
use thiserror::Error;

/// Shown for missing or null values.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("'{0}' is not a date")]
    InvalidDate(String),
    #[error("'{0}' is not yes or no")]
    InvalidBoolean(String),
    #[error("'{0}' is not one of the field options")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellMode {
    #[default]
    Display,
    Editing {
        draft: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditor {
    mode: CellMode,
    /// Draft the current edit started from.
    seed: String,
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &CellMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CellMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            CellMode::Editing { draft } => Some(draft),
            CellMode::Display => None,
        }
    }

    /// Display → editing, seeding the draft from the current value.
    pub fn begin_edit(&mut self, current: Option<&FieldValue>, column: &ColumnDescriptor) {
        if self.is_editing() {
            return;
        }
        let draft = draft_text(current, column);
        self.seed = draft.clone();
        self.mode = CellMode::Editing { draft };
    }

    pub fn set_draft(&mut self, text: String) {
        if let CellMode::Editing { draft } = &mut self.mode {
            *draft = text;
        }
    }

    /// Editing → display with the parsed draft.
    ///
    /// Returns `Ok(None)` when the cell was not editing, or when the draft is
    /// still the one `begin_edit` produced; the cell leaves edit mode without a
    /// value in that case. A draft that does not parse for the column type
    /// leaves the cell in edit mode.
    pub fn commit(&mut self, column: &ColumnDescriptor) -> Result<Option<FieldValue>, CellError> {
        let CellMode::Editing { draft } = &self.mode else {
            return Ok(None);
        };
        if *draft == self.seed {
            self.mode = CellMode::Display;
            return Ok(None);
        }
        let value = parse_draft(draft, column)?;
        self.mode = CellMode::Display;
        Ok(Some(value))
    }

    /// Discrete widgets (select, boolean, date) commit as soon as an option is
    /// picked.
    pub fn select(&mut self, raw: String, column: &ColumnDescriptor) -> Result<Option<FieldValue>, CellError> {
        self.set_draft(raw);
        self.commit(column)
    }

    /// Editing → display, discarding the draft.
    pub fn cancel(&mut self) {
        self.mode = CellMode::Display;
    }
}

/// Whether the column edits through a discrete selection widget that commits
/// on change rather than on Enter or blur.
pub fn commits_on_selection(column_type: ColumnType) -> bool {
    matches!(column_type, ColumnType::Boolean | ColumnType::Date | ColumnType::Select)
}

/// Text shown for a value in display mode.
pub fn display_text(value: Option<&FieldValue>, column: &ColumnDescriptor) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return PLACEHOLDER.to_string();
    };
    match (column.column_type, value) {
        (_, FieldValue::Boolean(b)) => yes_no(*b).to_string(),
        (ColumnType::Boolean, FieldValue::Text(s)) => match parse_bool(s) {
            Some(b) => yes_no(b).to_string(),
            None => s.clone(),
        },
        (ColumnType::Select, v) => {
            let raw = v.raw_string();
            column.option_label(&raw).to_string()
        }
        (ColumnType::Date, FieldValue::Text(s)) => match parse_date(s) {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => s.clone(),
        },
        (_, FieldValue::Number(n)) => format_number(*n),
        (_, v) => v.raw_string(),
    }
}

/// Initial draft when entering edit mode.
pub fn draft_text(value: Option<&FieldValue>, column: &ColumnDescriptor) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return match column.column_type {
            ColumnType::Boolean => "false".to_string(),
            ColumnType::Select => column.options.first().map(|o| o.value.clone()).unwrap_or_default(),
            _ => String::new(),
        };
    };
    match (column.column_type, value) {
        (ColumnType::Date, FieldValue::Text(s)) => parse_date(s)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        (ColumnType::Boolean, FieldValue::Text(s)) => parse_bool(s).unwrap_or(false).to_string(),
        (_, v) => v.raw_string(),
    }
}

/// Converts a draft into the value sent to the hosted service.
pub fn parse_draft(draft: &str, column: &ColumnDescriptor) -> Result<FieldValue, CellError> {
    let trimmed = draft.trim();
    match column.column_type {
        ColumnType::Text => Ok(FieldValue::Text(draft.to_string())),
        ColumnType::Number if trimmed.is_empty() => Ok(FieldValue::Null),
        ColumnType::Number => trimmed
            .replace(',', "")
            .parse::<f64>()
            .map(FieldValue::Number)
            .map_err(|_| CellError::InvalidNumber(draft.to_string())),
        ColumnType::Boolean => parse_bool(trimmed)
            .map(FieldValue::Boolean)
            .ok_or_else(|| CellError::InvalidBoolean(draft.to_string())),
        ColumnType::Date if trimmed.is_empty() => Ok(FieldValue::Null),
        ColumnType::Date => parse_date(trimmed)
            .map(|d| FieldValue::Text(format!("{}T00:00:00.000Z", d.format("%Y-%m-%d"))))
            .ok_or_else(|| CellError::InvalidDate(draft.to_string())),
        ColumnType::Select => {
            if column.options.is_empty() || column.options.iter().any(|o| o.value == trimmed) {
                Ok(FieldValue::Text(trimmed.to_string()))
            } else {
                Err(CellError::UnknownOption(draft.to_string()))
            }
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Groups the integer part with thousands separators.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let plain = format_plain_number(n);
    let (int_part, frac) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };
    let sign = if int_part.starts_with('-') { "-" } else { "" };
    let digits = int_part.trim_start_matches('-');
    let grouped = digits
        .parse::<u64>()
        .map(|v| v.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| digits.to_string());
    match frac {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
