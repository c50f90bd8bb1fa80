use crate::model::field::FieldOption;
use serde::{Deserialize, Serialize};

/// The value type a table column is treated as, chosen by inference over the
/// observed values or by the field's metadata.
///
/// The type selects both the display formatting and the edit widget of every
/// cell in the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Boolean,
    Date,
    Select,
}

/// A column of a resource table, derived for one page view and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Field identifier the column reads from each record.
    pub field_id: String,
    /// Header text.
    pub header: String,
    pub column_type: ColumnType,
    /// Options of a `Select` column; empty for every other type.
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

impl ColumnDescriptor {
    pub fn text(field_id: &str, header: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            header: header.to_string(),
            column_type: ColumnType::Text,
            options: Vec::new(),
        }
    }

    /// Label of a select option, falling back to the raw value when unmapped.
    pub fn option_label<'a>(&'a self, raw: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == raw)
            .map(|o| o.label.as_str())
            .unwrap_or(raw)
    }
}
