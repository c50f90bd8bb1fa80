//! Field metadata exchanged with the hosted field API.

use crate::model::column::ColumnType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    Date,
    Select,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Date,
        FieldKind::Select,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Select => "select",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            FieldKind::Text => ColumnType::Text,
            FieldKind::Number => ColumnType::Number,
            FieldKind::Boolean => ColumnType::Boolean,
            FieldKind::Date => ColumnType::Date,
            FieldKind::Select => ColumnType::Select,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Description of a field as known to the hosted service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
    pub id: String,
    pub label: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// `true` for fields that live only in the remote CRM and are not part of
    /// the unified model.
    #[serde(default)]
    pub remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilters {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
}

/// Payload of `createField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldConfig {
    pub model: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl CreateFieldConfig {
    /// Builds a config from form input; `options` is a comma separated list
    /// and is only kept for select fields.
    pub fn from_form(model: &str, label: &str, kind: FieldKind, options: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let options = match kind {
            FieldKind::Select => {
                let parsed: Vec<FieldOption> = options
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(|o| FieldOption {
                        value: o.to_string(),
                        label: o.to_string(),
                    })
                    .collect();
                if parsed.is_empty() {
                    return None;
                }
                Some(parsed)
            }
            _ => None,
        };
        Some(Self {
            model: model.to_string(),
            label: label.to_string(),
            kind,
            options,
        })
    }
}
