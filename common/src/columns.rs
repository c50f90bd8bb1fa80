//! Column descriptors of a resource table and the value-type inference that
//! upgrades them as batches of records arrive.
//!
//! Every column starts as `Text`, except select fields whose options come from
//! field metadata. After each fetched batch the first non-null value seen in a
//! text column decides its type: booleans, numbers, then ISO dates. Once a
//! column has been upgraded its type is locked for the rest of the page view,
//! so a later batch carrying a differently typed value cannot flip the widget
//! of rows that are already on screen.

use crate::model::column::{ColumnDescriptor, ColumnType};
use crate::model::connector::Model;
use crate::model::field::FieldMeta;
use crate::model::record::{FieldValue, ResourceRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Columns of `model`, in model order, followed by the requested remote fields.
///
/// Remote fields take their header and options from `metadata` when it knows
/// them; a remote id that duplicates a model field is ignored.
pub fn columns_for(model: &Model, remote_fields: &[String], metadata: &[FieldMeta]) -> Vec<ColumnDescriptor> {
    let mut columns: Vec<ColumnDescriptor> = model
        .fields
        .iter()
        .map(|f| ColumnDescriptor::text(f.id, f.name))
        .collect();

    for remote_id in remote_fields {
        if columns.iter().any(|c| &c.field_id == remote_id) {
            continue;
        }
        let column = match metadata.iter().find(|m| &m.id == remote_id) {
            Some(meta) => column_from_meta(meta),
            None => ColumnDescriptor::text(remote_id, remote_id),
        };
        columns.push(column);
    }

    apply_metadata(&mut columns, metadata);
    columns
}

/// Select fields get their option list from metadata; other kinds are left to
/// inference.
pub fn apply_metadata(columns: &mut [ColumnDescriptor], metadata: &[FieldMeta]) {
    for column in columns.iter_mut() {
        let Some(meta) = metadata.iter().find(|m| m.id == column.field_id) else {
            continue;
        };
        if let Some(options) = meta.options.as_ref().filter(|o| !o.is_empty()) {
            column.column_type = ColumnType::Select;
            column.options = options.clone();
        }
    }
}

fn column_from_meta(meta: &FieldMeta) -> ColumnDescriptor {
    let mut column = ColumnDescriptor::text(&meta.id, &meta.label);
    match meta.options.as_ref().filter(|o| !o.is_empty()) {
        Some(options) => {
            column.column_type = ColumnType::Select;
            column.options = options.clone();
        }
        None if meta.kind.column_type() != ColumnType::Select => {
            column.column_type = meta.kind.column_type();
        }
        None => {}
    }
    column
}

/// Infers a column type from a sequence of values; `None` when every value is
/// null or plain text.
pub fn infer_type<'a>(values: impl IntoIterator<Item = &'a FieldValue>) -> Option<ColumnType> {
    let first = values.into_iter().find(|v| !v.is_null())?;
    match first {
        FieldValue::Boolean(_) => Some(ColumnType::Boolean),
        FieldValue::Number(_) => Some(ColumnType::Number),
        FieldValue::Text(s) if parse_date(s).is_some() => Some(ColumnType::Date),
        _ => None,
    }
}

/// Runs inference over a freshly fetched batch.
pub fn observe_batch(columns: &mut [ColumnDescriptor], batch: &[ResourceRecord]) {
    for column in columns.iter_mut() {
        if column.column_type != ColumnType::Text {
            continue;
        }
        let values = batch.iter().filter_map(|r| r.value(&column.field_id));
        if let Some(inferred) = infer_type(values) {
            column.column_type = inferred;
        }
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS[.fff]` and plain
/// `YYYY-MM-DD` dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{FieldKind, FieldOption};
    use crate::registry;
    use pretty_assertions::assert_eq;

    fn contact() -> &'static Model {
        registry::model("genericContact").unwrap()
    }

    #[test]
    fn columns_follow_model_field_order() {
        for model in registry::models() {
            let columns = columns_for(model, &[], &[]);
            let ids: Vec<&str> = columns.iter().map(|c| c.field_id.as_str()).collect();
            let expected: Vec<&str> = model.field_ids().collect();
            assert_eq!(ids, expected);
            assert!(columns.iter().all(|c| c.column_type == ColumnType::Text));
        }
    }

    #[test]
    fn remote_fields_append_after_model_fields() {
        let meta = FieldMeta {
            id: "hs_tier".to_string(),
            label: "Tier".to_string(),
            model: "genericContact".to_string(),
            kind: FieldKind::Select,
            remote: true,
            options: Some(vec![FieldOption {
                value: "g".to_string(),
                label: "Gold".to_string(),
            }]),
        };
        let remote = vec!["hs_tier".to_string(), "email".to_string(), "hs_score".to_string()];
        let columns = columns_for(contact(), &remote, &[meta]);

        let tail: Vec<(&str, &str, ColumnType)> = columns[contact().fields.len()..]
            .iter()
            .map(|c| (c.field_id.as_str(), c.header.as_str(), c.column_type))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("hs_tier", "Tier", ColumnType::Select),
                ("hs_score", "hs_score", ColumnType::Text),
            ]
        );
    }

    #[test]
    fn inference_uses_first_non_null_value() {
        let values = [FieldValue::Null, FieldValue::Number(3.0), FieldValue::from("x")];
        assert_eq!(infer_type(values.iter()), Some(ColumnType::Number));
        assert_eq!(infer_type([FieldValue::Boolean(false)].iter()), Some(ColumnType::Boolean));
        assert_eq!(infer_type([FieldValue::from("2024-03-01")].iter()), Some(ColumnType::Date));
        assert_eq!(infer_type([FieldValue::from("Ada")].iter()), None);
        assert_eq!(infer_type([FieldValue::Null].iter()), None);
    }

    #[test]
    fn inferred_type_is_locked_after_first_batch() {
        let mut columns = columns_for(contact(), &[], &[]);
        let first = vec![ResourceRecord::new("r1").with_field("createdAt", "2024-01-05T10:00:00Z")];
        observe_batch(&mut columns, &first);
        let created = columns.iter().find(|c| c.field_id == "createdAt").unwrap();
        assert_eq!(created.column_type, ColumnType::Date);

        let second = vec![ResourceRecord::new("r2").with_field("createdAt", 12.0)];
        observe_batch(&mut columns, &second);
        let created = columns.iter().find(|c| c.field_id == "createdAt").unwrap();
        assert_eq!(created.column_type, ColumnType::Date);
    }

    #[test]
    fn text_columns_stay_open_until_a_typed_value_arrives() {
        let mut columns = columns_for(contact(), &[], &[]);
        observe_batch(&mut columns, &[ResourceRecord::new("r1").with_field("phone", "n/a")]);
        observe_batch(&mut columns, &[ResourceRecord::new("r2").with_field("phone", 5551234.0)]);
        let phone = columns.iter().find(|c| c.field_id == "phone").unwrap();
        assert_eq!(phone.column_type, ColumnType::Number);
    }

    #[test]
    fn date_parsing_is_strict() {
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2024-02-29T08:30:00.000Z").is_some());
        assert!(parse_date("2024-02-29T08:30:00").is_some());
        assert!(parse_date("1").is_none());
        assert!(parse_date("March").is_none());
    }
}
