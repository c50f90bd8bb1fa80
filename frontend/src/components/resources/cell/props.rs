use common::model::column::ColumnDescriptor;
use common::model::record::FieldValue;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditableCellProps {
    /// Current value of the field; `None` when the record does not carry it.
    pub value: Option<FieldValue>,
    pub column: ColumnDescriptor,
    /// Receives the parsed value when an edit is committed with a changed value.
    pub on_commit: Callback<FieldValue>,
}
