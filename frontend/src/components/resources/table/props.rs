use common::model::connector::{Connector, Model};
use common::model::field::FieldMeta;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceTableProps {
    pub connector: &'static Connector,
    pub model: &'static Model,
    /// `None` renders the blocking no-session message and fetches nothing.
    #[prop_or_default]
    pub session_token: Option<AttrValue>,
    /// Remote fields appended after the model's own columns.
    #[prop_or_default]
    pub remote_fields: Vec<String>,
    /// Field metadata; select fields take their options from it.
    #[prop_or_default]
    pub field_meta: Vec<FieldMeta>,
}
