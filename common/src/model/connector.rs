use serde::Serialize;

/// A CRM integration the dashboard can read and write resources through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connector {
    pub id: &'static str,
    pub name: &'static str,
}

/// One field of a resource model, in the order the table shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelField {
    pub id: &'static str,
    pub name: &'static str,
}

/// Schema of a resource type (Contact, Company, Opportunity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Model {
    pub id: &'static str,
    pub name: &'static str,
    /// Material icon name shown next to the model in the sidebar.
    pub icon: &'static str,
    pub fields: &'static [ModelField],
}

impl Model {
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.id)
    }
}
