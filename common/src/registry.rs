//! Static catalog of the connectors and resource models the dashboard offers.

use crate::model::connector::{Connector, Model, ModelField};

const CONNECTORS: &[Connector] = &[
    Connector {
        id: "hubspot",
        name: "HubSpot",
    },
    Connector {
        id: "salesforce",
        name: "Salesforce",
    },
    Connector {
        id: "pipedrive",
        name: "Pipedrive",
    },
    Connector {
        id: "zoho",
        name: "Zoho CRM",
    },
];

const CONTACT_FIELDS: &[ModelField] = &[
    ModelField {
        id: "firstName",
        name: "First name",
    },
    ModelField {
        id: "lastName",
        name: "Last name",
    },
    ModelField {
        id: "email",
        name: "Email",
    },
    ModelField {
        id: "phone",
        name: "Phone",
    },
    ModelField {
        id: "createdAt",
        name: "Created",
    },
];

const COMPANY_FIELDS: &[ModelField] = &[
    ModelField {
        id: "name",
        name: "Name",
    },
    ModelField {
        id: "domain",
        name: "Domain",
    },
    ModelField {
        id: "industry",
        name: "Industry",
    },
    ModelField {
        id: "employees",
        name: "Employees",
    },
];

const OPPORTUNITY_FIELDS: &[ModelField] = &[
    ModelField {
        id: "name",
        name: "Name",
    },
    ModelField {
        id: "amount",
        name: "Amount",
    },
    ModelField {
        id: "currency",
        name: "Currency",
    },
    ModelField {
        id: "stage",
        name: "Stage",
    },
    ModelField {
        id: "closeDate",
        name: "Close date",
    },
    ModelField {
        id: "won",
        name: "Won",
    },
    ModelField {
        id: "owner",
        name: "Owner",
    },
];

const MODELS: &[Model] = &[
    Model {
        id: "genericContact",
        name: "Contact",
        icon: "person",
        fields: CONTACT_FIELDS,
    },
    Model {
        id: "genericCompany",
        name: "Company",
        icon: "business",
        fields: COMPANY_FIELDS,
    },
    Model {
        id: "crmOpportunity",
        name: "Opportunity",
        icon: "paid",
        fields: OPPORTUNITY_FIELDS,
    },
];

pub fn connectors() -> &'static [Connector] {
    CONNECTORS
}

pub fn models() -> &'static [Model] {
    MODELS
}

pub fn connector(id: &str) -> Option<&'static Connector> {
    CONNECTORS.iter().find(|c| c.id == id)
}

pub fn model(id: &str) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.id == id)
}

/// Connector the dashboard lands on when none is selected.
pub fn default_connector() -> &'static Connector {
    &CONNECTORS[0]
}
