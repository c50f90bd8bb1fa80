//! URL-derived navigation state shared by the server-rendered shell and the
//! browser app.
//!
//! Paths look like `/{mode}/{connector}/connection` or
//! `/{mode}/{connector}/resources/{model}`, where mode is `server` or
//! `client`. Unknown connectors and models resolve to no selection.

use crate::model::connector::{Connector, Model};
use crate::registry;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Server,
    Client,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Server => "server",
            RenderMode::Client => "client",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Server => "Server",
            RenderMode::Client => "Client",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "server" => Some(RenderMode::Server),
            "client" => Some(RenderMode::Client),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            RenderMode::Server => RenderMode::Client,
            RenderMode::Client => RenderMode::Server,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Connection,
    Resources,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub mode: Option<RenderMode>,
    pub connector: Option<&'static Connector>,
    pub model: Option<&'static Model>,
    pub page: PageKind,
    /// Extra remote field ids requested through `?remoteFields=a,b`.
    pub remote_fields: Vec<String>,
    /// `?q=` search term of the server-rendered list.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelLink {
    pub model: &'static Model,
    pub href: String,
    pub active: bool,
}

impl Location {
    pub fn parse(path: &str, query: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut location = Location {
            mode: None,
            connector: None,
            model: None,
            page: PageKind::Home,
            remote_fields: Vec::new(),
            search: None,
        };

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "remoteFields" => {
                    location.remote_fields = value
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "q" if !value.trim().is_empty() => location.search = Some(value.trim().to_string()),
                _ => {}
            }
        }

        let Some(mode_idx) = segments.iter().position(|s| RenderMode::parse(s).is_some()) else {
            return location;
        };
        location.mode = RenderMode::parse(segments[mode_idx]);

        let mut rest = segments[mode_idx + 1..].iter();
        location.connector = rest.next().and_then(|id| registry::connector(id));
        if location.connector.is_none() {
            return location;
        }
        match rest.next() {
            Some(&"connection") => location.page = PageKind::Connection,
            Some(&"resources") => {
                location.page = PageKind::Resources;
                location.model = rest.next().and_then(|id| registry::model(id));
            }
            _ => {}
        }
        location
    }

    /// The same model in the other render mode; only offered on resource lists.
    pub fn toggle_mode_route(&self) -> Option<String> {
        if self.page != PageKind::Resources {
            return None;
        }
        let (mode, connector, model) = (self.mode?, self.connector?, self.model?);
        Some(resources_route(mode.toggled(), connector.id, model.id, &self.remote_fields))
    }

    /// Sidebar entries for the active connector, in the current render mode.
    pub fn model_links(&self) -> Vec<ModelLink> {
        let Some(connector) = self.connector else {
            return Vec::new();
        };
        let mode = self.mode.unwrap_or(RenderMode::Server);
        registry::models()
            .iter()
            .map(|model| ModelLink {
                model,
                href: resources_route(mode, connector.id, model.id, &[]),
                active: self.page == PageKind::Resources && self.model.map(|m| m.id) == Some(model.id),
            })
            .collect()
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let Some(connector) = self.connector else {
            return vec![Crumb {
                label: "Dashboard".to_string(),
                href: None,
            }];
        };
        let mut crumbs = vec![Crumb {
            label: connector.name.to_string(),
            href: Some(connection_route(connector.id)),
        }];
        match (self.page, self.model) {
            (PageKind::Connection, _) => crumbs.push(Crumb {
                label: "Connection".to_string(),
                href: None,
            }),
            (PageKind::Resources, Some(model)) => crumbs.push(Crumb {
                label: model.name.to_string(),
                href: None,
            }),
            _ => {}
        }
        crumbs
    }
}

pub fn connection_route(connector_id: &str) -> String {
    format!("/server/{}/connection", connector_id)
}

pub fn resources_route(mode: RenderMode, connector_id: &str, model_id: &str, remote_fields: &[String]) -> String {
    let path = format!("/{}/{}/resources/{}", mode.as_str(), connector_id, model_id);
    if remote_fields.is_empty() {
        return path;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("remoteFields", &remote_fields.join(","))
        .finish();
    format!("{}?{}", path, query)
}

/// Where the connector selector leads. Unknown ids lead nowhere.
pub fn switch_connector_route(connector_id: &str) -> Option<String> {
    registry::connector(connector_id).map(|c| connection_route(c.id))
}
