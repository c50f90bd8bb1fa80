//! HTML shell of the server-rendered pages: sidebar, topbar and document frame.
//!
//! The markup and class names match the browser app's shell so both render
//! modes share `styles.css`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::nav::{switch_connector_route, Location};
use common::registry;

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text and attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub fn document(title: &str, location: &Location, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Morph demo</title>
<link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons">
<link rel="stylesheet" href="/styles.css">
</head>
<body>
<div class="shell">
{sidebar}
<div class="content">
{topbar}
<main class="page">
{main}
</main>
</div>
</div>
</body>
</html>"#,
        title = escape_html(title),
        sidebar = sidebar(location),
        topbar = topbar(location),
        main = main,
    )
}

fn sidebar(location: &Location) -> String {
    let selected = location.connector.map(|c| c.id);
    let mut options = String::new();
    if selected.is_none() {
        options.push_str(r#"<option value="" selected disabled>Select a connector</option>"#);
    }
    for connector in registry::connectors() {
        let route = switch_connector_route(connector.id).unwrap_or_default();
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape_html(&route),
            if selected == Some(connector.id) { " selected" } else { "" },
            escape_html(connector.name)
        ));
    }

    let links: String = location
        .model_links()
        .iter()
        .map(|link| {
            format!(
                r#"<a class="nav-link{}" href="{}"><i class="material-icons">{}</i><span>{}</span></a>"#,
                if link.active { " active" } else { "" },
                escape_html(&link.href),
                link.model.icon,
                escape_html(link.model.name)
            )
        })
        .collect();

    format!(
        r#"<aside class="sidebar">
<div class="brand">Morph demo</div>
<select class="connector-select" onchange="if (this.value) window.location.href = this.value">{}</select>
<nav class="nav">{}</nav>
</aside>"#,
        options, links
    )
}

fn topbar(location: &Location) -> String {
    let crumbs: Vec<String> = location
        .breadcrumbs()
        .iter()
        .map(|crumb| match &crumb.href {
            Some(href) => format!(
                r#"<a href="{}">{}</a>"#,
                escape_html(href),
                escape_html(&crumb.label)
            ),
            None => format!("<span>{}</span>", escape_html(&crumb.label)),
        })
        .collect();

    let toggle = match (location.toggle_mode_route(), location.mode) {
        (Some(route), Some(mode)) => format!(
            r#"<div class="mode-toggle"><span class="mode active">{}</span><a class="mode" href="{}">{}</a></div>"#,
            mode.label(),
            escape_html(&route),
            mode.toggled().label()
        ),
        _ => String::new(),
    };

    format!(
        r#"<header class="topbar"><nav class="breadcrumb">{}</nav>{}</header>"#,
        crumbs.join(r#"<span class="separator">/</span>"#),
        toggle
    )
}

pub fn not_found(location: &Location) -> HttpResponse {
    let main = r#"<section class="empty-state"><h1>Not found</h1><p>This page does not exist or could not be loaded.</p></section>"#;
    html_response(StatusCode::NOT_FOUND, document("Not found", location, main))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn toggle_only_on_resource_pages() {
        let list = Location::parse("/server/hubspot/resources/genericContact", "");
        assert!(topbar(&list).contains(r#"href="/client/hubspot/resources/genericContact""#));

        let connection = Location::parse("/server/hubspot/connection", "");
        assert!(!topbar(&connection).contains("mode-toggle"));
    }

    #[test]
    fn sidebar_selects_active_connector() {
        let location = Location::parse("/server/salesforce/connection", "");
        let html = sidebar(&location);
        assert!(html.contains(r#"<option value="/server/salesforce/connection" selected>Salesforce</option>"#));
        assert!(html.contains(r#"href="/server/salesforce/resources/crmOpportunity""#));
    }
}
