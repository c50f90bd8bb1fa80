//! Server-rendered resource list: one page of `SERVER_PAGE_SIZE` records,
//! optionally filtered by `?q=`, without pagination or editing.

use super::layout::{document, escape_html, html_response, not_found};
use super::PageError;
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::cell::display_text;
use common::columns::{columns_for, observe_batch};
use common::model::column::ColumnDescriptor;
use common::model::record::ResourceRecord;
use common::nav::{resources_route, Location, RenderMode};
use common::requests::ListParams;
use common::table::SERVER_PAGE_SIZE;
use log::{info, warn};

pub(crate) async fn process(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let location = Location::parse(req.path(), req.query_string());
    match render(&location, &state).await {
        Ok(html) => html_response(StatusCode::OK, html),
        Err(e) => {
            warn!("resource page {} failed: {}", req.path(), e);
            not_found(&location)
        }
    }
}

async fn render(location: &Location, state: &AppState) -> Result<String, PageError> {
    let connector = location.connector.ok_or(PageError::UnknownConnector)?;
    let model = location.model.ok_or(PageError::UnknownModel)?;
    let token = state.create_session(connector.id, None).await?;

    let mut columns = columns_for(model, &location.remote_fields, &[]);
    let params = ListParams::new(columns.iter().map(|c| c.field_id.as_str()), SERVER_PAGE_SIZE)
        .with_search(location.search.as_deref().unwrap_or_default());
    let page = state.morph.list_resources(&token, model.id, &params).await?;
    observe_batch(&mut columns, &page.data);
    info!("rendered {} {} record(s) for {}", page.data.len(), model.id, connector.id);

    let action = resources_route(RenderMode::Server, connector.id, model.id, &[]);
    let remote = if location.remote_fields.is_empty() {
        String::new()
    } else {
        format!(
            r#"<input type="hidden" name="remoteFields" value="{}">"#,
            escape_html(&location.remote_fields.join(","))
        )
    };
    let main = format!(
        r#"<section class="resources">
<div class="toolbar">
<h1>{name}</h1>
<form class="search" method="get" action="{action}">{remote}<input type="search" name="q" placeholder="Search {name}" value="{q}"></form>
</div>
{table}
</section>"#,
        name = escape_html(model.name),
        action = escape_html(&action),
        remote = remote,
        q = escape_html(location.search.as_deref().unwrap_or_default()),
        table = render_table(&columns, &page.data),
    );

    Ok(document(&format!("{} · {}", model.name, connector.name), location, &main))
}

fn render_table(columns: &[ColumnDescriptor], rows: &[ResourceRecord]) -> String {
    let head: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape_html(&c.header)))
        .collect();

    let body: String = if rows.is_empty() {
        format!(
            r#"<tr><td class="empty" colspan="{}">No records found.</td></tr>"#,
            columns.len().max(1)
        )
    } else {
        rows.iter()
            .map(|row| {
                let cells: String = columns
                    .iter()
                    .map(|column| match row.value(&column.field_id) {
                        Some(value) => format!("<td>{}</td>", escape_html(&display_text(Some(value), column))),
                        None => format!(r#"<td class="placeholder">{}</td>"#, display_text(None, column)),
                    })
                    .collect();
                format!(r#"<tr data-id="{}">{}</tr>"#, escape_html(&row.id), cells)
            })
            .collect()
    };

    format!(
        r#"<table class="resource-table"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>"#,
        head, body
    )
}
