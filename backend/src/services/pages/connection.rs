use super::layout::{document, escape_html, html_response, not_found};
use super::PageError;
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::nav::{resources_route, Location, RenderMode};
use common::registry;
use log::warn;

pub(crate) async fn process(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let location = Location::parse(req.path(), req.query_string());
    match render(&location, &state).await {
        Ok(html) => html_response(StatusCode::OK, html),
        Err(e) => {
            warn!("connection page {} failed: {}", req.path(), e);
            not_found(&location)
        }
    }
}

async fn render(location: &Location, state: &AppState) -> Result<String, PageError> {
    let connector = location.connector.ok_or(PageError::UnknownConnector)?;
    let token = state.create_session(connector.id, None).await?;

    let connect_href = reqwest::Url::parse_with_params(&state.config.connect_url, &[("sessionToken", token.as_str())])
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{}?sessionToken={}", state.config.connect_url, token));

    let models: String = registry::models()
        .iter()
        .map(|model| {
            format!(
                r#"<li><i class="material-icons">{icon}</i><span>{name}</span><a href="{server}">Server</a><a href="{client}">Client</a></li>"#,
                icon = model.icon,
                name = escape_html(model.name),
                server = escape_html(&resources_route(RenderMode::Server, connector.id, model.id, &[])),
                client = escape_html(&resources_route(RenderMode::Client, connector.id, model.id, &[])),
            )
        })
        .collect();

    let main = format!(
        r#"<section class="connection">
<h1>Connect {name}</h1>
<p>Authorize the demo to read and write {name} records on behalf of <code>{owner}</code>.</p>
<a class="button primary" href="{connect}" target="_blank" rel="noopener">Connect {name}</a>
</section>
<section class="models">
<h2>Resources</h2>
<ul class="model-list">{models}</ul>
</section>"#,
        name = escape_html(connector.name),
        owner = escape_html(&state.config.owner_id),
        connect = escape_html(&connect_href),
        models = models,
    );

    Ok(document(&format!("{} connection", connector.name), location, &main))
}

#[cfg(test)]
mod tests {
    use crate::morph::fake::{FakeMorph, FAKE_TOKEN};
    use crate::services::{self, testing};
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn renders_connect_link_with_session() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/server/pipedrive/connection").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Connect Pipedrive"));
        assert!(body.contains(&format!("sessionToken={}", FAKE_TOKEN)));
        assert!(body.contains(r#"href="/client/pipedrive/resources/genericContact""#));
    }

    #[actix_web::test]
    async fn session_failure_is_not_found() {
        let fake = FakeMorph {
            fail_session: true,
            ..FakeMorph::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(fake)))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/server/pipedrive/connection").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn unknown_connector_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/server/acme/connection").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
