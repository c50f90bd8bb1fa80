use crate::components::resources::ClientResourcePage;
use crate::components::shell::{Sidebar, Topbar};
use crate::helpers::current_location;
use common::nav::{connection_route, Location, PageKind, RenderMode};
use common::registry;
use yew::{html, Component, Context, Html};

/// Root component: the navigation shell around the page selected by the URL.
///
/// The app is only served for `/client/...` paths; server-rendered routes are
/// answered by the backend, so anything else here links back to them.
pub struct App {
    location: Location,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            location: current_location(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="shell">
                <Sidebar location={self.location.clone()} />
                <div class="content">
                    <Topbar location={self.location.clone()} />
                    <main class="page">{ self.page() }</main>
                </div>
            </div>
        }
    }
}

impl App {
    fn page(&self) -> Html {
        let location = &self.location;
        match (location.mode, location.page, location.connector, location.model) {
            (Some(RenderMode::Client), PageKind::Resources, Some(connector), Some(model)) => html! {
                <ClientResourcePage
                    connector={connector}
                    model={model}
                    remote_fields={location.remote_fields.clone()}
                />
            },
            (_, PageKind::Resources, Some(connector), None) => html! {
                <section class="empty-state">
                    <h1>{"Not found"}</h1>
                    <p>{"This resource model does not exist."}</p>
                    <a class="button" href={connection_route(connector.id)}>{"Back to "}{connector.name}</a>
                </section>
            },
            (_, _, Some(connector), _) => html! {
                <section class="empty-state">
                    <h1>{connector.name}</h1>
                    <p>{"Manage the connection or pick a resource from the sidebar."}</p>
                    <a class="button primary" href={connection_route(connector.id)}>{"Connection settings"}</a>
                </section>
            },
            _ => {
                let fallback = registry::default_connector();
                html! {
                    <section class="empty-state">
                        <h1>{"Morph demo"}</h1>
                        <p>{"Select a connector to get started."}</p>
                        <a class="button primary" href={connection_route(fallback.id)}>{fallback.name}</a>
                    </section>
                }
            }
        }
    }
}
