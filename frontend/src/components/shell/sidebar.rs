use super::ShellProps;
use crate::helpers::navigate;
use common::nav::switch_connector_route;
use common::registry;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub enum Msg {
    SelectConnector(String),
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = Msg;
    type Properties = ShellProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectConnector(id) => {
                if let Some(route) = switch_connector_route(&id) {
                    navigate(&route);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let location = &ctx.props().location;
        let selected = location.connector.map(|c| c.id);
        let onchange = ctx.link().callback(|e: Event| {
            Msg::SelectConnector(e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <aside class="sidebar">
                <div class="brand">{"Morph demo"}</div>
                <select class="connector-select" {onchange}>
                    {
                        if selected.is_none() {
                            html! { <option value="" selected=true disabled=true>{"Select a connector"}</option> }
                        } else {
                            html! {}
                        }
                    }
                    { for registry::connectors().iter().map(|c| html! {
                        <option value={c.id} selected={selected == Some(c.id)}>{c.name}</option>
                    }) }
                </select>
                <nav class="nav">
                    { for location.model_links().into_iter().map(|link| html! {
                        <a class={classes!("nav-link", link.active.then_some("active"))} href={link.href}>
                            <i class="material-icons">{link.model.icon}</i>
                            <span>{link.model.name}</span>
                        </a>
                    }) }
                </nav>
            </aside>
        }
    }
}
