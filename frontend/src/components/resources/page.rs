//! Client-mode resource page: obtains a session for the connector, loads the
//! model's field metadata and then hosts the table and the fields panel.

use common::model::connector::{Connector, Model};
use common::model::field::FieldMeta;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::ResourceTable;
use crate::api;
use crate::components::fields::FieldsPanel;
use crate::helpers::toast_error;

#[derive(Properties, PartialEq, Clone)]
pub struct ClientResourcePageProps {
    pub connector: &'static Connector,
    pub model: &'static Model,
    #[prop_or_default]
    pub remote_fields: Vec<String>,
}

pub enum Session {
    Pending,
    Ready(AttrValue),
    Missing,
}

pub enum Msg {
    SessionStarted(String),
    SessionFailed(String),
    FieldsLoaded(Vec<FieldMeta>),
    FieldsFailed(String),
    FieldCreated(FieldMeta),
}

pub struct ClientResourcePage {
    session: Session,
    /// `None` until the metadata call returns; a failed call leaves it empty.
    fields: Option<Vec<FieldMeta>>,
}

impl Component for ClientResourcePage {
    type Message = Msg;
    type Properties = ClientResourcePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::Pending,
            fields: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionStarted(token) => {
                let link = ctx.link().clone();
                let model = ctx.props().model.id;
                let session_token = token.clone();
                spawn_local(async move {
                    match api::list_fields(&session_token, model).await {
                        Ok(fields) => link.send_message(Msg::FieldsLoaded(fields)),
                        Err(e) => link.send_message(Msg::FieldsFailed(e)),
                    }
                });
                self.session = Session::Ready(token.into());
            }
            Msg::SessionFailed(error) => {
                toast_error(&format!("Could not start a session: {}", error));
                self.session = Session::Missing;
            }
            Msg::FieldsLoaded(fields) => self.fields = Some(fields),
            Msg::FieldsFailed(error) => {
                gloo_console::warn!(format!("field metadata unavailable: {}", error));
                self.fields = Some(Vec::new());
            }
            Msg::FieldCreated(field) => {
                self.fields.get_or_insert_with(Vec::new).push(field);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match (&self.session, &self.fields) {
            (Session::Pending, _) | (Session::Ready(_), None) => html! {
                <section class="empty-state">
                    <p>{"Connecting..."}</p>
                </section>
            },
            (Session::Missing, _) => html! {
                <ResourceTable connector={props.connector} model={props.model} />
            },
            (Session::Ready(token), Some(fields)) => html! {
                <>
                    <h1 class="page-title">{props.model.name}</h1>
                    <ResourceTable
                        connector={props.connector}
                        model={props.model}
                        session_token={token.clone()}
                        remote_fields={props.remote_fields.clone()}
                        field_meta={fields.clone()}
                    />
                    <FieldsPanel
                        connector={props.connector}
                        model={props.model}
                        session_token={token.clone()}
                        remote_fields={props.remote_fields.clone()}
                        fields={fields.clone()}
                        on_created={ctx.link().callback(Msg::FieldCreated)}
                    />
                </>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let connector = ctx.props().connector.id;
            spawn_local(async move {
                match api::start_session(connector).await {
                    Ok(token) if !token.is_empty() => link.send_message(Msg::SessionStarted(token)),
                    Ok(_) => link.send_message(Msg::SessionFailed("empty session token".to_string())),
                    Err(e) => link.send_message(Msg::SessionFailed(e)),
                }
            });
        }
    }
}
