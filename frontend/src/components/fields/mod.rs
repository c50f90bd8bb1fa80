//! Field metadata panel shown under the client table.
//!
//! Remote fields can be added to or removed from the table; the choice lives
//! in the `remoteFields` query parameter so it survives reloads and the
//! server/client toggle. New custom fields are created through the API.

use common::model::connector::{Connector, Model};
use common::model::field::{CreateFieldConfig, FieldKind, FieldMeta};
use common::nav::{resources_route, RenderMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{show_toast, toast_error, ToastKind};

#[derive(Properties, PartialEq, Clone)]
pub struct FieldsPanelProps {
    pub connector: &'static Connector,
    pub model: &'static Model,
    pub session_token: AttrValue,
    #[prop_or_default]
    pub remote_fields: Vec<String>,
    pub fields: Vec<FieldMeta>,
    pub on_created: Callback<FieldMeta>,
}

pub enum Msg {
    Label(String),
    Kind(String),
    Options(String),
    Create,
    Created(FieldMeta),
    Failed(String),
}

pub struct FieldsPanel {
    label: String,
    kind: FieldKind,
    options: String,
    saving: bool,
}

impl FieldsPanel {
    fn toggle_href(&self, props: &FieldsPanelProps, field_id: &str) -> String {
        let mut remote = props.remote_fields.clone();
        if let Some(pos) = remote.iter().position(|f| f == field_id) {
            remote.remove(pos);
        } else {
            remote.push(field_id.to_string());
        }
        resources_route(RenderMode::Client, props.connector.id, props.model.id, &remote)
    }
}

impl Component for FieldsPanel {
    type Message = Msg;
    type Properties = FieldsPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            label: String::new(),
            kind: FieldKind::Text,
            options: String::new(),
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Label(label) => self.label = label,
            Msg::Kind(kind) => self.kind = FieldKind::parse(&kind).unwrap_or(FieldKind::Text),
            Msg::Options(options) => self.options = options,
            Msg::Create => {
                if self.saving {
                    return false;
                }
                let props = ctx.props();
                let Some(config) = CreateFieldConfig::from_form(props.model.id, &self.label, self.kind, &self.options)
                else {
                    toast_error("A label is required, and select fields need at least one option");
                    return false;
                };
                self.saving = true;
                let token = props.session_token.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::create_field(&token, &config).await {
                        Ok(field) => link.send_message(Msg::Created(field)),
                        Err(e) => link.send_message(Msg::Failed(e)),
                    }
                });
            }
            Msg::Created(field) => {
                self.saving = false;
                self.label.clear();
                self.options.clear();
                show_toast(&format!("Field \"{}\" created", field.label), ToastKind::Info);
                ctx.props().on_created.emit(field);
            }
            Msg::Failed(error) => {
                self.saving = false;
                toast_error(&format!("Could not create field: {}", error));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let remote: Vec<&FieldMeta> = props.fields.iter().filter(|f| f.remote).collect();

        html! {
            <section class="fields-panel">
                <h2>{"Remote fields"}</h2>
                if remote.is_empty() {
                    <p class="muted">{"No remote fields reported for this model."}</p>
                } else {
                    <ul class="field-list">
                        { for remote.iter().map(|field| {
                            let shown = props.remote_fields.contains(&field.id);
                            html! {
                                <li key={field.id.clone()}>
                                    <span class="field-label">{ field.label.clone() }</span>
                                    <span class="field-kind">{ field.kind.as_str() }</span>
                                    <a class="button small" href={self.toggle_href(props, &field.id)}>
                                        { if shown { "Hide" } else { "Show" } }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                }
                <form
                    class="field-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Create
                    })}
                >
                    <input
                        type="text"
                        placeholder="Field label"
                        value={self.label.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Label(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                    <select onchange={link.callback(|e: Event| Msg::Kind(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                        { for FieldKind::ALL.iter().map(|k| html! {
                            <option value={k.as_str()} selected={*k == self.kind}>{ k.as_str() }</option>
                        }) }
                    </select>
                    if self.kind == FieldKind::Select {
                        <input
                            type="text"
                            placeholder="Options, comma separated"
                            value={self.options.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Options(e.target_unchecked_into::<HtmlInputElement>().value()))}
                        />
                    }
                    <button class="button primary" type="submit" disabled={self.saving}>{"Create field"}</button>
                </form>
            </section>
        }
    }
}
