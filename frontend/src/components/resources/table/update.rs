//! Message handling for the resource table. Every remote call runs in
//! `spawn_local` and reports back with a message; `TableState` decides what a
//! result still means once it arrives.

use common::debounce::SEARCH_DEBOUNCE_MS;
use common::table::ListFetch;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::ResourceTable;
use crate::api;
use crate::helpers::toast_error;

pub fn update(component: &mut ResourceTable, ctx: &Context<ResourceTable>, msg: Msg) -> bool {
    let table = &mut component.table;
    match msg {
        Msg::Reload => {
            if let Some(fetch) = table.initial_load() {
                spawn_fetch(component, ctx, fetch);
            }
            true
        }
        Msg::SearchInput(raw) => {
            let ticket = table.search_input(raw);
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                link.send_message(Msg::SearchSettled(ticket));
            });
            true
        }
        Msg::SearchSettled(ticket) => match table.search_settled(ticket) {
            Some(fetch) => {
                spawn_fetch(component, ctx, fetch);
                true
            }
            None => false,
        },
        Msg::LoadMore => match table.load_more() {
            Some(fetch) => {
                spawn_fetch(component, ctx, fetch);
                true
            }
            None => false,
        },
        Msg::PageLoaded { generation, page } => table.apply_page(generation, page),
        Msg::PageFailed { generation, error } => {
            if table.apply_list_failure(generation) {
                toast_error(&format!("Failed to load records: {}", error));
                return true;
            }
            false
        }
        Msg::CellCommitted {
            record_id,
            field_id,
            value,
        } => {
            let Some(change) = table.update_cell(&record_id, &field_id, value) else {
                return false;
            };
            let Some(token) = table.session_token().map(str::to_string) else {
                return true;
            };
            let model = ctx.props().model.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::update_resource(&token, model, &change.record_id, &change.body()).await {
                    Ok(response) => link.send_message(Msg::UpdateSucceeded {
                        record_id: change.record_id,
                        record: response.data,
                    }),
                    Err(e) => link.send_message(Msg::UpdateFailed(e)),
                }
            });
            true
        }
        Msg::UpdateSucceeded { record_id, record } => {
            table.apply_update_success(&record_id, record);
            true
        }
        Msg::UpdateFailed(error) => {
            toast_error(&format!("Update failed: {}", error));
            if let Some(fetch) = table.apply_update_failure() {
                spawn_fetch(component, ctx, fetch);
            }
            true
        }
    }
}

fn spawn_fetch(component: &ResourceTable, ctx: &Context<ResourceTable>, fetch: ListFetch) {
    let Some(token) = component.table.session_token().map(str::to_string) else {
        return;
    };
    let model = ctx.props().model.id;
    let link = ctx.link().clone();
    spawn_local(async move {
        let ListFetch { generation, params, .. } = fetch;
        match api::list_resources(&token, model, &params).await {
            Ok(page) => link.send_message(Msg::PageLoaded { generation, page }),
            Err(error) => link.send_message(Msg::PageFailed { generation, error }),
        }
    });
}
