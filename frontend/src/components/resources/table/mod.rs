//! Client-rendered resource table.
//!
//! Owns a `TableState` and drives it from Yew messages: the first page loads
//! once the component is mounted with a session, search input is debounced,
//! "Load more" appends the next cursor page, and cell edits are written
//! optimistically and reconciled when the update call returns.

use common::columns::columns_for;
use common::table::TableState;
use yew::prelude::*;

mod messages;
mod props;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResourceTableProps;

pub struct ResourceTable {
    pub table: TableState,
}

impl ResourceTable {
    fn fresh_state(props: &ResourceTableProps) -> TableState {
        let mut table = TableState::new(columns_for(props.model, &props.remote_fields, &props.field_meta));
        table.set_session(props.session_token.as_ref().map(|t| t.to_string()));
        table
    }
}

impl Component for ResourceTable {
    type Message = Msg;
    type Properties = ResourceTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            table: Self::fresh_state(ctx.props()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.session_token != old_props.session_token
            || props.model != old_props.model
            || props.remote_fields != old_props.remote_fields
        {
            self.table = Self::fresh_state(props);
            ctx.link().send_message(Msg::Reload);
        } else if props.field_meta != old_props.field_meta {
            self.table.apply_metadata(&props.field_meta);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Reload);
        }
    }
}
