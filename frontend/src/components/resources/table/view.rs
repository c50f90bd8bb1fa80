use super::messages::Msg;
use super::ResourceTable;
use crate::components::resources::EditableCell;
use common::model::record::FieldValue;
use common::nav::connection_route;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn view(component: &ResourceTable, ctx: &Context<ResourceTable>) -> Html {
    let props = ctx.props();
    let table = &component.table;

    if !table.has_session() {
        return html! {
            <section class="empty-state blocking">
                <i class="material-icons">{"link_off"}</i>
                <h2>{"No active session"}</h2>
                <p>{format!("Connect {} before browsing {} records.", props.connector.name, props.model.name)}</p>
                <a class="button primary" href={connection_route(props.connector.id)}>{"Go to connection"}</a>
            </section>
        };
    }

    let link = ctx.link();
    let oninput = link.callback(|e: InputEvent| Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value()));

    html! {
        <div class="resource-table">
            <div class="toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder={format!("Search {}", props.model.name)}
                    value={table.search_raw().to_string()}
                    {oninput}
                />
                if table.is_loading() {
                    <span class="status">{"Loading..."}</span>
                }
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        { for table.columns().iter().map(|c| html! { <th key={c.field_id.clone()}>{ c.header.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows().iter().map(|row| {
                        let cells = table.columns().iter().map(|column| {
                            let record_id = row.id.clone();
                            let field_id = column.field_id.clone();
                            let on_commit = link.callback(move |value: FieldValue| Msg::CellCommitted {
                                record_id: record_id.clone(),
                                field_id: field_id.clone(),
                                value,
                            });
                            html! {
                                <EditableCell
                                    key={column.field_id.clone()}
                                    value={row.value(&column.field_id).cloned()}
                                    column={column.clone()}
                                    {on_commit}
                                />
                            }
                        });
                        html! { <tr key={row.id.clone()} data-id={row.id.clone()}>{ for cells }</tr> }
                    }) }
                    if table.rows().is_empty() && !table.is_loading() {
                        <tr>
                            <td class="empty" colspan={table.columns().len().to_string()}>{"No records found"}</td>
                        </tr>
                    }
                </tbody>
            </table>
            if table.has_more() {
                <div class="load-more">
                    <button
                        class="button"
                        disabled={table.is_loading_more()}
                        onclick={link.callback(|_| Msg::LoadMore)}
                    >
                        { if table.is_loading_more() { "Loading..." } else { "Load more" } }
                    </button>
                </div>
            }
        </div>
    }
}
