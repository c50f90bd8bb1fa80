use super::messages::Msg;
use super::EditableCell;
use common::cell::{display_text, PLACEHOLDER};
use common::model::column::ColumnType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn view(cell: &EditableCell, ctx: &Context<EditableCell>) -> Html {
    let props = ctx.props();
    let Some(draft) = cell.editor.draft() else {
        let text = display_text(props.value.as_ref(), &props.column);
        let placeholder = (text == PLACEHOLDER).then_some("placeholder");
        return html! {
            <td class={classes!("cell", placeholder)} onclick={ctx.link().callback(|_| Msg::BeginEdit)}>
                { text }
            </td>
        };
    };

    let link = ctx.link();
    let onkeydown = link.batch_callback(|e: KeyboardEvent| match e.key().as_str() {
        "Enter" => {
            e.prevent_default();
            Some(Msg::Commit)
        }
        "Escape" => Some(Msg::Cancel),
        _ => None,
    });

    let widget = match props.column.column_type {
        ColumnType::Text | ColumnType::Number => {
            let kind = if props.column.column_type == ColumnType::Number { "number" } else { "text" };
            html! {
                <input
                    ref={cell.input_ref.clone()}
                    class="cell-input"
                    type={kind}
                    value={draft.to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::Draft(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    onblur={link.callback(|_| Msg::Commit)}
                    {onkeydown}
                />
            }
        }
        ColumnType::Date => html! {
            <input
                ref={cell.input_ref.clone()}
                class="cell-input"
                type="date"
                value={draft.to_string()}
                onchange={link.callback(|e: Event| Msg::Select(e.target_unchecked_into::<HtmlInputElement>().value()))}
                onblur={link.callback(|_| Msg::Cancel)}
                {onkeydown}
            />
        },
        ColumnType::Boolean => html! {
            <select
                ref={cell.input_ref.clone()}
                class="cell-input"
                onchange={link.callback(|e: Event| Msg::Select(e.target_unchecked_into::<HtmlSelectElement>().value()))}
                onblur={link.callback(|_| Msg::Cancel)}
                {onkeydown}
            >
                <option value="true" selected={draft == "true"}>{"Yes"}</option>
                <option value="false" selected={draft != "true"}>{"No"}</option>
            </select>
        },
        ColumnType::Select => html! {
            <select
                ref={cell.input_ref.clone()}
                class="cell-input"
                onchange={link.callback(|e: Event| Msg::Select(e.target_unchecked_into::<HtmlSelectElement>().value()))}
                onblur={link.callback(|_| Msg::Cancel)}
                {onkeydown}
            >
                { for props.column.options.iter().map(|o| html! {
                    <option value={o.value.clone()} selected={o.value == draft}>{ o.label.clone() }</option>
                }) }
            </select>
        },
    };

    html! { <td class="cell editing">{ widget }</td> }
}
