//! Inline-editable table cell.
//!
//! Display mode shows the formatted value; a click switches to an input widget
//! chosen by the column type. The parsed value is handed to `on_commit` and
//! the table takes it from there.

use common::cell::CellEditor;
use yew::prelude::*;

mod messages;
mod props;
mod view;

use crate::helpers::toast_error;
pub use messages::Msg;
pub use props::EditableCellProps;

pub struct EditableCell {
    pub editor: CellEditor,
    pub input_ref: NodeRef,
    focus_pending: bool,
}

impl Component for EditableCell {
    type Message = Msg;
    type Properties = EditableCellProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            editor: CellEditor::new(),
            input_ref: NodeRef::default(),
            focus_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        let outcome = match msg {
            Msg::BeginEdit => {
                self.editor.begin_edit(props.value.as_ref(), &props.column);
                self.focus_pending = true;
                return true;
            }
            Msg::Draft(text) => {
                self.editor.set_draft(text);
                return true;
            }
            Msg::Cancel => {
                self.editor.cancel();
                return true;
            }
            Msg::Commit => self.editor.commit(&props.column),
            Msg::Select(raw) => self.editor.select(raw, &props.column),
        };
        match outcome {
            Ok(Some(value)) => {
                if props.value.as_ref() != Some(&value) {
                    props.on_commit.emit(value);
                }
            }
            Ok(None) => {}
            Err(e) => toast_error(&e.to_string()),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.focus_pending) {
            if let Some(input) = self.input_ref.cast::<web_sys::HtmlElement>() {
                input.focus().ok();
            }
        }
    }
}
