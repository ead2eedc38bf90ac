//! Full-screen sheet used for the detail and document dialogs.
//!
//! The sheet is always mounted; it is shown by adding the `show` class to
//! its root and hidden by removing it.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Fired by the close button.
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub title: String,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <h3>{ props.title.clone() }</h3>
                        <button class="btn close" onclick={props.on_close.clone()}>{ "Close" }</button>
                    </div>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}

fn set_shown(sheet_ref: &NodeRef, shown: bool) {
    let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() else {
        return;
    };
    let classes = sheet.class_list();
    let result = if shown {
        classes.add_1(SHOW_CLASS)
    } else {
        classes.remove_1(SHOW_CLASS)
    };
    if let Err(err) = result {
        log::warn!("could not toggle sheet {}: {:?}", sheet.id(), err);
    }
}

pub fn open_top_sheet(sheet_ref: &NodeRef) {
    set_shown(sheet_ref, true);
}

pub fn close_top_sheet(sheet_ref: &NodeRef) {
    set_shown(sheet_ref, false);
}
