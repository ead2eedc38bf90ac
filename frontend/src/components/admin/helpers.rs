//! Rendering helpers for the dashboard: the HTML detail visitor and number
//! formatting for the statistics panel.

use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use common::admin::render::{NULL_PLACEHOLDER, VIEW_DOCUMENT};
use common::admin::{DetailVisitor, DocumentLink};

/// Renders a detail tree as nested key/value blocks. Document links become
/// buttons that open the viewer.
pub struct HtmlRenderer {
    pub on_view: Callback<DocumentLink>,
}

impl DetailVisitor for HtmlRenderer {
    type Output = Html;

    fn visit_null(&mut self) -> Html {
        html! { <span class="null">{ NULL_PLACEHOLDER }</span> }
    }

    fn visit_text(&mut self, text: &str) -> Html {
        html! { <span class="value">{ text.to_string() }</span> }
    }

    fn visit_document(&mut self, link: &DocumentLink) -> Html {
        let link = link.clone();
        let onclick = self.on_view.reform(move |_: MouseEvent| link.clone());
        html! { <button class="btn link" type="button" {onclick}>{ VIEW_DOCUMENT }</button> }
    }

    fn visit_object(&mut self, fields: Vec<(&str, Html)>) -> Html {
        html! {
            <div class="kv-block">
                { for fields.into_iter().map(|(key, value)| entry(key.to_string(), value)) }
            </div>
        }
    }

    fn visit_list(&mut self, items: Vec<Html>) -> Html {
        html! {
            <div class="kv-block">
                { for items.into_iter().enumerate().map(|(index, value)| entry(index.to_string(), value)) }
            </div>
        }
    }
}

fn entry(key: String, value: Html) -> Html {
    html! {
        <div class="kv">
            <span class="key">{ format!("{}:", key) }</span>{ " " }{ value }
        </div>
    }
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en_IN)
}

pub fn format_capacity(mw: f64) -> String {
    let whole = mw.trunc() as u64;
    let fraction = ((mw.fract() * 100.0).round() as u64).min(99);
    format!("{}.{:02} MW", whole.to_formatted_string(&Locale::en_IN), fraction)
}
