use yew::prelude::*;

use common::admin::display::{
    display_name, file_document, file_label, files, format_mobile, role_label, text_or,
    NOT_AVAILABLE,
};
use common::admin::{DetailNode, EntityKind};

use crate::components::admin::helpers::HtmlRenderer;
use crate::components::admin::{AdminDashboard, Msg};
use crate::tops_sheet::TopSheet;

/// Detail sheet for the selected record: a short header, every field of the
/// record as a nested tree and, for consumers, their uploaded files.
pub fn details_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();
    let on_close = link.callback(|_| Msg::CloseDetails);

    let body = match &component.selected {
        None => html! {},
        Some((kind, record)) => {
            let mut renderer = HtmlRenderer {
                on_view: link.callback(Msg::ViewDocument),
            };
            let tree = DetailNode::build(record).accept(&mut renderer);

            let files_section = if *kind == EntityKind::Consumers {
                let cards = files(record).iter().enumerate().map(|(index, file)| {
                    let view = match file_document(file) {
                        Some(document) => {
                            let onclick = link.callback(move |_: MouseEvent| {
                                Msg::ViewDocument(document.clone())
                            });
                            html! { <button class="btn link" type="button" {onclick}>{ "View" }</button> }
                        }
                        None => html! { <span class="muted">{ NOT_AVAILABLE }</span> },
                    };
                    html! {
                        <div class="file-card" key={index}>
                            <div class="file-type">{ format!("{} {}", file_label(file), index + 1) }</div>
                            <div class="file-name">{ format!("Type: .{}", text_or(file, "fileType", NOT_AVAILABLE)) }</div>
                            <div class="muted">{ format!("Uploaded: {}", uploaded_on(file)) }</div>
                            { view }
                        </div>
                    }
                });
                html! {
                    <section class="details-files">
                        <h4>{ format!("Files ({})", files(record).len()) }</h4>
                        <div class="file-cards">{ for cards }</div>
                    </section>
                }
            } else {
                html! {}
            };

            html! {
                <>
                    <section class="details-header">
                        <h4>{ display_name(*kind, record) }</h4>
                        <div class="muted">{ role_label(*kind, record) }</div>
                        <div>{ text_or(record, "email", NOT_AVAILABLE) }</div>
                        <div>{ format_mobile(record) }</div>
                    </section>
                    { files_section }
                    <section class="details-tree">{ tree }</section>
                </>
            }
        }
    };

    html! {
        <TopSheet node_ref={component.details_ref.clone()} {on_close} title="Details">
            { body }
        </TopSheet>
    }
}

/// Date part of an ISO timestamp; empty when absent.
fn uploaded_on(file: &serde_json::Value) -> String {
    let stamp = text_or(file, "uploadedAt", "");
    stamp.split('T').next().unwrap_or_default().to_string()
}
