use yew::html::Scope;
use yew::prelude::*;

use common::admin::DocumentKind;

use crate::components::admin::{AdminDashboard, Msg};
use crate::tops_sheet::TopSheet;

/// Viewer sheet for the selected document. Images are shown directly; other
/// kinds are framed through the configured document viewer.
pub fn document_dialog(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link: &Scope<AdminDashboard> = ctx.link();
    let viewer_base = &ctx.props().config.document_viewer_base;
    let on_close = link.callback(|_| Msg::CloseDocument);

    let body = match &component.document {
        None => html! { <div class="empty">{ "No document selected" }</div> },
        Some(document) => match document.viewer_url(viewer_base) {
            Err(err) => {
                log::error!("bad document viewer base {}: {}", viewer_base, err);
                html! { <div class="empty">{ "This document cannot be displayed" }</div> }
            }
            Ok(src) if document.kind == DocumentKind::Image => html! {
                <img
                    class="document-image"
                    {src}
                    draggable="false"
                    onload={link.callback(|_: Event| Msg::DocumentLoaded)}
                />
            },
            Ok(src) => {
                let frame_style = if component.document_loading {
                    "width:100%;height:100%;border:none;visibility:hidden;"
                } else {
                    "width:100%;height:100%;border:none;visibility:visible;"
                };
                html! {
                    <div class="document-frame">
                        <iframe
                            {src}
                            style={frame_style}
                            onload={link.callback(|_: Event| Msg::DocumentLoaded)}
                        />
                        {
                            if component.document_loading {
                                html! {
                                    <div class="document-loading">
                                        <div class="spinner"></div>
                                        <div>{ "Loading document..." }</div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }
        },
    };

    html! {
        <TopSheet node_ref={component.viewer_ref.clone()} {on_close} title="Document">
            { body }
        </TopSheet>
    }
}
