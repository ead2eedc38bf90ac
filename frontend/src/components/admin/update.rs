use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::admin::{EntityKind, NormalizedRecordList};
use common::api::Endpoint;
use common::auth::{LOGOUT_FAILED, LOGOUT_SUCCEEDED};
use common::routes::Route;

use crate::helpers::{navigate, post_json, show_toast, ToastKind};
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

use super::load_listing;
use super::messages::Msg;
use super::state::AdminDashboard;

pub fn update(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    let config = &ctx.props().config;

    match msg {
        Msg::Reload => {
            for kind in EntityKind::ALL {
                if component.loading.insert(kind) {
                    load_listing(ctx, kind);
                }
            }
            true
        }
        Msg::Loaded(kind, result) => {
            component.loading.remove(&kind);
            match result {
                Ok(payload) => {
                    let list = NormalizedRecordList::from_payload(kind, &payload);
                    log::info!("{} {} loaded ({:?})", list.len(), kind, list.shape());
                    component.set_list(list);
                }
                Err(err) => {
                    log::error!("loading {} failed: {}", kind, err);
                    show_toast(
                        &format!("Could not load {}: {}", kind.label(), err),
                        ToastKind::Error,
                        config.toast_duration_ms,
                    );
                }
            }
            true
        }
        Msg::SetTab(kind) => {
            component.tab = kind;
            true
        }
        Msg::SetSearch(term) => {
            component.search = term;
            true
        }
        Msg::ToggleStats => {
            component.show_stats = !component.show_stats;
            true
        }
        Msg::SetViewMode(mode) => {
            component.view_mode = mode;
            true
        }
        Msg::OpenDetails(kind, record) => {
            component.selected = Some((kind, record));
            open_top_sheet(&component.details_ref);
            true
        }
        Msg::CloseDetails => {
            close_top_sheet(&component.details_ref);
            component.selected = None;
            true
        }
        Msg::ViewDocument(link) => {
            component.document = Some(link);
            component.document_loading = true;
            open_top_sheet(&component.viewer_ref);
            true
        }
        Msg::DocumentLoaded => {
            component.document_loading = false;
            true
        }
        Msg::CloseDocument => {
            close_top_sheet(&component.viewer_ref);
            component.document = None;
            component.document_loading = false;
            true
        }
        Msg::Logout => {
            if component.logging_out {
                return false;
            }
            component.logging_out = true;

            let url = Endpoint::AdminSignOut.url(config);
            let delay = config.logout_delay_ms;
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let outcome = post_json(&url, None).await.map(|_| ());
                link.send_message(Msg::LogoutFinished(outcome));
            });
            true
        }
        Msg::LogoutFinished(outcome) => match outcome {
            Ok(()) => {
                show_toast(LOGOUT_SUCCEEDED, ToastKind::Success, config.toast_duration_ms);
                let delay = config.redirect_delay_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    navigate(&Route::AdminLogin);
                });
                false
            }
            Err(err) => {
                log::warn!("sign-out failed: {}", err);
                show_toast(LOGOUT_FAILED, ToastKind::Error, config.toast_duration_ms);
                component.logging_out = false;
                true
            }
        },
    }
}
