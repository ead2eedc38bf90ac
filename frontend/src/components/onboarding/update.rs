use yew::platform::spawn_local;
use yew::prelude::*;

use common::api::Endpoint;
use common::auth::LOGOUT_FAILED;
use common::error::OnboardError;
use common::onboarding::{ONBOARD_FAILED, ONBOARD_SUCCEEDED};
use common::routes::Route;

use crate::helpers::{
    get_json, navigate, post_json, session_remove, show_toast, ToastKind, ASSOCIATE_SESSION_KEY,
};

use super::messages::Msg;
use super::state::OnboardingPage;

pub fn update(component: &mut OnboardingPage, ctx: &Context<OnboardingPage>, msg: Msg) -> bool {
    let config = &ctx.props().config;
    let toast = |message: &str, kind: ToastKind| show_toast(message, kind, config.toast_duration_ms);

    match msg {
        Msg::LoadProfile => {
            let Some(id) = component.associate_id() else {
                log::info!("no associate in session; profile not loaded");
                return false;
            };
            component.loading_profile = true;
            let url = Endpoint::AssociateProfile(id).url(config);
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ProfileLoaded(get_json(&url).await));
            });
            true
        }
        Msg::ProfileLoaded(result) => {
            component.loading_profile = false;
            match result {
                Ok(profile) => component.profile = Some(profile),
                Err(err) => log::error!("associate profile could not be loaded: {}", err),
            }
            true
        }
        Msg::AddRow => {
            component.roster.add_row();
            true
        }
        Msg::RemoveRow(index) => component.roster.remove_row(index),
        Msg::SetName(index, value) => {
            component.roster.set_name(index, &value);
            true
        }
        Msg::SetLoad(index, value) => {
            component.roster.set_load(index, &value);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let Some(id) = component.associate_id() else {
                toast(ONBOARD_FAILED, ToastKind::Error);
                return false;
            };
            let body = match component.roster.to_request().and_then(|request| {
                serde_json::to_value(request).map_err(OnboardError::from)
            }) {
                Ok(body) => body,
                Err(err) => {
                    toast(&err.to_string(), ToastKind::Error);
                    return false;
                }
            };
            component.submitting = true;

            let url = Endpoint::AssociateOnboard(id).url(config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = post_json(&url, Some(&body)).await.map(|_| ());
                link.send_message(Msg::Submitted(outcome));
            });
            true
        }
        Msg::Submitted(outcome) => {
            component.submitting = false;
            match outcome {
                Ok(()) => {
                    toast(ONBOARD_SUCCEEDED, ToastKind::Success);
                    component.roster.reset();
                    navigate(&Route::AssociateProfile);
                }
                Err(err) => {
                    log::warn!("onboarding failed: {}", err);
                    let message = if err.is_empty() { ONBOARD_FAILED } else { err.as_str() };
                    toast(message, ToastKind::Error);
                }
            }
            true
        }
        Msg::Logout => {
            if component.logging_out {
                return false;
            }
            component.logging_out = true;
            let url = Endpoint::AssociateLogout.url(config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = post_json(&url, None).await.map(|_| ());
                link.send_message(Msg::LoggedOut(outcome));
            });
            true
        }
        Msg::LoggedOut(outcome) => {
            component.logging_out = false;
            match outcome {
                Ok(()) => {
                    session_remove(ASSOCIATE_SESSION_KEY);
                    navigate(&Route::ChooseAccountType);
                }
                Err(err) => {
                    log::warn!("associate logout failed: {}", err);
                    toast(LOGOUT_FAILED, ToastKind::Error);
                }
            }
            true
        }
    }
}
