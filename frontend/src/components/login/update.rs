use serde_json::{json, Value};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::auth::{LoginRole, LOGIN_FAILED};
use common::requests::LoginResponse;

use crate::helpers::{navigate, post_json, session_set, show_toast, ToastKind, ASSOCIATE_SESSION_KEY};

use super::messages::Msg;
use super::state::LoginPage;

/// Session entry holding the signed-in consumer and their token.
const CONSUMER_SESSION_KEY: &str = "consumer";

pub fn update(component: &mut LoginPage, ctx: &Context<LoginPage>, msg: Msg) -> bool {
    let config = &ctx.props().config;

    match msg {
        Msg::SelectRole(role) => {
            component.role = role;
            true
        }
        Msg::SetEmail(email) => {
            component.credentials.email = email;
            true
        }
        Msg::SetPassword(password) => {
            component.credentials.password = password;
            true
        }
        Msg::TogglePassword => {
            component.show_password = !component.show_password;
            true
        }
        Msg::QuickLogin(role) => {
            component.role = role;
            component.credentials = role.demo_credentials();
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let body = match serde_json::to_value(&component.credentials) {
                Ok(body) => body,
                Err(err) => {
                    log::error!("could not encode credentials: {}", err);
                    return false;
                }
            };
            component.submitting = true;

            let role = component.role;
            let url = role.endpoint().url(config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = post_json(&url, Some(&body)).await;
                link.send_message(Msg::Finished(role, result));
            });
            true
        }
        Msg::Finished(role, result) => {
            component.submitting = false;
            match result {
                Ok(payload) => {
                    log::info!("{} signed in", role);
                    remember(role, payload);
                    show_toast(role.success_message(), ToastKind::Success, config.toast_duration_ms);
                    navigate(&role.home());
                }
                Err(err) => {
                    log::warn!("{} login failed: {}", role, err);
                    show_toast(LOGIN_FAILED, ToastKind::Error, config.toast_duration_ms);
                }
            }
            true
        }
    }
}

/// Keeps what later pages need from a login answer.
fn remember(role: LoginRole, payload: Value) {
    match role {
        LoginRole::Consumer => {
            let response: LoginResponse = serde_json::from_value(payload).unwrap_or_default();
            session_set(
                CONSUMER_SESSION_KEY,
                &json!({ "data": response.data, "token": response.token }),
            );
        }
        LoginRole::Associate => {
            let associate = match payload.get("data") {
                Some(data) if !data.is_null() => data.clone(),
                _ => payload,
            };
            session_set(ASSOCIATE_SESSION_KEY, &associate);
        }
        LoginRole::Partner => {}
    }
}
