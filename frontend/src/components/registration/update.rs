//! Update function of the registration page.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::ProviderCategory;
use common::api::Endpoint;
use common::error::{FormError, SubmitError};
use common::model::attachment::Attachment;

use crate::helpers::{show_toast, ToastKind};

use super::helpers::{fetch_catalog, submit_registration, to_form_data};
use super::messages::Msg;
use super::state::{LocationDraft, PartnerRegistration};

pub const SUBMITTED: &str = "Registration submitted successfully!";
pub const FIX_ERRORS: &str = "Please fix the errors in the form";

pub fn update(
    component: &mut PartnerRegistration,
    ctx: &Context<PartnerRegistration>,
    msg: Msg,
) -> bool {
    let config = &ctx.props().config;
    let toast = |message: &str, kind: ToastKind| show_toast(message, kind, config.toast_duration_ms);

    match msg {
        Msg::Edit(path, value) => {
            match component.session.update_field(path.as_str(), &value) {
                Ok(()) => {}
                Err(FormError::Rejected { path, reason }) => {
                    log::debug!("kept previous {}: {}", path, reason);
                }
                Err(err) => log::warn!("{}", err),
            }
            // Re-render either way so a rejected edit snaps back.
            true
        }
        Msg::SelectCategory(raw) => {
            let category = raw.parse::<ProviderCategory>().ok();
            if component.session.select_category(category) {
                if let Some(category) = category {
                    let link = ctx.link().clone();
                    let config = config.clone();
                    spawn_local(async move {
                        let catalog = fetch_catalog(config, category).await;
                        link.send_message(Msg::CatalogLoaded(category, catalog));
                    });
                }
            }
            true
        }
        Msg::CatalogLoaded(category, result) => match result {
            Ok(catalog) => component.session.load_catalog(catalog),
            Err(err) if !component.session.cascade().is_current(category) => {
                log::debug!("ignoring failed {} catalog fetch: {}", category, err);
                false
            }
            Err(err) => {
                log::error!("{} substations could not be loaded: {}", category, err);
                toast(&format!("Could not load {} substations", category), ToastKind::Error);
                false
            }
        },
        Msg::SelectDistrict(district) => {
            component.session.select_district(&district);
            true
        }
        Msg::SelectTaluka(taluka) => {
            component.session.select_taluka(&taluka);
            true
        }
        Msg::SelectSubstation(substation) => {
            component.session.select_substation(&substation);
            true
        }
        Msg::FileSelected(file) => {
            let attachment = Attachment::new(file.name(), file.type_(), file.size() as u64);
            component.session.attach_document(attachment);
            component.document = Some(file);
            true
        }
        Msg::RemoveFile => {
            component.session.remove_document();
            component.document = None;
            component.clear_file_input();
            true
        }
        Msg::EditDraft(field, value) => {
            component.draft.set(field, value);
            true
        }
        Msg::SaveLocation => {
            if component.draft.is_blank() {
                toast("Enter an address or district first", ToastKind::Info);
                return false;
            }
            component.session.add_location(component.draft.to_saved());
            component.draft = LocationDraft::default();
            true
        }
        Msg::Submit => {
            let payload = match component.session.begin_submit() {
                Ok(payload) => payload,
                Err(SubmitError::InFlight) => return false,
                Err(SubmitError::Invalid(_)) => {
                    toast(FIX_ERRORS, ToastKind::Error);
                    return true;
                }
                Err(err) => {
                    log::error!("{}", err);
                    toast(&err.to_string(), ToastKind::Error);
                    return true;
                }
            };

            let form = match to_form_data(&payload, component.document.as_ref()) {
                Ok(form) => form,
                Err(err) => {
                    ctx.link().send_message(Msg::SubmitFinished(Err(err)));
                    return true;
                }
            };

            let url = Endpoint::RegisterPartner.url(config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = submit_registration(url, form).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            match component.session.finish_submit(outcome) {
                Ok(()) => {
                    component.document = None;
                    component.draft = LocationDraft::default();
                    component.clear_file_input();
                    toast(SUBMITTED, ToastKind::Success);
                }
                Err(err) => toast(&err.to_string(), ToastKind::Error),
            }
            true
        }
    }
}
