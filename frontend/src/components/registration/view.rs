//! View of the registration page: contact details, project site, capacity,
//! substation lookup, land and finance status, timeline and the land
//! document upload.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::catalog::ProviderCategory;
use common::form::FieldPath;

use super::helpers::choice_options;
use super::messages::Msg;
use super::state::{DraftField, PartnerRegistration};

type Link = Scope<PartnerRegistration>;

pub fn view(component: &PartnerRegistration, ctx: &Context<PartnerRegistration>) -> Html {
    let link = ctx.link();
    let submitting = component.session.is_submitting();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="page registration">
            <h1>{ "Energy Partner Registration" }</h1>
            <form class="form" {onsubmit} novalidate={true}>
                <section class="form-section">
                    <h2>{ "Contact details" }</h2>
                    { text_input(component, link, FieldPath::Name, "Full name *", "text") }
                    { text_input(component, link, FieldPath::Email, "Email", "email") }
                    { text_input(component, link, FieldPath::Phone, "Mobile number *", "tel") }
                    { text_input(component, link, FieldPath::Address, "Address", "text") }
                    { text_input(component, link, FieldPath::Password, "Password *", "password") }
                </section>

                <section class="form-section">
                    <h2>{ "Project" }</h2>
                    { text_input(component, link, FieldPath::ProjectName, "Project name *", "text") }
                    { location_picker(component, link) }
                    { text_input(component, link, FieldPath::LocationAddress, "Site address", "text") }
                    { text_input(component, link, FieldPath::LocationTaluka, "Taluka", "text") }
                    { text_input(component, link, FieldPath::LocationDistrict, "District", "text") }
                    { text_input(component, link, FieldPath::LocationState, "State", "text") }
                    { text_input(component, link, FieldPath::LocationLat, "Latitude", "text") }
                    { text_input(component, link, FieldPath::LocationLng, "Longitude", "text") }
                </section>

                <section class="form-section">
                    <h2>{ "Capacity (MW)" }</h2>
                    { text_input(component, link, FieldPath::CapacityAc, "AC capacity *", "text") }
                    { text_input(component, link, FieldPath::CapacityDc, "DC capacity", "text") }
                </section>

                <section class="form-section">
                    <h2>{ "Substation" }</h2>
                    { substation_cascade(component, link) }
                    { text_input(component, link, FieldPath::DistanceFromSubstation, "Distance from substation (km)", "text") }
                </section>

                <section class="form-section">
                    <h2>{ "Land & status" }</h2>
                    { select_input(component, link, FieldPath::LandOwnership, "Land ownership") }
                    { document_upload(component, link) }
                    { select_input(component, link, FieldPath::StatusOfFarm, "Status of farm") }
                    { select_input(component, link, FieldPath::StatusOfLoan, "Status of loan") }
                    { select_input(component, link, FieldPath::RegulatoryStatus, "Regulatory status") }
                    { text_input(component, link, FieldPath::TariffExpected, "Tariff expected (₹/kWh)", "text") }
                </section>

                <section class="form-section">
                    <h2>{ "Expected commissioning timeline" }</h2>
                    { text_input(component, link, FieldPath::EpcWorkStartDate, "EPC work start (DD/MM/YYYY)", "text") }
                    { text_input(component, link, FieldPath::InjectionDate, "Injection (DD/MM/YYYY)", "text") }
                    { text_input(component, link, FieldPath::CommercialOperationsDate, "Commercial operations (DD/MM/YYYY)", "text") }
                </section>

                <button class="btn primary" type="submit" disabled={submitting}>
                    { if submitting { "Submitting..." } else { "Submit registration" } }
                </button>
            </form>
        </div>
    }
}

fn field_error(component: &PartnerRegistration, path: FieldPath) -> Html {
    match component.session.errors().get(path.as_str()) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn text_input(
    component: &PartnerRegistration,
    link: &Link,
    path: FieldPath,
    label: &str,
    input_type: &'static str,
) -> Html {
    let value = component.session.record().field(path);
    let invalid = component.session.errors().contains(path.as_str());
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(path, input.value())
    });

    html! {
        <label class={classes!("field", invalid.then_some("invalid"))}>
            <span>{ label }</span>
            <input type={input_type} name={path.as_str()} {value} {oninput} />
            { field_error(component, path) }
        </label>
    }
}

fn select_input(component: &PartnerRegistration, link: &Link, path: FieldPath, label: &str) -> Html {
    let current = component.session.record().field(path);
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Edit(path, select.value())
    });

    html! {
        <label class="field">
            <span>{ label }</span>
            <select name={path.as_str()} {onchange}>
                <option value="" selected={current.is_empty()}>{ "Select" }</option>
                { for choice_options(path).into_iter().map(|(value, text)| html! {
                    <option {value} selected={current == value}>{ text }</option>
                }) }
            </select>
            { field_error(component, path) }
        </label>
    }
}

fn options(values: Vec<String>, selected: &str) -> Html {
    values
        .into_iter()
        .map(|value| {
            let is_selected = value == selected;
            html! { <option value={value.clone()} selected={is_selected}>{ value }</option> }
        })
        .collect()
}

fn substation_cascade(component: &PartnerRegistration, link: &Link) -> Html {
    let cascade = component.session.cascade();
    let selection = cascade.selection();
    let category = cascade.category();
    let loading = category.is_some() && cascade.catalog().is_none();

    let on_category = link.callback(|e: Event| {
        Msg::SelectCategory(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let on_district = link.callback(|e: Event| {
        Msg::SelectDistrict(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let on_taluka = link.callback(|e: Event| {
        Msg::SelectTaluka(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let on_substation = link.callback(|e: Event| {
        Msg::SelectSubstation(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="cascade">
            <label class="field">
                <span>{ "Company category" }</span>
                <select onchange={on_category}>
                    <option value="" selected={category.is_none()}>{ "Select category" }</option>
                    { for ProviderCategory::ALL.iter().map(|c| html! {
                        <option value={c.as_str()} selected={category == Some(*c)}>{ c.as_str() }</option>
                    }) }
                </select>
            </label>
            {
                if loading {
                    html! { <p class="hint">{ "Loading substations..." }</p> }
                } else {
                    html! {}
                }
            }
            <label class="field">
                <span>{ "District" }</span>
                <select onchange={on_district} disabled={cascade.catalog().is_none()}>
                    <option value="" selected={selection.district.is_empty()}>{ "Select district" }</option>
                    { options(cascade.districts(), &selection.district) }
                </select>
            </label>
            {
                if category.is_some_and(ProviderCategory::has_talukas) {
                    html! {
                        <label class="field">
                            <span>{ "Taluka" }</span>
                            <select onchange={on_taluka} disabled={selection.district.is_empty()}>
                                <option value="" selected={selection.taluka.is_empty()}>{ "Select taluka" }</option>
                                { options(cascade.talukas(), &selection.taluka) }
                            </select>
                        </label>
                    }
                } else {
                    html! {}
                }
            }
            <label class="field">
                <span>{ "Substation" }</span>
                <select onchange={on_substation}>
                    <option value="" selected={selection.substation.is_empty()}>{ "Select substation" }</option>
                    { options(cascade.substations(), &selection.substation) }
                </select>
            </label>
        </div>
    }
}

fn draft_input(component: &PartnerRegistration, link: &Link, field: DraftField, placeholder: &'static str) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::EditDraft(field, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    html! {
        <input type="text" {placeholder} value={component.draft.get(field).to_string()} {oninput} />
    }
}

fn location_picker(component: &PartnerRegistration, link: &Link) -> Html {
    let saved = component.session.locations();
    html! {
        <div class="location-picker">
            <div class="location-draft">
                { draft_input(component, link, DraftField::Address, "Address") }
                { draft_input(component, link, DraftField::Taluka, "Taluka") }
                { draft_input(component, link, DraftField::District, "District") }
                { draft_input(component, link, DraftField::State, "State") }
                { draft_input(component, link, DraftField::Lat, "Latitude") }
                { draft_input(component, link, DraftField::Lng, "Longitude") }
                <button class="btn" type="button" onclick={link.callback(|_| Msg::SaveLocation)}>
                    { "Save location" }
                </button>
            </div>
            {
                if saved.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="saved-locations">
                            { for saved.iter().enumerate().map(|(index, location)| html! {
                                <li>
                                    { format!("{}. {}, {}, {}", index + 1, location.address, location.taluka, location.district) }
                                    { if index == 0 { html! { <span class="badge">{ "used for the project" }</span> } } else { html! {} } }
                                </li>
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn document_upload(component: &PartnerRegistration, link: &Link) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });

    html! {
        <div class="field">
            <span>{ "Land document" }</span>
            <input
                type="file"
                accept=".pdf,.jpg,.jpeg,.png"
                ref={component.file_input_ref.clone()}
                {onchange}
            />
            {
                match &component.session.record().land_document {
                    Some(attachment) => html! {
                        <div class="attachment">
                            <span>{ format!("{} ({} KB)", attachment.file_name, attachment.size / 1024) }</span>
                            <button class="btn link" type="button" onclick={link.callback(|_| Msg::RemoveFile)}>
                                { "Remove" }
                            </button>
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
