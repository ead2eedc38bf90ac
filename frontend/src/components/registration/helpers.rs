//! Request plumbing for the registration page.

use gloo_net::http::Request;
use web_sys::{FormData, RequestCredentials};

use common::catalog::{ProviderCategory, SubstationCatalog};
use common::config::ClientConfig;
use common::form::{FieldPath, Part, SubmissionPayload};
use common::model::registration::{FarmStatus, LandOwnership, LoanStatus, RegulatoryStatus};

use crate::helpers::{failure_message, get_json};

/// Copies the payload parts into a browser `FormData`. The file part takes
/// its bytes from `document`.
pub fn to_form_data(
    payload: &SubmissionPayload,
    document: Option<&web_sys::File>,
) -> Result<FormData, String> {
    let form = FormData::new().map_err(|err| format!("{:?}", err))?;
    for part in payload.parts() {
        let appended = match part {
            Part::Text { name, value } => form.append_with_str(name, value),
            Part::File { name, attachment } => match document {
                Some(file) => form.append_with_blob_and_filename(name, file, &attachment.file_name),
                None => {
                    log::warn!("attachment {} has no file behind it", attachment.file_name);
                    Ok(())
                }
            },
        };
        appended.map_err(|err| format!("{:?}", err))?;
    }
    Ok(form)
}

pub async fn submit_registration(url: String, form: FormData) -> Result<(), String> {
    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(failure_message(response).await)
    }
}

pub async fn fetch_catalog(
    config: ClientConfig,
    category: ProviderCategory,
) -> Result<SubstationCatalog, String> {
    let payload = get_json(&category.endpoint().url(&config)).await?;
    SubstationCatalog::from_json(category, payload).map_err(|err| err.to_string())
}

/// `(value, label)` options of a select-backed field.
pub fn choice_options(path: FieldPath) -> Vec<(&'static str, &'static str)> {
    match path {
        FieldPath::LandOwnership => LandOwnership::CHOICES
            .iter()
            .map(|c| {
                (c.as_str(), match c {
                    LandOwnership::Own => "Own",
                    _ => "Lease",
                })
            })
            .collect(),
        FieldPath::StatusOfFarm => FarmStatus::CHOICES
            .iter()
            .map(|c| {
                (c.as_str(), match c {
                    FarmStatus::Farm => "Solar Farm",
                    _ => "Solar Park",
                })
            })
            .collect(),
        FieldPath::StatusOfLoan => LoanStatus::CHOICES
            .iter()
            .map(|c| {
                (c.as_str(), match c {
                    LoanStatus::SelfFunded => "Self Funded",
                    _ => "Bank Loan",
                })
            })
            .collect(),
        FieldPath::RegulatoryStatus => RegulatoryStatus::CHOICES
            .iter()
            .map(|c| {
                (c.as_str(), match c {
                    RegulatoryStatus::Approved => "Approved",
                    RegulatoryStatus::Pending => "Pending",
                    _ => "Rejected",
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}
