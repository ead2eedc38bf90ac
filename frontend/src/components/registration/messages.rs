use common::catalog::{ProviderCategory, SubstationCatalog};
use common::form::FieldPath;

use super::state::DraftField;

pub enum Msg {
    Edit(FieldPath, String),
    SelectCategory(String),
    CatalogLoaded(ProviderCategory, Result<SubstationCatalog, String>),
    SelectDistrict(String),
    SelectTaluka(String),
    SelectSubstation(String),
    FileSelected(web_sys::File),
    RemoveFile,
    EditDraft(DraftField, String),
    SaveLocation,
    Submit,
    SubmitFinished(Result<(), String>),
}
