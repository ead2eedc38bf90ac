use common::admin::{DocumentLink, EntityKind};
use serde_json::Value;

use super::state::ViewMode;

pub enum Msg {
    Reload,
    Loaded(EntityKind, Result<Value, String>),
    SetTab(EntityKind),
    SetSearch(String),
    ToggleStats,
    SetViewMode(ViewMode),
    OpenDetails(EntityKind, Value),
    CloseDetails,
    ViewDocument(DocumentLink),
    DocumentLoaded,
    CloseDocument,
    Logout,
    LogoutFinished(Result<(), String>),
}
