use serde_json::Value;

pub enum Msg {
    LoadProfile,
    ProfileLoaded(Result<Value, String>),
    AddRow,
    RemoveRow(usize),
    SetName(usize, String),
    SetLoad(usize, String),
    Submit,
    Submitted(Result<(), String>),
    Logout,
    LoggedOut(Result<(), String>),
}
