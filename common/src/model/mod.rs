#[macro_use]
mod choice;

pub mod attachment;
pub mod location;
pub mod registration;
