pub mod admin;
pub mod landing;
pub mod login;
pub mod onboarding;
pub mod registration;
