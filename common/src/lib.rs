//! Shared model and logic for the NewRa Grids onboarding client.
//!
//! Everything in this crate is target independent: the `frontend` crate
//! drives it from Yew components compiled to wasm, the `backend` crate only
//! uses the configuration types, and all of it is tested natively.

pub mod admin;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod onboarding;
pub mod requests;
pub mod routes;
