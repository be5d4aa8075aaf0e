//! # Pet Editor
//!
//! Loads the model behind the pet clinic "edit pet" form: pet type options,
//! owner details and the pet itself, fetched concurrently from the backend.

pub mod action;
pub mod api;
pub mod config;
pub mod consts;
pub mod errors;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
