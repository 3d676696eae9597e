//! Terminal client for a pet store inventory REST API.

pub mod client;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod pet;
pub mod ui;
