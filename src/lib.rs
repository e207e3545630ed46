//! # tabula-env
//!
//! Serves client-facing table settings from the environment and provides the
//! value escaping used when building record filter formulas.

pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{escape_value, RawValue};
pub use routes::create_app;
