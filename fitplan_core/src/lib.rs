#![forbid(unsafe_code)]

//! Core domain model and computations for fitplan.
//!
//! This crate provides:
//! - Domain types (profile, meals, sessions, statistics)
//! - Energy targets and the five-meal nutrition plan
//! - Training statistics over session history
//! - Exercise catalog and food reference table
//! - Local persistence (profile, session log)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod rounding;
pub mod profile;
pub mod energy;
pub mod meal_plan;
pub mod foods;
pub mod nutrition;
pub mod catalog;
pub mod session;
pub mod store;
pub mod history;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use foods::food_database;
pub use nutrition::build_plan;
pub use store::{JsonlSessionStore, SessionStore};
pub use history::load_completed_history;
pub use session::derive_total_volume;
pub use stats::{aggregate, aggregate_with, week_start};
