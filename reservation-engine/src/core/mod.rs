//! Core configuration

pub mod config;

pub use config::{Config, RestaurantConfig, default_tables};
