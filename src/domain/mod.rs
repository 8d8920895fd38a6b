// Domain module - Error and configuration models
pub mod config;
pub mod error;
