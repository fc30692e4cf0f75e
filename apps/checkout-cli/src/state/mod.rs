//! # CLI State
//!
//! Read-only state assembled once at startup and handed to every command.

pub mod config;

pub use config::AppConfig;
