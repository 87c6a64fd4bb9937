//! Core domain + application logic for lookbot (Tokopedia fashion search bot).
//!
//! This crate is intentionally framework-agnostic. Telegram / Gemini live
//! behind ports (traits) implemented in adapter crates.

pub mod analysis;
pub mod chunker;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatter;
pub mod logging;
pub mod lookbook;
pub mod messaging;
pub mod ports;
pub mod tokopedia;

pub use errors::{Error, Result};
