//! Core types for the stock research agent workspace
//!
//! This crate defines the error type every tool reports through, so that an
//! agent host can treat all tool failures uniformly.

pub mod error;

pub use error::{Error, Result};
