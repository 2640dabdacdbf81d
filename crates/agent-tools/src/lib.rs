//! Tool management and execution framework
//!
//! This crate provides the surface an agent host uses to discover and call
//! tools (functions) that answer stock research questions.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition};
