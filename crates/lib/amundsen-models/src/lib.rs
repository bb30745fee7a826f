//! Table references and normalized catalog shapes for amundsen-mcp.
//!
//! This crate defines the agent-facing data model produced by the metadata
//! normalizer, plus the wire constants shared by the client and the tools.

pub mod models;
pub mod schema;

pub use models::*;
