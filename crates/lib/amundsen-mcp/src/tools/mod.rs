//! MCP tool modules.
//!
//! Tools are grouped by domain: table metadata lookups and contextual help.

pub mod table;
mod context;
