//! Core catalog access for amundsen-mcp.
//!
//! This crate owns the catalog client and its HTTP transport, the pure
//! normalizers that reduce raw catalog payloads to agent-sized shapes, and the
//! control plane that composes the two for each tool call.

pub mod client;
pub mod control;
pub mod error;
pub mod normalize;
pub mod outcome;
pub mod transport;

pub use client::CatalogClient;
pub use control::CatalogControlPlane;
pub use error::CatalogError;
pub use outcome::{EmptyReason, Outcome};
pub use transport::{CatalogTransport, HttpTransport};
