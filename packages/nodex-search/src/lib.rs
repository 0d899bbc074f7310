pub mod cache;
pub mod catalog;
pub mod descriptor;
pub mod engine;
pub mod format;
pub mod scoring;

mod error;

pub use catalog::{ProcessedRecord, parse_catalog, preprocess};
pub use descriptor::{Codex, NO_DESCRIPTION, NodeDescriptor, SearchResult};
pub use engine::{EngineStats, NodeSearchEngine};
pub use error::{Error, Result};
pub use format::{format_result, format_results};
pub use scoring::ScoreError;

pub use nodex_domain::{
	ConnectionTypeRegistry, is_capability_connection, list_capability_connections, normalize,
};
