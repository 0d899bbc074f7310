use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cannot read nodex config {path:?}.")]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Cannot parse nodex config {path:?}: {source}")]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error("Invalid {field}: {message}")]
	Validation { field: &'static str, message: String },
}
