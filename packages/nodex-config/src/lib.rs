mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Registry, Search, SearchCache, Service, Weights};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return invalid("service.log_level", "must be non-empty.");
	}

	let search = &cfg.search;

	if search.default_limit == 0 {
		return invalid("search.default_limit", "must be greater than zero.");
	}
	if search.max_limit < search.default_limit {
		return invalid("search.max_limit", "must not be below search.default_limit.");
	}
	if search.cache.max_entries == Some(0) {
		return invalid("search.cache.max_entries", "must be greater than zero when set.");
	}

	let Some(types) = cfg.registry.connection_types.as_ref() else { return Ok(()) };
	let mut seen = HashSet::new();

	for identifier in types {
		if identifier.trim().is_empty() {
			return invalid("registry.connection_types", "entries must be non-empty.");
		}
		if !seen.insert(identifier.as_str()) {
			return invalid(
				"registry.connection_types",
				format!("{identifier:?} is listed twice."),
			);
		}
	}

	Ok(())
}

fn invalid(field: &'static str, message: impl Into<String>) -> Result<()> {
	Err(Error::Validation { field, message: message.into() })
}

fn normalize(cfg: &mut Config) {
	if cfg.registry.connection_types.as_ref().map(|types| types.is_empty()).unwrap_or(false) {
		cfg.registry.connection_types = None;
	}
	if cfg.service.log_level.trim() != cfg.service.log_level {
		cfg.service.log_level = cfg.service.log_level.trim().to_string();
	}
}
