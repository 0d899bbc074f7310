use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use nodex_config::Config;
use nodex_domain::{ConnectionTypeRegistry, list_capability_connections};
use nodex_search::{NodeSearchEngine, SearchResult, format_results};

#[derive(Debug, Parser)]
#[command(
	version = nodex_cli::VERSION,
	rename_all = "kebab",
	styles = nodex_cli::styles(),
)]
pub struct Args {
	/// TOML config. Built-in defaults apply when omitted.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// JSON array of node descriptors.
	#[arg(long, short = 'n', value_name = "FILE", global = true)]
	pub catalog: Option<PathBuf>,
	/// Print results as JSON instead of tagged text blocks.
	#[arg(long, global = true)]
	pub json: bool,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Search by name, display name, description and aliases.
	Name {
		query: String,
		#[arg(long, short = 'l', value_name = "N")]
		limit: Option<usize>,
	},
	/// Search nodes that output a connection type.
	Connection {
		capability: String,
		#[arg(long, short = 'l', value_name = "N")]
		limit: Option<usize>,
		#[arg(long, short = 'f', value_name = "TEXT")]
		filter: Option<String>,
	},
	/// List the AI-capability connection types of the registry.
	Capabilities,
}

pub fn load_config(args: &Args) -> color_eyre::Result<Config> {
	match args.config.as_deref() {
		Some(path) => Ok(nodex_config::load(path)?),
		None => Ok(Config::default()),
	}
}

/// Installs the global stderr subscriber. Call once per process.
pub fn init_tracing(cfg: &Config) {
	let filter = EnvFilter::new(cfg.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Reads the catalog named by `args` and runs the command.
pub fn run(args: &Args, cfg: &Config) -> color_eyre::Result<String> {
	let catalog = match args.catalog.as_deref() {
		Some(path) => {
			let raw = fs::read_to_string(path)
				.wrap_err_with(|| format!("Failed to read catalog at {path:?}."))?;

			serde_json::from_str(&raw)
				.wrap_err_with(|| format!("Failed to parse catalog at {path:?}."))?
		},
		None => Value::Array(Vec::new()),
	};

	execute(cfg, &catalog, &args.command, args.json)
}

/// Runs one command against an in-memory catalog and renders the output.
pub fn execute(
	cfg: &Config,
	catalog: &Value,
	command: &Command,
	json: bool,
) -> color_eyre::Result<String> {
	let registry = registry(cfg);

	match command {
		Command::Capabilities => {
			let capabilities = list_capability_connections(&registry);

			if json {
				return Ok(serde_json::to_string_pretty(&capabilities)?);
			}

			Ok(capabilities.join("\n"))
		},
		Command::Name { query, limit } => {
			let engine = build_engine(cfg, catalog)?;
			let results = engine.search_by_name(query, limit.unwrap_or(engine.default_limit()));

			render(&results, json)
		},
		Command::Connection { capability, limit, filter } => {
			if !registry.contains(capability) {
				tracing::warn!(capability = %capability, "Connection type is not in the registry.");
			}

			let engine = build_engine(cfg, catalog)?;
			let results = engine.search_by_connection_type(
				capability,
				limit.unwrap_or(engine.default_limit()),
				filter.as_deref(),
			);

			render(&results, json)
		},
	}
}

fn registry(cfg: &Config) -> ConnectionTypeRegistry {
	cfg.registry.connection_types.clone().map(ConnectionTypeRegistry::new).unwrap_or_default()
}

fn build_engine(cfg: &Config, catalog: &Value) -> color_eyre::Result<NodeSearchEngine> {
	if catalog.as_array().is_some_and(|entries| entries.is_empty()) {
		tracing::warn!("Catalog is empty; every query will return no results.");
	}

	Ok(NodeSearchEngine::from_json(catalog, &cfg.search)?)
}

fn render(results: &[SearchResult], json: bool) -> color_eyre::Result<String> {
	if json {
		return Ok(serde_json::to_string_pretty(results)?);
	}

	Ok(format_results(results))
}
