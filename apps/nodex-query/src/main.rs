// crates.io
use clap::Parser;
// self
use nodex_query::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();
	let cfg = nodex_query::load_config(&args)?;

	nodex_query::init_tracing(&cfg);

	let output = nodex_query::run(&args, &cfg)?;

	println!("{output}");

	Ok(())
}
