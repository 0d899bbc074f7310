use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Help and error colors shared by the nodex binaries.
pub fn styles() -> Styles {
	let accent = AnsiColor::Cyan.on_default();

	Styles::styled()
		.header(accent | Effects::BOLD | Effects::UNDERLINE)
		.usage(accent | Effects::BOLD)
		.literal(AnsiColor::Magenta.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default() | Effects::BOLD)
		.invalid(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.valid(AnsiColor::Green.on_default())
}
