use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Install a stderr logger with colored level names.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	let colors = ColoredLevelConfig::new()
		.error(Color::Red)
		.warn(Color::Yellow)
		.info(Color::Green)
		.debug(Color::Blue)
		.trace(Color::Magenta);

	fern::Dispatch::new()
		.format(move |out, message, record| {
			out.finish(format_args!("[{} {}] {}", colors.color(record.level()), record.target(), message))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
}
