//! Logger

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Logging before the logger is initialized.
///
/// Messages are buffered and re-emitted once [`init`] installs
/// the subscriber.
pub mod pre_init {
	// Imports
	use std::sync::Mutex;

	/// All buffered messages
	static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Buffers a debug message to emit after initialization
	pub fn debug(message: String) {
		// Note: If the lock is poisoned, some other initialization
		//       already panicked, so losing the message is fine.
		if let Ok(mut messages) = MESSAGES.lock() {
			messages.push(message);
		}
	}

	/// Takes all buffered messages
	pub(super) fn take_messages() -> Vec<String> {
		match MESSAGES.lock() {
			Ok(mut messages) => std::mem::take(&mut *messages),
			Err(_) => Vec::new(),
		}
	}
}

/// Initializes the logger.
///
/// Logs to stderr, filtered by `RUST_LOG`, and, if `log_file` is given,
/// verbosely to it, filtered by `RUST_LOG_FILE`.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	// Stderr layer
	let stderr_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(stderr_filter);

	// File layer, if requested
	let file_layer = log_file.and_then(|path| {
		let file_res = fs::OpenOptions::new()
			.create(true)
			.append(log_file_append)
			.write(true)
			.truncate(!log_file_append)
			.open(path);
		let file = match file_res {
			Ok(file) => file,
			Err(err) => {
				eprintln!("Unable to open log file {path:?}: {err}");
				return None;
			},
		};

		let file_filter = EnvFilter::builder()
			.with_env_var("RUST_LOG_FILE")
			.with_default_directive(LevelFilter::DEBUG.into())
			.from_env_lossy();
		let file_layer = tracing_subscriber::fmt::layer()
			.with_writer(Mutex::new(file))
			.with_ansi(false)
			.with_filter(file_filter);

		Some(file_layer)
	});

	tracing_subscriber::registry()
		.with(stderr_layer)
		.with(file_layer)
		.init();

	// Then emit all buffered messages
	for message in self::pre_init::take_messages() {
		tracing::debug!("{message}");
	}
}
