//! Simulator invocation

// Imports
use {
	crate::Config,
	anyhow::Context,
	std::{path::PathBuf, process},
};

/// A page-replacement simulator driven by the sweep.
///
/// The sweep orchestrator is generic over this, so tests can drive
/// a stub instead of the external program.
pub trait Simulator {
	/// Runs the simulator once for `config` and returns its full standard output
	fn run(&self, config: &Config) -> Result<String, anyhow::Error>;
}

/// External simulator invoked as a child process.
///
/// The program is invoked as `<program> <pages> <frames> <method> <workload>`
/// and must exit with status 0.
#[derive(Clone, Debug)]
pub struct ProcessSimulator {
	/// Program path
	program: PathBuf,
}

impl ProcessSimulator {
	/// Creates a simulator client invoking `program`
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
		}
	}
}

impl Simulator for ProcessSimulator {
	fn run(&self, config: &Config) -> Result<String, anyhow::Error> {
		let output = process::Command::new(&self.program)
			.arg(config.page_count.to_string())
			.arg(config.frame_count.to_string())
			.arg(config.method.as_str())
			.arg(config.workload.as_str())
			.output()
			.with_context(|| format!("Unable to launch simulator {:?}", self.program))?;
		tracing::debug!(%config, status = %output.status, "Simulator exited");

		anyhow::ensure!(
			output.status.success(),
			"Simulator exited with {} for configuration `{config}`",
			output.status
		);

		String::from_utf8(output.stdout).context("Simulator output wasn't valid utf-8")
	}
}
