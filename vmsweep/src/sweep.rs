//! Sweep orchestration

// Imports
use {
	crate::{record::RunRecord, simulator::Simulator, Config, Method, Workload},
	anyhow::Context,
	itertools::iproduct,
	std::ops::RangeInclusive,
};

/// Results of a sweep.
///
/// Append-only; iteration order is the sweep's enumeration order.
#[derive(Clone, Debug, Default)]
pub struct SweepResults {
	/// All runs, in enumeration order
	runs: Vec<(Config, RunRecord)>,
}

impl SweepResults {
	/// Creates new, empty, results
	pub fn new() -> Self {
		Self { runs: vec![] }
	}

	/// Appends a run
	fn push(&mut self, config: Config, record: RunRecord) {
		self.runs.push((config, record));
	}

	/// Returns all runs, in enumeration order
	pub fn runs(&self) -> &[(Config, RunRecord)] {
		&self.runs
	}

	/// Returns the number of runs
	pub fn len(&self) -> usize {
		self.runs.len()
	}

	/// Returns whether there are no runs
	pub fn is_empty(&self) -> bool {
		self.runs.is_empty()
	}
}

/// Runs a full sweep over the Cartesian product of `pairs`, `methods` and `workloads`.
///
/// Enumeration nests pairs outermost, then methods, then workloads, which
/// fixes the result order guaranteed by [`SweepResults`]. Invocations are
/// strictly sequential, since the simulator isn't known to be safe under
/// concurrent invocation. The first failed or unparsable invocation aborts
/// the whole sweep with an error naming its configuration.
pub fn run_sweep<S: Simulator>(
	simulator: &S,
	pairs: &[(usize, usize)],
	methods: &[Method],
	workloads: &[Workload],
) -> Result<SweepResults, anyhow::Error> {
	let mut results = SweepResults::new();
	for (&(page_count, frame_count), &method, &workload) in iproduct!(pairs, methods, workloads) {
		let config =
			Config::new(page_count, frame_count, method, workload).context("Invalid sweep configuration")?;
		tracing::info!(%config, "Running simulator");

		let output = simulator
			.run(&config)
			.with_context(|| format!("Unable to run simulator for configuration `{config}`"))?;
		let record = RunRecord::parse(&output)
			.with_context(|| format!("Unable to parse simulator output for configuration `{config}`"))?;
		results.push(config, record);
	}

	Ok(results)
}

/// Returns `(page_count, frame_count)` pairs for a linear frame-count sweep.
///
/// The page count is fixed; `samples` frame counts are evenly spaced over
/// `frame_counts`, both endpoints included, rounded to the nearest integer.
pub fn linear_frame_pairs(
	page_count: usize,
	frame_counts: RangeInclusive<usize>,
	samples: usize,
) -> Vec<(usize, usize)> {
	let (min, max) = frame_counts.into_inner();
	(0..samples)
		.map(|sample_idx| {
			let frame_count = if samples > 1 {
				let step = (max - min) as f64 / (samples - 1) as f64;
				min + (sample_idx as f64 * step).round() as usize
			} else {
				min
			};
			(page_count, frame_count)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	/// Stub simulator yielding fixed output for every configuration
	struct FixedOutput(&'static str);

	impl Simulator for FixedOutput {
		fn run(&self, _config: &Config) -> Result<String, anyhow::Error> {
			Ok(self.0.to_owned())
		}
	}

	/// Stub simulator that fails for every configuration
	struct AlwaysFails;

	impl Simulator for AlwaysFails {
		fn run(&self, config: &Config) -> Result<String, anyhow::Error> {
			anyhow::bail!("Simulator exited with signal for configuration `{config}`")
		}
	}

	/// Output in the simulator's own format
	const SIMULATOR_OUTPUT: &str = "scan result is ok\nPage Faults: 2\nDisk reads: 1\nDisk writes: 1\n";

	#[test]
	fn sweep_parses_each_run() {
		let results = run_sweep(
			&FixedOutput(SIMULATOR_OUTPUT),
			&[(4, 4)],
			&[Method::Fifo],
			&[Workload::Scan],
		)
		.expect("Sweep should succeed");

		assert_eq!(results.len(), 1);
		let (config, record) = &results.runs()[0];
		assert_eq!(config.page_count, 4);
		assert_eq!(config.method, Method::Fifo);
		assert_eq!(record.status, "ok");
		assert_eq!(record.page_faults, 2);
		assert_eq!(record.disk_reads, 1);
		assert_eq!(record.disk_writes, 1);
	}

	#[test]
	fn sweep_order_is_pairs_then_methods_then_workloads() {
		let pairs = [(4, 4), (4, 3)];
		let results = run_sweep(&FixedOutput(SIMULATOR_OUTPUT), &pairs, &Method::ALL, &Workload::ALL)
			.expect("Sweep should succeed");

		let expected = iproduct!(&pairs, &Method::ALL, &Workload::ALL)
			.map(|(&(page_count, frame_count), &method, &workload)| Config {
				page_count,
				frame_count,
				method,
				workload,
			})
			.collect::<Vec<_>>();
		let actual = results.runs().iter().map(|(config, _)| *config).collect::<Vec<_>>();
		assert_eq!(actual, expected);
	}

	#[test]
	fn sweep_allows_more_frames_than_pages() {
		let results = run_sweep(
			&FixedOutput(SIMULATOR_OUTPUT),
			&[(4, 10)],
			&[Method::Fifo],
			&[Workload::Scan],
		)
		.expect("Sweep should succeed");
		assert_eq!(results.runs()[0].0.frame_count, 10);
	}

	#[test]
	fn failed_invocation_aborts_the_sweep() {
		let res = run_sweep(&AlwaysFails, &[(4, 4)], &[Method::Fifo], &[Workload::Scan]);
		let err = res.expect_err("Sweep should fail");
		assert!(format!("{err:#}").contains("4 4 fifo scan"));
	}

	#[test]
	fn malformed_output_aborts_the_sweep() {
		let res = run_sweep(
			&FixedOutput("scan result is ok\nPage Faults: 2\n"),
			&[(4, 4)],
			&[Method::Fifo],
			&[Workload::Scan],
		);
		let err = res.expect_err("Sweep should fail");
		assert!(format!("{err:#}").contains("Unable to parse simulator output"));
	}

	#[test]
	fn linear_sweep_produces_the_full_cross() {
		let pairs = linear_frame_pairs(100, 3..=100, 10);
		let results = run_sweep(&FixedOutput(SIMULATOR_OUTPUT), &pairs, &Method::ALL, &Workload::ALL)
			.expect("Sweep should succeed");
		assert_eq!(results.len(), 90);
	}

	#[test]
	fn linear_frame_pairs_includes_both_endpoints() {
		let pairs = linear_frame_pairs(100, 3..=100, 10);
		assert_eq!(pairs.len(), 10);
		assert_eq!(pairs[0], (100, 3));
		assert_eq!(pairs[9], (100, 100));
		assert!(pairs.windows(2).all(|window| window[0].1 <= window[1].1));
	}

	#[test]
	fn linear_frame_pairs_with_a_single_sample() {
		assert_eq!(linear_frame_pairs(100, 3..=100, 1), vec![(100, 3)]);
	}
}
