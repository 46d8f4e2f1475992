//! Tabular sweep report over a page-replacement simulator (`vmsweep`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	std::fs,
	vmsweep::{data, report, Method, ProcessSimulator, Workload},
	vmsweep_util::logger,
};

/// `(page_count, frame_count)` pairs of the report grid
const REPORT_PAIRS: [(usize, usize); 7] = [(4, 4), (4, 3), (3, 4), (20, 15), (25, 15), (15, 25), (50, 50)];

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Run the sweep over the fixed grid
	let simulator = ProcessSimulator::new(&args.simulator);
	let results = vmsweep::run_sweep(&simulator, &REPORT_PAIRS, &Method::ALL, &Workload::ALL)
		.context("Unable to run sweep")?;

	// Then report each run, in sweep order
	for (config, record) in results.runs() {
		println!("{}", report::table_line(config, record));
	}

	if let Some(output_path) = &args.output_file {
		let data = data::Data::from_results(&results);
		let output_file = fs::File::create(output_path).context("Unable to create output file")?;
		serde_json::to_writer(output_file, &data).context("Unable to write to output file")?;
	}

	Ok(())
}
