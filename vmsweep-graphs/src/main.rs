//! Creates graphs from `vmsweep`'s sweep results

// Modules
mod args;

// Imports
use {
	anyhow::Context,
	args::Args,
	clap::Parser,
	gnuplot::{AxesCommon, Figure, PlotOption},
	itertools::iproduct,
	std::fs,
	vmsweep::{report, sweep, Method, Metric, ProcessSimulator, Workload},
	vmsweep_util::logger,
};

/// Page count of every sweep point
const PAGE_COUNT: usize = 100;

/// Frame counts sampled over this range
const FRAME_COUNTS: std::ops::RangeInclusive<usize> = 3..=100;

/// Number of frame-count samples
const FRAME_COUNT_SAMPLES: usize = 10;

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Create the output directory up-front, so a bad destination
	// fails before any simulator run or partially-written plot set.
	fs::create_dir_all(&args.output_dir)
		.with_context(|| format!("Unable to create output directory {:?}", args.output_dir))?;

	// Run the linear frame-count sweep
	let simulator = ProcessSimulator::new(&args.simulator);
	let pairs = sweep::linear_frame_pairs(PAGE_COUNT, FRAME_COUNTS, FRAME_COUNT_SAMPLES);
	let results = vmsweep::run_sweep(&simulator, &pairs, &Method::ALL, &Workload::ALL)
		.context("Unable to run sweep")?;

	// Then render one scatter plot per `(method, workload, metric)`
	for (&method, &workload, &metric) in iproduct!(&Method::ALL, &Workload::ALL, &Metric::ALL) {
		let series = report::series(&results, method, workload, metric);
		let title = report::series_title(method, workload, metric);
		let output_path = args.output_dir.join(format!("{title}.png"));
		tracing::info!(%title, points = series.len(), "Rendering plot");

		let frame_counts = series.iter().map(|&(frame_count, _)| frame_count as f64);
		let values = series.iter().map(|&(_, value)| value as f64);

		let mut figure = Figure::new();
		figure
			.axes2d()
			.set_title(&title, &[])
			.set_x_label("Frames", &[])
			.set_y_label(metric.name(), &[])
			.points(frame_counts, values, &[
				PlotOption::Color("black"),
				PlotOption::PointSymbol('O'),
			]);
		figure
			.save_to_png(&output_path, args.width, args.height)
			.map_err(|err| anyhow::anyhow!("Unable to save plot {output_path:?}: {err:?}"))?;
	}

	Ok(())
}
