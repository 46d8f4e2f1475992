//! Output data

// Imports
use crate::{sweep::SweepResults, Method, Workload};

/// Output data
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Data {
	pub runs: Vec<Run>,
}

/// A single run
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Run {
	pub page_count:  usize,
	pub frame_count: usize,
	pub method:      Method,
	pub workload:    Workload,
	pub status:      String,
	pub page_faults: u64,
	pub disk_reads:  u64,
	pub disk_writes: u64,
}

impl Data {
	/// Builds the output data from sweep results, in sweep order
	pub fn from_results(results: &SweepResults) -> Self {
		Self {
			runs: results
				.runs()
				.iter()
				.map(|(config, record)| Run {
					page_count:  config.page_count,
					frame_count: config.frame_count,
					method:      config.method,
					workload:    config.workload,
					status:      record.status.clone(),
					page_faults: record.page_faults,
					disk_reads:  record.disk_reads,
					disk_writes: record.disk_writes,
				})
				.collect(),
		}
	}
}
