//! Result reporting

// Imports
use crate::{record::Metric, sweep::SweepResults, Config, Method, RunRecord, Workload};

/// Formats one table line for a run.
///
/// Keeps the original report shape so existing tooling can keep
/// scraping it.
pub fn table_line(config: &Config, record: &RunRecord) -> String {
	format!(
		"Result for command [ {config} ]  is [ Result: {} Page_Faults:{} Disk_Reads:{} Disk_Writes:{} ]",
		record.status, record.page_faults, record.disk_reads, record.disk_writes
	)
}

/// Extracts the `(frame_count, value)` series of `metric` for a
/// `(method, workload)` group, in sweep order.
pub fn series(results: &SweepResults, method: Method, workload: Workload, metric: Metric) -> Vec<(usize, u64)> {
	results
		.runs()
		.iter()
		.filter(|(config, _)| config.method == method && config.workload == workload)
		.map(|(config, record)| (config.frame_count, metric.value_of(record)))
		.collect()
}

/// Returns the title of a series, also used as its plot file stem
pub fn series_title(method: Method, workload: Workload, metric: Metric) -> String {
	format!("{method}_{workload}_{}", metric.name())
}
