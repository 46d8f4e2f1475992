//! Simulator output parsing

// Imports
use anyhow::Context;

/// Parsed metrics of one simulator invocation
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunRecord {
	/// Status token reported by the workload
	pub status: String,

	/// Total page faults
	pub page_faults: u64,

	/// Total disk reads
	pub disk_reads: u64,

	/// Total disk writes
	pub disk_writes: u64,
}

impl RunRecord {
	/// Parses a run record from the simulator's output.
	///
	/// The simulator emits one line per reported value. The value is the
	/// 4th token of lines with more than 3 whitespace-separated tokens
	/// and the 3rd token otherwise, which covers both the workload's
	/// status line (`scan result is <value>`) and the metric lines
	/// (`Page Faults: <value>`). The first four values are, in order,
	/// the status token, page faults, disk reads and disk writes. Lines
	/// past the fourth are ignored.
	pub fn parse(output: &str) -> Result<Self, anyhow::Error> {
		let mut values = output
			.lines()
			.filter(|line| !line.trim().is_empty())
			.map(Self::line_value);
		let mut next_value = |field: &str| {
			values
				.next()
				.with_context(|| format!("Missing output line for `{field}`"))?
				.with_context(|| format!("Malformed output line for `{field}`"))
		};

		let status = next_value("status")?.to_owned();
		let page_faults = Self::parse_metric(next_value("page faults")?, "page faults")?;
		let disk_reads = Self::parse_metric(next_value("disk reads")?, "disk reads")?;
		let disk_writes = Self::parse_metric(next_value("disk writes")?, "disk writes")?;

		Ok(Self {
			status,
			page_faults,
			disk_reads,
			disk_writes,
		})
	}

	/// Extracts the value token of an output line
	fn line_value(line: &str) -> Result<&str, anyhow::Error> {
		let tokens = line.split_whitespace().collect::<Vec<_>>();
		let value_idx = if tokens.len() > 3 { 3 } else { 2 };
		tokens.get(value_idx).copied().with_context(|| {
			format!(
				"Expected at least {} tokens in line {line:?}, found {}",
				value_idx + 1,
				tokens.len()
			)
		})
	}

	/// Parses a metric value as a non-negative integer
	fn parse_metric(value: &str, field: &str) -> Result<u64, anyhow::Error> {
		value
			.parse()
			.with_context(|| format!("Value for `{field}` isn't a non-negative integer: {value:?}"))
	}
}

/// Numeric metric kind of a [`RunRecord`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
	/// Page faults
	PageFaults,

	/// Disk reads
	DiskReads,

	/// Disk writes
	DiskWrites,
}

impl Metric {
	/// All metrics, in record order
	pub const ALL: [Self; 3] = [Self::PageFaults, Self::DiskReads, Self::DiskWrites];

	/// Metric name, as used in plot titles and file names
	pub fn name(self) -> &'static str {
		match self {
			Self::PageFaults => "Page_Faults",
			Self::DiskReads => "Disk_Reads",
			Self::DiskWrites => "Disk_Writes",
		}
	}

	/// Returns this metric's value in `record`
	pub fn value_of(self, record: &RunRecord) -> u64 {
		match self {
			Self::PageFaults => record.page_faults,
			Self::DiskReads => record.disk_reads,
			Self::DiskWrites => record.disk_writes,
		}
	}
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	/// Output in the simulator's own format
	const SIMULATOR_OUTPUT: &str = "scan result is ok\nPage Faults: 2\nDisk reads: 1\nDisk writes: 1\n";

	#[test]
	fn parses_the_simulator_format() {
		let record = RunRecord::parse(SIMULATOR_OUTPUT).expect("Output should parse");
		assert_eq!(record, RunRecord {
			status:      "ok".to_owned(),
			page_faults: 2,
			disk_reads:  1,
			disk_writes: 1,
		});
	}

	#[test]
	fn parsing_is_idempotent() {
		let first = RunRecord::parse(SIMULATOR_OUTPUT).expect("Output should parse");
		let second = RunRecord::parse(SIMULATOR_OUTPUT).expect("Output should parse");
		assert_eq!(first, second);
	}

	#[test]
	fn value_position_depends_on_token_count() {
		// 5 tokens on the status line still selects the 4th token,
		// 3 tokens on the metric lines select the 3rd.
		let output = "focus result is 120 extra\nPage Faults: 7\nDisk reads: 3\nDisk writes: 0\n";
		let record = RunRecord::parse(output).expect("Output should parse");
		assert_eq!(record.status, "120");
		assert_eq!(record.page_faults, 7);
		assert_eq!(record.disk_writes, 0);
	}

	#[test]
	fn empty_lines_are_skipped() {
		let output = "\nscan result is ok\n\nPage Faults: 2\nDisk reads: 1\n   \nDisk writes: 1\n";
		let record = RunRecord::parse(output).expect("Output should parse");
		assert_eq!(record.page_faults, 2);
	}

	#[test]
	fn lines_past_the_fourth_are_ignored() {
		let output = format!("{SIMULATOR_OUTPUT}Elapsed time: garbage\n");
		let record = RunRecord::parse(&output).expect("Output should parse");
		assert_eq!(record.disk_writes, 1);
	}

	#[test]
	fn too_few_lines_is_an_error() {
		let output = "scan result is ok\nPage Faults: 2\n";
		assert!(RunRecord::parse(output).is_err());
	}

	#[test]
	fn short_line_is_an_error() {
		let output = "scan result is ok\nFaults: 2\nDisk reads: 1\nDisk writes: 1\n";
		assert!(RunRecord::parse(output).is_err());
	}

	#[test]
	fn non_numeric_metric_is_an_error() {
		let output = "scan result is ok\nPage Faults: many\nDisk reads: 1\nDisk writes: 1\n";
		assert!(RunRecord::parse(output).is_err());
	}

	#[test]
	fn negative_metric_is_an_error() {
		let output = "scan result is ok\nPage Faults: -2\nDisk reads: 1\nDisk writes: 1\n";
		assert!(RunRecord::parse(output).is_err());
	}

	#[test]
	fn metric_values_match_record_fields() {
		let record = RunRecord::parse(SIMULATOR_OUTPUT).expect("Output should parse");
		assert_eq!(Metric::PageFaults.value_of(&record), 2);
		assert_eq!(Metric::DiskReads.value_of(&record), 1);
		assert_eq!(Metric::DiskWrites.value_of(&record), 1);
	}
}
