//! Sweep configurations

// Imports
use std::fmt;

/// Page-replacement method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
	/// Random frame eviction
	Random,

	/// Evict the oldest frame
	Fifo,

	/// Simulator-defined custom policy
	Custom,
}

impl Method {
	/// All methods, in sweep order
	pub const ALL: [Self; 3] = [Self::Random, Self::Fifo, Self::Custom];

	/// Returns the identifier passed to the simulator
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Random => "random",
			Self::Fifo => "fifo",
			Self::Custom => "custom",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Access-pattern workload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workload {
	/// Sequential scan over all pages
	Scan,

	/// Sorting access pattern
	Sort,

	/// Accesses focused on a small page set
	Focus,
}

impl Workload {
	/// All workloads, in sweep order
	pub const ALL: [Self; 3] = [Self::Scan, Self::Sort, Self::Focus];

	/// Returns the identifier passed to the simulator
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scan => "scan",
			Self::Sort => "sort",
			Self::Focus => "focus",
		}
	}
}

impl fmt::Display for Workload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single sweep point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Total virtual pages
	pub page_count: usize,

	/// Physical frames available.
	///
	/// May exceed `page_count`, in which case the simulator is
	/// expected to report no replacement activity.
	pub frame_count: usize,

	/// Replacement method
	pub method: Method,

	/// Access workload
	pub workload: Workload,
}

impl Config {
	/// Creates a new configuration.
	///
	/// Returns `Err` if either count is 0.
	pub fn new(
		page_count: usize,
		frame_count: usize,
		method: Method,
		workload: Workload,
	) -> Result<Self, anyhow::Error> {
		anyhow::ensure!(page_count >= 1, "Page count must be at least 1");
		anyhow::ensure!(frame_count >= 1, "Frame count must be at least 1");

		Ok(Self {
			page_count,
			frame_count,
			method,
			workload,
		})
	}
}

impl fmt::Display for Config {
	/// Formats this configuration as the simulator's argument list
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} {} {}",
			self.page_count, self.frame_count, self.method, self.workload
		)
	}
}
