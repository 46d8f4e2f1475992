//! Benchmark-sweep harness for an external page-replacement simulator (`vmsweep`)

// Modules
pub mod config;
pub mod data;
pub mod record;
pub mod report;
pub mod simulator;
pub mod sweep;

// Exports
pub use self::{
	config::{Config, Method, Workload},
	record::{Metric, RunRecord},
	simulator::{ProcessSimulator, Simulator},
	sweep::{run_sweep, SweepResults},
};
