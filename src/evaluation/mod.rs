mod progress;
mod report;
mod run_counters;

pub use progress::Progress;
pub use report::Report;
pub use run_counters::RunCounters;
