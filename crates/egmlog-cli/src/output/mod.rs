pub mod report;
pub mod writer;

pub use report::{FileReport, Reporter, RunTotals};
pub use writer::{OutputPaths, write_outputs, write_raw_csv, write_summary_csv};
