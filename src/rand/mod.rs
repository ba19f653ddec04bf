mod alias;
mod workload;

pub use alias::{Alias, WeightError};
pub use workload::{apply, Op, Report, Workload, WorkloadError};
