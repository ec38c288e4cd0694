//! Data types produced by the comparison pipelines

/// Serializable record of a single comparison run.
pub mod report;
