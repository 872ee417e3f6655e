//! Reporting infrastructure module

mod tracing_reporter;

pub use tracing_reporter::TracingReporter;
