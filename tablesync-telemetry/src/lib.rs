//! Telemetry initialization for tablesync binaries.

pub mod tracing;
