//! Schema-introspection-and-bulk-copy engine for the tablesync service.
//!
//! One replication run reads every row of a source table, ensures the
//! destination table exists (creating it from the source's column metadata
//! when absent), and writes all rows through a single multi-row `INSERT`.
//! Runs are sequential internally; concurrent runs are safe because table
//! creation is idempotent and each insert is one atomic statement.

pub mod error;
pub mod fetch;
pub mod insert;
pub mod pipeline;
pub mod provision;
pub mod types;

pub use error::ReplicationError;
pub use pipeline::ReplicationPipeline;
pub use types::{Cell, Record};
