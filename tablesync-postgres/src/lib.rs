//! Low-level Postgres helpers for the tablesync service.
//!
//! Provides connection pool construction from shared configuration and the
//! catalog queries the replication engine relies on.

pub mod pool;
pub mod schema;
