//! HTTP surface for the tablesync service.
//!
//! Exposes a health check and the replication trigger endpoint. All of the
//! copy logic lives in `tablesync-replication`; this crate wires pools,
//! configuration, and routes together.

pub mod config;
pub mod routes;
pub mod startup;
