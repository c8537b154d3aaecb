mod connection;
mod pipeline;

pub use connection::*;
pub use pipeline::*;
