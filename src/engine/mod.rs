pub mod aggregate;
pub mod dataset;
pub mod errors;
pub mod report;
pub mod types;

pub use errors::*;
