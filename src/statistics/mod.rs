//! Summaries of the ledger: the running total, the total for the current
//! month, and the total for each category.

mod aggregation;
mod endpoint;

pub use endpoint::get_statistics_endpoint;
